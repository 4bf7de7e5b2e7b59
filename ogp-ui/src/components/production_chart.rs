//! Daily production bar chart.

use crate::components::{Card, ChartContainer};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ogp_core::models::ProductionSnapshot;
use ogp_data::aggregate::{self, AxisScale};
use ogp_data::format::format_axis_tick;

const CHART_ID: &str = "production-chart";

#[derive(Props, Clone, PartialEq)]
pub struct ProductionChartProps {
    pub snapshot: ProductionSnapshot,
    #[props(default = false)]
    pub loading: bool,
}

/// Sums volume per date and draws one bar per date, re-deriving everything
/// whenever a new snapshot arrives.
#[component]
pub fn ProductionChart(props: ProductionChartProps) -> Element {
    let state = use_context::<AppState>();
    let browser = (state.capabilities)().browser;
    let snapshot = props.snapshot.clone();

    use_effect(use_reactive!(|(snapshot, browser)| {
        if !browser {
            return;
        }
        let data = aggregate::by_date(&snapshot.records);
        let scale = AxisScale::for_data(&data);
        log::debug!(
            "Production chart: {} date buckets, y max {}",
            data.len(),
            scale.max
        );

        let labels: Vec<String> = scale.ticks.iter().map(|t| format_axis_tick(*t)).collect();
        let config = serde_json::json!({
            "yScaleMax": scale.max,
            "yTicks": scale.ticks,
            "yTickLabels": labels,
            "xAxisLabel": "Date",
            "yAxisLabel": "Total Production Volume (bbl)",
            "color": "#1565C0",
        });

        js_bridge::init_scripts();
        js_bridge::render_bar_chart(
            CHART_ID,
            &js_bridge::to_js_json(&data),
            &js_bridge::to_js_json(&config),
        );
    }));

    rsx! {
        Card {
            title: "Daily Production Volume".to_string(),
            caption: "Y-axis: total production volume in barrels (bbl)".to_string(),
            ChartContainer {
                id: CHART_ID.to_string(),
                loading: props.loading,
                min_height: 400,
            }
        }
    }
}
