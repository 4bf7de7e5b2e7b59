//! Production-by-region doughnut chart.

use crate::components::{Card, ChartContainer};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ogp_core::models::ProductionSnapshot;
use ogp_data::aggregate;

const CHART_ID: &str = "regional-chart";

#[derive(Props, Clone, PartialEq)]
pub struct RegionalChartProps {
    pub snapshot: ProductionSnapshot,
}

#[component]
pub fn RegionalChart(props: RegionalChartProps) -> Element {
    let state = use_context::<AppState>();
    let browser = (state.capabilities)().browser;
    let snapshot = props.snapshot.clone();

    use_effect(use_reactive!(|(snapshot, browser)| {
        if !browser {
            return;
        }
        // Slices follow first-seen region order
        let data = aggregate::by_region(&snapshot.records);
        let config = serde_json::json!({ "legendTitle": "Regions" });

        js_bridge::init_scripts();
        js_bridge::render_doughnut_chart(
            CHART_ID,
            &js_bridge::to_js_json(&data),
            &js_bridge::to_js_json(&config),
        );
    }));

    rsx! {
        Card {
            title: "Production by Region".to_string(),
            ChartContainer {
                id: CHART_ID.to_string(),
                min_height: 380,
            }
        }
    }
}
