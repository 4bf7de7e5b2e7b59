//! Dashboard view: owns the production snapshot and feeds it to the table
//! and both charts.

use chrono::Utc;
use dioxus::prelude::*;
use ogp_core::FilterCriteria;
use ogp_data::dashboard::DashboardState;
use ogp_data::format::format_updated_at;
use ogp_ui::components::{
    Chatbot, FilterForm, LoadingSpinner, ProductionChart, ProductionTable, RegionalChart,
};
use ogp_ui::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let mut dashboard = use_signal(DashboardState::new);

    // Fetch `/production` for the given criteria. Only the latest request
    // may replace the snapshot; a failure keeps whatever is shown.
    let mut fetch = move |filters: FilterCriteria| {
        let Some(api) = state.api.peek().clone() else {
            return;
        };
        let ticket = dashboard.write().begin(filters.clone());

        spawn(async move {
            let outcome = api.fetch_production(&filters).await;
            dashboard.write().apply(ticket, outcome, Utc::now());
        });
    };

    use_effect(move || fetch(FilterCriteria::default()));

    let (current, is_loading) = {
        let view = dashboard.read();
        (view.snapshot.clone(), view.loading)
    };
    let first_load = is_loading && current.updated_at.is_none();

    rsx! {
        div {
            class: "dashboard",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 8px 0;",
            div {
                class: "dashboard-header",
                style: "display: flex; justify-content: space-between; align-items: baseline; flex-wrap: wrap; gap: 8px;",
                h1 { style: "margin: 0; font-size: 24px; color: #1a237e;", "Production Dashboard" }
                div {
                    style: "display: flex; align-items: center; gap: 12px; font-size: 12px; color: #666;",
                    if let Some(ts) = current.updated_at.as_ref() {
                        span { {format!("Last updated: {}", format_updated_at(ts))} }
                    }
                    button {
                        disabled: is_loading,
                        style: "padding: 6px 12px; border: 1px solid #1565C0; background: #fff; color: #1565C0; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| fetch(dashboard.peek().last_filters.clone()),
                        "Refresh"
                    }
                }
            }

            FilterForm { on_submit: move |filters: FilterCriteria| fetch(filters) }

            if first_load {
                LoadingSpinner {}
            } else {
                ProductionChart { snapshot: current.clone(), loading: is_loading }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); gap: 16px;",
                    ProductionTable { snapshot: current.clone() }
                    RegionalChart { snapshot: current.clone() }
                }
            }

            Chatbot {}
        }
    }
}
