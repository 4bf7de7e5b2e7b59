//! Oil & Gas Production System
//!
//! Single-page Dioxus app with two views:
//! 1. Dashboard: filter form, daily bar chart, production table, regional
//!    doughnut chart and a chat widget, all fed by `/production`.
//! 2. Map: Leaflet markers for every valid record from `/wells`.
//!
//! The backend base URL is fixed at build time (`OGP_API_URL`).

mod dashboard;
mod shell;

use dioxus::prelude::*;
use ogp_core::{ApiClient, ApiConfig};
use ogp_ui::state::{AppState, Capabilities};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("ogp-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let capabilities = Capabilities::detect();
        log::info!("Starting dashboard (browser: {})", capabilities.browser);
        AppState::new(ApiConfig::from_build_env().map(ApiClient::new), capabilities)
    });

    rsx! {
        shell::Shell {}
    }
}
