//! Leaflet map of well locations.
//!
//! Runs its own fetch, validate and render cycle, independent of the
//! dashboard filters. Each load replaces all markers.

use crate::components::LoadingSpinner;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ogp_data::wells::{MapDefaults, MapPhase};

const MAP_ID: &str = "well-map";

#[component]
pub fn WellMap() -> Element {
    let state = use_context::<AppState>();
    let browser = (state.capabilities)().browser;
    let mut phase = use_signal(|| MapPhase::Idle);

    // Fetch once per mount
    use_effect(move || {
        if !browser {
            return;
        }
        let Some(api) = state.api.peek().clone() else {
            return;
        };
        phase.set(MapPhase::Fetching);
        js_bridge::init_scripts();
        js_bridge::init_well_map(MAP_ID, &js_bridge::to_js_json(&MapDefaults::default()));

        spawn(async move {
            match api.fetch_wells().await {
                Ok(raw) => phase.set(MapPhase::from_response(&raw)),
                Err(e) => {
                    log::error!("Error loading well data: {}", e);
                    phase.set(MapPhase::Failed(e.to_string()));
                }
            }
        });
    });

    // Push layers to Leaflet whenever a load completes
    use_effect(move || {
        if let MapPhase::Loaded { layers, rejected } = &*phase.read() {
            log::info!(
                "Placing {} markers ({} records rejected)",
                layers.markers.len(),
                rejected
            );
            js_bridge::render_well_map(
                MAP_ID,
                &js_bridge::to_js_json(&MapDefaults::default()),
                &js_bridge::to_js_json(layers),
            );
        }
    });

    use_drop(move || {
        if browser {
            js_bridge::destroy_well_map(MAP_ID);
        }
    });

    let status = match &*phase.read() {
        MapPhase::Idle | MapPhase::Fetching => None,
        MapPhase::Loaded { layers, rejected } => Some(match *rejected {
            0 => format!("{} wells shown", layers.markers.len()),
            n => format!("{} wells shown, {} malformed records skipped", layers.markers.len(), n),
        }),
        MapPhase::Failed(_) => Some("Well locations could not be loaded.".to_string()),
    };

    rsx! {
        div {
            class: "map-page",
            style: "padding: 16px;",
            div {
                class: "map-header",
                style: "margin-bottom: 12px;",
                h1 { style: "margin: 0; font-size: 24px; color: #1a237e;", "Oil & Gas Production Map" }
                p { class: "subtitle", style: "margin: 4px 0 0 0; color: #666;", "Interactive map showing well locations" }
            }
            if browser {
                div {
                    class: "map-wrapper",
                    style: "height: 600px; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
                    div { id: MAP_ID, style: "height: 100%; width: 100%;" }
                }
                if let Some(status) = status {
                    p { style: "font-size: 12px; color: #888; margin-top: 6px;", "{status}" }
                }
            } else {
                LoadingSpinner { label: "Loading map...".to_string() }
            }
        }
    }
}
