//! Container div that D3/Leaflet render into.

use crate::state::AppState;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side renders into
    pub id: String,
    /// Whether data for the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container for D3.js charts and the Leaflet map, with a loading overlay.
///
/// Outside a browser there is nothing to render into, so a placeholder is
/// shown instead of the target div.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let browser = (state.capabilities)().browser;
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if !browser {
                div {
                    class: "ogp-placeholder",
                    style: "padding: 40px; text-align: center; color: #666;",
                    "Loading..."
                }
            } else {
                if props.loading {
                    div {
                        style: "position: absolute; top: 8px; right: 12px; font-size: 12px; color: #666;",
                        "Updating..."
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%; min-height: {props.min_height}px;",
                }
            }
        }
    }
}
