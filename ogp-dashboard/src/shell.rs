//! Navigation bar and view switch.

use crate::dashboard::Dashboard;
use dioxus::prelude::*;
use ogp_ui::components::{ErrorDisplay, WellMap};
use ogp_ui::state::{AppState, View};

#[component]
pub fn Shell() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "min-height: 100vh; background: #f5f6fa; font-family: system-ui, -apple-system, sans-serif;",
            NavBar {}
            main {
                style: "max-width: 1200px; margin: 0 auto; padding: 8px;",
                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                } else {
                    // Only the selected view is mounted
                    match (state.view)() {
                        View::Dashboard => rsx! { Dashboard {} },
                        View::Map => rsx! { WellMap {} },
                    }
                }
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.view)();

    rsx! {
        nav {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 24px; padding: 12px 24px; background: #1a237e; color: #fff;",
            span {
                class: "navbar-brand",
                style: "font-size: 18px; font-weight: 600;",
                "Oil & Gas Production System"
            }
            div {
                class: "nav-links",
                style: "display: flex; gap: 12px;",
                for view in View::ALL {
                    a {
                        key: "{view:?}",
                        href: "#",
                        class: if view == active { "nav-link active" } else { "nav-link" },
                        style: if view == active {
                            "color: #fff; text-decoration: none; padding: 6px 10px; border-radius: 4px; background: rgba(255,255,255,0.2);"
                        } else {
                            "color: #c5cae9; text-decoration: none; padding: 6px 10px; border-radius: 4px;"
                        },
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            state.view.set(view);
                        },
                        {view.label()}
                    }
                }
            }
        }
    }
}
