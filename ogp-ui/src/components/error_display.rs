//! Blocking error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Extra line under the message
    #[props(default = "Check the OGP_API_URL the app was built with.".to_string())]
    pub hint: String,
}

/// Shows a configuration error that keeps the app from talking to the backend.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "error-banner",
            style: "padding: 16px 20px; margin: 16px 0; background: #FFF3E0; color: #BF360C; border-left: 4px solid #E65100; border-radius: 4px;",
            p { style: "margin: 0; font-weight: 600;", "{props.message}" }
            if !props.hint.is_empty() {
                p { style: "margin: 6px 0 0 0; font-size: 13px; color: #6D4C41;", "{props.hint}" }
            }
        }
    }
}
