//! Card wrapper with a title, used by every dashboard panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    /// Optional caption under the title (e.g. axis units)
    #[props(default = String::new())]
    pub caption: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            class: "card",
            style: "background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); padding: 16px; margin-bottom: 16px;",
            h5 {
                class: "card-title",
                style: "margin: 0 0 4px 0; font-size: 16px; color: #1a237e;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
            {props.children}
        }
    }
}
