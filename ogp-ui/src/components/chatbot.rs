//! Collapsible chat widget that relays messages to the backend.

use crate::state::AppState;
use dioxus::prelude::*;
use ogp_data::chat::Transcript;

#[component]
pub fn Chatbot() -> Element {
    let state = use_context::<AppState>();
    let mut is_open = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut transcript = use_signal(Transcript::new);

    let mut send = move || {
        let Some(message) = transcript.write().submit(&draft.peek()) else {
            return;
        };
        draft.set(String::new());
        let api = state.api.peek().clone();

        // Fire and forget: replies land in completion order
        spawn(async move {
            let outcome = match api {
                Some(api) => api.send_chat(&message).await,
                None => Err(anyhow::anyhow!("no backend configured")),
            };
            transcript.write().settle(outcome);
        });
    };

    let blank = draft.read().trim().is_empty();
    let pending = transcript.read().pending();

    rsx! {
        div {
            class: if is_open() { "chatbot-container active" } else { "chatbot-container" },
            style: "position: fixed; bottom: 20px; right: 20px; width: 340px; background: #fff; border-radius: 10px; box-shadow: 0 4px 16px rgba(0,0,0,0.2); overflow: hidden; z-index: 1000;",
            div {
                class: "chatbot-header",
                style: "display: flex; justify-content: space-between; padding: 12px 16px; background: #1565C0; color: #fff; cursor: pointer;",
                onclick: move |_| is_open.toggle(),
                span { "Chat Assistant" }
                span { class: "chatbot-icon", "💬" }
            }
            if is_open() {
                div {
                    class: "chatbot-content",
                    div {
                        class: "chat-messages",
                        style: "height: 300px; overflow-y: auto; padding: 12px; display: flex; flex-direction: column; gap: 8px;",
                        for (i, message) in transcript.read().messages().iter().enumerate() {
                            div {
                                key: "{i}",
                                class: if message.is_user { "message user" } else { "message" },
                                style: if message.is_user {
                                    "align-self: flex-end; background: #1565C0; color: #fff; padding: 8px 12px; border-radius: 12px; max-width: 80%;"
                                } else {
                                    "align-self: flex-start; background: #f1f3f4; color: #222; padding: 8px 12px; border-radius: 12px; max-width: 80%;"
                                },
                                "{message.text}"
                            }
                        }
                        if pending > 0 {
                            div {
                                class: "message typing",
                                style: "align-self: flex-start; color: #888; font-style: italic; font-size: 12px;",
                                "Assistant is typing..."
                            }
                        }
                    }
                    div {
                        class: "chat-input",
                        style: "display: flex; gap: 8px; padding: 12px; border-top: 1px solid #eee;",
                        input {
                            r#type: "text",
                            placeholder: "Type your message...",
                            style: "flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                            value: "{draft}",
                            oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                            onkeyup: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    send();
                                }
                            },
                        }
                        button {
                            disabled: blank,
                            style: "padding: 8px 14px; background: #1565C0; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                            onclick: move |_| send(),
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
