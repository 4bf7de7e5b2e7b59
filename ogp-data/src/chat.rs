//! Append-only chat transcript.
//!
//! Each submit is an independent request. Replies are appended in the order
//! they complete, which can differ from the order messages were sent; two
//! quick sends may therefore show their answers swapped.

use ogp_core::models::ChatMessage;

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm here to help you with the Oil & Gas Production Analytics. How can I assist you today?";

pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A transcript holding only the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            pending: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Replies still outstanding.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Record a user submit.
    ///
    /// Blank drafts are ignored and return `None`. Otherwise the draft is
    /// appended verbatim as a user message and returned so the caller can
    /// send it.
    pub fn submit(&mut self, draft: &str) -> Option<String> {
        if draft.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(draft));
        self.pending += 1;
        Some(draft.to_string())
    }

    /// Append the outcome of one chat request.
    pub fn settle(&mut self, outcome: anyhow::Result<String>) {
        self.pending = self.pending.saturating_sub(1);
        match outcome {
            Ok(reply) => self.messages.push(ChatMessage::bot(reply)),
            Err(e) => {
                log::error!("Error getting chatbot response: {}", e);
                self.messages.push(ChatMessage::bot(FALLBACK_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn starts_with_welcome() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages(), &[ChatMessage::bot(WELCOME_MESSAGE)]);
        assert_eq!(transcript.pending(), 0);
    }

    #[test]
    fn blank_submit_adds_nothing() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.submit(""), None);
        assert_eq!(transcript.submit("   \t\n"), None);
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.pending(), 0);
    }

    #[test]
    fn user_message_is_appended_before_reply() {
        let mut transcript = Transcript::new();
        let outgoing = transcript.submit("Hello");
        assert_eq!(outgoing.as_deref(), Some("Hello"));
        assert_eq!(transcript.messages().last(), Some(&ChatMessage::user("Hello")));
        assert_eq!(transcript.pending(), 1);

        transcript.settle(Ok("Hi there".to_string()));
        assert_eq!(transcript.messages().len(), 3);
        assert_eq!(transcript.messages()[2], ChatMessage::bot("Hi there"));
        assert_eq!(transcript.pending(), 0);
    }

    #[test]
    fn draft_is_kept_verbatim() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.submit("  wells?  ").as_deref(), Some("  wells?  "));
        assert_eq!(transcript.messages()[1].text, "  wells?  ");
    }

    #[test]
    fn failure_appends_fallback() {
        let mut transcript = Transcript::new();
        transcript.submit("Hello");
        transcript.settle(Err(anyhow!("connection refused")));
        let last = transcript.messages().last().unwrap();
        assert_eq!(last, &ChatMessage::bot(FALLBACK_MESSAGE));
    }

    #[test]
    fn replies_follow_completion_order() {
        let mut transcript = Transcript::new();
        transcript.submit("first");
        transcript.submit("second");
        assert_eq!(transcript.pending(), 2);
        transcript.settle(Ok("answer to second".to_string()));
        transcript.settle(Ok("answer to first".to_string()));
        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![WELCOME_MESSAGE, "first", "second", "answer to second", "answer to first"]
        );
    }
}
