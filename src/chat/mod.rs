//! Assistant transcript state and send gating.
//!
//! The transcript is append-only and lives for the session. `ChatLog`
//! owns all state transitions; the HTTP work itself lives in [`client`]
//! so the gating rules stay testable without a network.

pub mod client;

use crate::model::{ChatMessage, Sender};

use client::{ChatRequest, HistoryEntry, Provider, Role};

/// The greeting seeding every transcript. Excluded from the history
/// sent upstream.
pub const GREETING: &str = "Hi! I'm Ghost, your Kubernetes learning assistant. \
    Ask me anything about Kubernetes, containers, pods, services, or any \
    concept you're learning!";

/// Substitute bot message for any transport or non-2xx failure. The user
/// is never shown which kind of failure it was.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// The assistant panel's conversation state.
#[derive(Debug)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending: bool,
    provider: Provider,
}

impl ChatLog {
    pub fn new(provider: Provider) -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            pending: false,
            provider,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Begin a send: append the user's message and return the request to
    /// issue. Whitespace-only input, or a send while one is already
    /// pending, is a no-op and returns `None`.
    pub fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        // History covers every turn before this one, minus the greeting.
        let conversation_history = self
            .messages
            .iter()
            .skip(1)
            .map(|m| HistoryEntry {
                role: match m.sender {
                    Sender::User => Role::User,
                    Sender::Bot => Role::Assistant,
                },
                content: m.text.clone(),
            })
            .collect();

        self.messages.push(ChatMessage::user(text));
        self.pending = true;

        Some(ChatRequest {
            message: text.to_string(),
            provider: self.provider,
            conversation_history,
        })
    }

    /// Finish a send with the outcome of the request. Failures become the
    /// fixed fallback reply; either way the pending flag clears.
    pub fn resolve(&mut self, outcome: client::Result<String>) {
        let text = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_string());
        self.messages.push(ChatMessage::bot(text));
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reqwest::StatusCode;

    fn log() -> ChatLog {
        ChatLog::new(Provider::Groq)
    }

    #[test]
    fn transcript_opens_with_the_greeting() {
        let log = log();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].text, GREETING);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn whitespace_only_send_is_a_no_op() {
        let mut log = log();
        assert!(log.begin_send("   \t  ").is_none());
        assert_eq!(log.messages().len(), 1);
        assert!(!log.is_pending());
    }

    #[test]
    fn send_appends_user_message_and_sets_pending() {
        let mut log = log();
        let request = log.begin_send("  what is a pod?  ").unwrap();
        assert_eq!(request.message, "what is a pod?");
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.messages()[1].text, "what is a pod?");
        assert!(log.is_pending());
    }

    #[test]
    fn send_while_pending_is_a_no_op() {
        let mut log = log();
        log.begin_send("first").unwrap();
        assert!(log.begin_send("second").is_none());
        assert_eq!(log.messages().len(), 2);
    }

    #[test]
    fn history_excludes_greeting_and_current_message() {
        let mut log = log();
        log.begin_send("one").unwrap();
        log.resolve(Ok("answer one".to_string()));

        let request = log.begin_send("two").unwrap();
        let history = &request.conversation_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "one");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, "answer one");
    }

    #[test]
    fn failure_appends_exactly_one_fallback_and_clears_pending() {
        let mut log = log();
        log.begin_send("hello").unwrap();
        log.resolve(Err(client::ChatError::Status(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));

        assert_eq!(log.messages().len(), 3);
        let last = log.messages().last().unwrap();
        assert_eq!(last.text, FALLBACK_REPLY);
        assert_eq!(last.sender, Sender::Bot);
        assert!(!log.is_pending());
    }

    #[test]
    fn success_appends_the_reply() {
        let mut log = log();
        log.begin_send("hello").unwrap();
        log.resolve(Ok("**Pods** wrap containers.".to_string()));

        let last = log.messages().last().unwrap();
        assert_eq!(last.text, "**Pods** wrap containers.");
        assert!(!log.is_pending());
    }
}
