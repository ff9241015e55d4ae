//! HTTP client for the chat completion endpoint.
//!
//! One best-effort POST per question: no retry, no backoff, no
//! cancellation. The TUI runs the request on a background thread and
//! receives the outcome over a channel so only the panel's pending flag
//! waits on the network.

use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

/// Which upstream LLM the endpoint should relay to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Groq,
    Openrouter,
}

/// Role labels the completion endpoint expects for prior turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub provider: Provider,
    pub conversation_history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<String>,
}

/// Errors from one send attempt. The panel collapses all of these into
/// a single fallback message; the distinction exists for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Status(reqwest::StatusCode),
}

pub type Result<T> = core::result::Result<T, ChatError>;

/// Reply used when the endpoint answers 2xx with no message text.
pub const EMPTY_REPLY: &str = "Sorry, I could not generate a response.";

/// POST the request and return the reply text.
pub fn post(url: &str, request: &ChatRequest) -> Result<String> {
    let response = reqwest::blocking::Client::new()
        .post(url)
        .json(request)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::Status(status));
    }

    let body: ChatResponse = response.json()?;
    Ok(body
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| EMPTY_REPLY.to_string()))
}

/// Issue the request on a background thread. The outcome arrives on the
/// returned channel; dropping the receiver does not abort the request.
pub fn post_in_background(url: String, request: ChatRequest) -> mpsc::Receiver<Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the app quit; nothing to do then.
        let _ = tx.send(post(&url, &request));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = ChatRequest {
            message: "What is a pod?".to_string(),
            provider: Provider::Groq,
            conversation_history: vec![HistoryEntry {
                role: Role::Assistant,
                content: "Ahoy.".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["message"], "What is a pod?");
        assert_eq!(value["provider"], "groq");
        assert_eq!(value["conversationHistory"][0]["role"], "assistant");
        assert_eq!(value["conversationHistory"][0]["content"], "Ahoy.");
    }

    #[test]
    fn provider_labels_are_lowercase() {
        assert_eq!(serde_json::to_value(Provider::Openrouter).unwrap(), "openrouter");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }

    #[test]
    fn response_message_is_optional() {
        let body: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ChatResponse = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("hi"));
    }
}
