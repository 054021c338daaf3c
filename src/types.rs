//! Common types shared by the handler and the reply strategies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a message in the conversation.
///
/// Maps to OpenAI chat-completion message roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the human user
    User,
    /// Message from the AI assistant
    Assistant,
    /// System prompt or instructions
    System,
}

/// One caller-supplied turn of prior conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    pub sender: Option<String>,
    pub text: String,
}

impl HistoryEntry {
    /// Read `sender` and `text` independently; a mistyped field only loses itself.
    pub fn from_value(item: &Value) -> Self {
        let field = |name: &str| item.get(name).and_then(Value::as_str);
        Self {
            sender: field("sender").map(str::to_string),
            text: field("text").unwrap_or_default().to_string(),
        }
    }

    /// Only the `"user"` sender is the human; everything else is the assistant.
    pub fn role(&self) -> MessageRole {
        if self.sender.as_deref() == Some("user") {
            MessageRole::User
        } else {
            MessageRole::Assistant
        }
    }
}

/// Decoded POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

impl ChatRequest {
    /// Decode a request body, treating anything unusable as `{}`.
    ///
    /// `message` is trimmed. Malformed history items degrade to empty entries
    /// rather than rejecting the request.
    pub fn from_body(body: Option<&str>) -> Self {
        let value = body
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
            .unwrap_or(Value::Null);

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();

        let history = match value.get("history") {
            Some(Value::Array(items)) => items
                .iter()
                .map(HistoryEntry::from_value)
                .collect(),
            _ => Vec::new(),
        };

        Self { message, history }
    }
}

/// Successful reply, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub reply: String,
    pub model: String,
}
