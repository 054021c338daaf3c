//! Delegate replies to the OpenAI chat-completion API.

use log::{debug, info};

use crate::error::{HandlerError, Result};
use crate::openai::{CompletionParams, Message, OpenAiClient};
use crate::types::{ChatRequest, HistoryEntry, MessageRole, Reply};

pub const OPENAI_MODEL: &str = "gpt-4o-mini";

pub const MAX_TOKENS: u32 = 500;

pub const TEMPERATURE: f64 = 0.7;

/// Number of most recent history entries forwarded upstream.
pub const HISTORY_LIMIT: usize = 10;

pub const SYSTEM_PROMPT: &str = "Ты — LitvinovGPT, умный и дружелюбный ИИ-ассистент. \
Отвечай кратко, по делу и полезно. Помогай с вопросами, задачами, кодом и идеями.";

pub struct DelegateStrategy {
    client: Option<OpenAiClient>,
}

impl DelegateStrategy {
    /// Without an API key every reply fails with [`HandlerError::MissingApiKey`].
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: api_key.map(|key| OpenAiClient::new(key, base_url)),
        }
    }

    pub async fn reply(&self, request: &ChatRequest) -> Result<Reply> {
        let client = self.client.as_ref().ok_or(HandlerError::MissingApiKey)?;

        let messages = build_messages(&request.history, &request.message);
        debug!("Built {} messages for completion", messages.len());

        let params = CompletionParams {
            model: OPENAI_MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let reply = client.chat(&messages, params).await?;
        info!("OpenAI replied with {} characters", reply.chars().count());

        Ok(Reply {
            reply,
            model: OPENAI_MODEL.to_string(),
        })
    }
}

/// System prompt, the last [`HISTORY_LIMIT`] history entries, then the new message.
pub fn build_messages(history: &[HistoryEntry], message: &str) -> Vec<Message> {
    let recent = &history[history.len().saturating_sub(HISTORY_LIMIT)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(Message::new(MessageRole::System, SYSTEM_PROMPT));
    messages.extend(
        recent
            .iter()
            .map(|entry| Message::new(entry.role(), entry.text.clone())),
    );
    messages.push(Message::new(MessageRole::User, message));
    messages
}
