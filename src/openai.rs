use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{HandlerError, Result};
use crate::types::MessageRole;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f64,
}

pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Request a single completion and return the first choice's text.
    pub async fn chat(&self, messages: &[Message], params: CompletionParams<'_>) -> Result<String> {
        debug!(
            "Sending request to OpenAI API with {} messages",
            messages.len()
        );

        let request = ChatCompletionRequest {
            model: params.model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(HandlerError::OpenAiApi { status, message });
        }

        let api_response: ChatCompletionResponse = response.json().await?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| HandlerError::OpenAiResponse("No choices in response".to_string()))?;

        debug!("Received response from OpenAI API");
        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = OpenAiClient::new("k".to_string(), "http://localhost:1/v1/".to_string());
        assert_eq!(
            client.completions_url(),
            "http://localhost:1/v1/chat/completions"
        );
    }

    #[test]
    fn request_serializes_expected_fields() -> Result<()> {
        let messages = vec![Message::new(MessageRole::System, "sys")];
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            max_tokens: 500,
            temperature: 0.5,
        };
        let value = serde_json::to_value(&request)?;
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["temperature"], 0.5);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "sys");
        Ok(())
    }
}
