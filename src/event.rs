//! HTTP-shaped envelope exchanged with the dispatching runtime.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::HandlerError;
use crate::types::Reply;

/// Inbound event as delivered by the function runtime.
///
/// Only the method and body are consumed; other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Event {
    pub fn new(method: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            body: Some(body.into()),
        }
    }

    /// Request method, `POST` when the runtime omits it.
    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("POST")
    }
}

/// Outbound response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    /// CORS preflight answer.
    pub fn preflight() -> Self {
        let headers = BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Methods".to_string(),
                "POST, OPTIONS".to_string(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                "Content-Type".to_string(),
            ),
        ]);

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
        }
    }

    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            status_code: status.as_u16(),
            headers,
            body: body.to_string(),
        }
    }

    pub fn reply(reply: &Reply) -> Self {
        Self::json(
            StatusCode::OK,
            &json!({ "reply": reply.reply, "model": reply.model }),
        )
    }

    pub fn error(err: &HandlerError) -> Self {
        Self::json(err.status_code(), &json!({ "error": err.client_message() }))
    }
}
