use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAI API error ({status}): {message}")]
    OpenAiApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("OpenAI response error: {0}")]
    OpenAiResponse(String),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HandlerError {
    /// HTTP status the handler answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HandlerError::EmptyMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the text placed in the `error` field of the response body.
    ///
    /// Anything that is not a request or configuration problem is reported
    /// with the processing-error prefix followed by the underlying error text.
    pub fn client_message(&self) -> String {
        match self {
            HandlerError::MethodNotAllowed => "Method not allowed".to_string(),
            HandlerError::EmptyMessage => "Сообщение не может быть пустым".to_string(),
            HandlerError::MissingApiKey => "OpenAI API ключ не настроен".to_string(),
            other => format!("Ошибка обработки: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
