use std::env;

use log::{debug, error, info, warn};
use strum::{Display, EnumString};

use crate::error::{HandlerError, Result};

/// Default OpenAI-compatible API root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which reply strategy answers chat messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum StrategyKind {
    #[default]
    #[strum(serialize = "openai")]
    OpenAi,
    #[strum(serialize = "fallback")]
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub strategy: StrategyKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        // A missing key is reported per request, not at startup.
        let openai_api_key = present_key(env::var("OPENAI_API_KEY").ok());
        if openai_api_key.is_none() {
            warn!("OPENAI_API_KEY is not set");
        }

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());

        let strategy = match env::var("REPLY_STRATEGY") {
            Ok(value) => parse_strategy(&value)?,
            Err(_) => StrategyKind::default(),
        };

        info!("Configuration loaded successfully");
        debug!(
            "OpenAI API key length: {} characters",
            openai_api_key.as_deref().map_or(0, str::len)
        );
        debug!("OpenAI base URL: {openai_base_url}");
        debug!("Reply strategy: {strategy}");

        Ok(Self {
            openai_api_key,
            openai_base_url,
            strategy,
        })
    }
}

/// Only an unset or empty key counts as missing.
fn present_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.is_empty())
}

fn parse_strategy(value: &str) -> Result<StrategyKind> {
    value.trim().parse().map_err(|_| {
        error!("Unknown REPLY_STRATEGY value: {value}");
        HandlerError::Config(format!(
            "unknown REPLY_STRATEGY '{value}', expected 'openai' or 'fallback'"
        ))
    })
}
