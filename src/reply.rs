//! Reply strategies: delegate to OpenAI or answer locally from keyword rules.

mod delegate;
mod keyword;
mod random;

use log::debug;

use crate::config::{Config, StrategyKind};
use crate::error::Result;
use crate::types::{ChatRequest, Reply};

pub use delegate::{
    DelegateStrategy, HISTORY_LIMIT, MAX_TOKENS, OPENAI_MODEL, SYSTEM_PROMPT, TEMPERATURE,
    build_messages,
};
pub use keyword::{FALLBACK_MODEL, KEYWORD_RULES, KeywordRule, KeywordStrategy};
pub use random::{FixedChoice, RandomSource, ThreadRandom};

/// The strategy that turns a validated chat request into a reply.
pub enum ReplyStrategy {
    Delegate(DelegateStrategy),
    Keyword(KeywordStrategy),
}

impl ReplyStrategy {
    /// Build the strategy selected by configuration.
    pub fn from_config(config: &Config) -> Self {
        debug!("Selecting reply strategy: {}", config.strategy);
        match config.strategy {
            StrategyKind::OpenAi => ReplyStrategy::Delegate(DelegateStrategy::new(
                config.openai_api_key.clone(),
                config.openai_base_url.clone(),
            )),
            StrategyKind::Fallback => ReplyStrategy::Keyword(KeywordStrategy::default()),
        }
    }

    pub async fn reply(&self, request: &ChatRequest) -> Result<Reply> {
        match self {
            ReplyStrategy::Delegate(strategy) => strategy.reply(request).await,
            ReplyStrategy::Keyword(strategy) => Ok(strategy.reply(&request.message)),
        }
    }
}
