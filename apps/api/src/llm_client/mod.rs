//! LLM Client — the single point of entry for language-model calls.
//!
//! Handlers never talk to a model API directly. They receive an
//! `Arc<dyn CompletionModel>` through `AppState`, built once at startup by
//! [`build_completion_model`]. `None` means no model is configured.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, LlmProvider};

pub mod anthropic;
pub mod ollama;

pub use anthropic::AnthropicClient;
pub use ollama::OllamaClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-completion backend. Implementations must be safe to call from many
/// requests at once.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends one prompt and returns the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Human-readable backend/model label for logs.
    fn name(&self) -> String;
}

/// Builds the configured backend. Returns `Ok(None)` when no model should be
/// used; the service then falls back to canned questions.
pub fn build_completion_model(config: &Config) -> Result<Option<Arc<dyn CompletionModel>>, LlmError> {
    let timeout = Duration::from_secs(config.llm_timeout_secs);

    let model: Arc<dyn CompletionModel> = match config.llm_provider {
        LlmProvider::None => return Ok(None),
        LlmProvider::Anthropic => match &config.anthropic_api_key {
            Some(key) => Arc::new(AnthropicClient::new(
                key.clone(),
                config.anthropic_model.clone(),
                timeout,
            )?),
            None => {
                warn!("LLM_PROVIDER=anthropic but ANTHROPIC_API_KEY is not set");
                return Ok(None);
            }
        },
        LlmProvider::Ollama => Arc::new(OllamaClient::new(
            config.ollama_base_url.clone(),
            config.ollama_model.clone(),
            timeout,
        )?),
    };

    info!("LLM client initialized ({})", model.name());
    Ok(Some(model))
}
