use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:8080,http://localhost:3000";

/// Which language-model backend serves question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Anthropic,
    Ollama,
    /// No model: `/generate-questions` answers with the canned list.
    None,
}

impl LlmProvider {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(LlmProvider::Anthropic),
            "ollama" => Ok(LlmProvider::Ollama),
            "none" | "" => Ok(LlmProvider::None),
            other => bail!("LLM_PROVIDER must be one of anthropic, ollama, none (got '{other}')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment starts a working
/// service that serves dummy questions.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub cors_origins: Vec<String>,
    pub llm_provider: LlmProvider,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or("RUST_LOG", "info"),
            upload_dir: PathBuf::from(or("UPLOAD_DIR", "uploads")),
            max_upload_bytes: or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            cors_origins: or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            llm_provider: LlmProvider::parse(&or("LLM_PROVIDER", "none"))?,
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_model: or("ANTHROPIC_MODEL", "claude-sonnet-4-5"),
            ollama_base_url: or("OLLAMA_BASE_URL", "http://localhost:11434"),
            ollama_model: or("OLLAMA_MODEL", "llama3.1:8b"),
            llm_timeout_secs: or("LLM_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}
