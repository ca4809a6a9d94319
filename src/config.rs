use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    #[allow(dead_code)]
    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    /// Origin of the tender backend. All request paths are joined onto this.
    pub api_base_url: Url,

    /// Overall per-request deadline. The summary endpoint is LLM-backed and
    /// can legitimately run for tens of seconds, hence the generous default.
    pub http_timeout_seconds: u64,

    /// Override for the credentials file (defaults to ~/.optibots/credentials).
    pub credentials_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        let api_base_url = env::var("OPTIBOTS_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let api_base_url = Url::parse(api_base_url.trim_end_matches('/'))
            .with_context(|| format!("OPTIBOTS_API_URL is not a valid URL: {api_base_url}"))?;

        let http_timeout_seconds = env::var("OPTIBOTS_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120);

        let credentials_path = env::var("OPTIBOTS_CREDENTIALS").ok().map(PathBuf::from);

        Ok(Settings {
            env,
            api_base_url,
            http_timeout_seconds,
            credentials_path,
        })
    }
}
