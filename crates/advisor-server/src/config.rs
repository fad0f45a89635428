//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use std::path::PathBuf;
use std::str::FromStr;

use advisor_core::provider::DEFAULT_MODEL;
use anyhow::{Context, bail};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Which text-generation backend answers delegated questions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Mock,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "mock" => Ok(Self::Mock),
            other => bail!("unknown ADVISOR_PROVIDER '{other}' (expected 'openai' or 'mock')"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    /// Preferred port; `port + 1` is tried once if it is taken
    pub port: u16,
    pub static_dir: PathBuf,
    pub provider: ProviderKind,
    pub mock_reply: Option<String>,
    pub model: String,
    pub market_prices_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            provider: ProviderKind::OpenAi,
            mock_reply: None,
            model: DEFAULT_MODEL.into(),
            market_prices_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{port}'"))?,
            None => defaults.port,
        };

        let provider = var("ADVISOR_PROVIDER")
            .map(|p| p.parse::<ProviderKind>())
            .transpose()?
            .unwrap_or(defaults.provider);

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            static_dir: var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            provider,
            mock_reply: var("MOCK_REPLY"),
            model: var("OPENAI_MODEL").unwrap_or(defaults.model),
            market_prices_file: var("MARKET_PRICES_FILE").map(PathBuf::from),
        })
    }
}
