use anyhow::{Context, Result};
use std::time::Duration;

/// Formatted results per reply when CARI_MAX_RESULTS is not set.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Outbound request timeout when CARI_TIMEOUT_SECS is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read once at startup and passed by reference
/// into the dispatcher and the search provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub bot_token: String,

    /// SerpApi credential
    pub serpapi_key: String,

    /// Cap on formatted results per reply (0 = uncapped)
    pub max_results: usize,

    /// Optional device emulation sent to the search API (e.g. "mobile")
    pub device: Option<String>,

    /// Timeout applied to every outbound search request
    pub request_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `TELEGRAM_BOT_TOKEN` and `SERPAPI_API_KEY` are required; the process
    /// refuses to start without them. Everything else has defaults.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .context("TELEGRAM_BOT_TOKEN is not set; set it in the environment or a .env file")?;

        let serpapi_key = std::env::var("SERPAPI_API_KEY")
            .context("SERPAPI_API_KEY is not set; set it in the environment or a .env file")?;

        let max_results = match std::env::var("CARI_MAX_RESULTS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .context("CARI_MAX_RESULTS must be a non-negative integer")?,
            Err(_) => DEFAULT_MAX_RESULTS,
        };

        let device = std::env::var("CARI_DEVICE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout_secs: u64 = match std::env::var("CARI_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .context("CARI_TIMEOUT_SECS must be a positive integer")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bot_token,
            serpapi_key,
            max_results,
            device,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
