use std::{env, time::Duration};

use crate::{errors::Error, Result};

/// Public collection API of the Metropolitan Museum of Art.
pub const MET_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Sent on every outbound API request.
pub const USER_AGENT: &str = "MetArtTelegramBot/1.0";

/// Typed configuration, loaded once at startup and shared via `Arc`.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub met_base_url: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub echo_delay: Duration,
}

impl Config {
    /// Defaults for everything but the token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            telegram_bot_token: token.into(),
            met_base_url: MET_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            http_timeout: Duration::from_secs(30),
            echo_delay: Duration::from_millis(500),
        }
    }

    /// Load from the process environment, reading `.env` first when present.
    pub fn load() -> Result<Self> {
        // Existing environment variables are never overridden by `.env`.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("bot_token").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let mut cfg = Self::with_token(token.trim());

        if let Some(base) = lookup("MET_BASE_URL").and_then(non_empty) {
            cfg.met_base_url = base.trim().trim_end_matches('/').to_string();
        }
        // A zero timeout would fail every request.
        if let Some(ms) = parse_u64(lookup("HTTP_TIMEOUT_MS")).filter(|ms| *ms > 0) {
            cfg.http_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_u64(lookup("ECHO_DELAY_MS")) {
            cfg.echo_delay = Duration::from_millis(ms);
        }

        Ok(cfg)
    }
}

fn parse_u64(v: Option<String>) -> Option<u64> {
    v.and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
