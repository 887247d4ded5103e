//! Runtime configuration
//!
//! One secret matters: the OpenWeatherMap API key. It comes from the
//! `--api-key` flag or the `OPENWEATHER_API_KEY` environment variable.
//! A missing key is not a startup failure - the lookup fails instead and
//! the UI shows the usual error line.

use std::env;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Resolve the key: explicit flag wins over the environment.
    pub fn resolve(cli_key: Option<String>) -> Self {
        let api_key = cli_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("no API key configured; lookups will fail");
        }
        Self { api_key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        let config = Config::resolve(Some("abc123".into()));
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn blank_flag_counts_as_missing() {
        let config = Config::resolve(Some("   ".into()));
        assert!(config.api_key.is_none());
    }
}
