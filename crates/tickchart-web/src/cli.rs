//! Command-line and environment configuration for the `tickchart` server.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--bind` | `TICKCHART_BIND` | `127.0.0.1:5000` |
//! | `--symbols` | `TICKCHART_SYMBOLS` | `symbols.json` |
//! | `--api-key` | `API_KEY` | required |
//! | `--api-url` | `API_URL` | Alpha Vantage query endpoint |
//! | `--timeout-ms` | `TICKCHART_TIMEOUT_MS` | `10000` |
//! | `--verify-symbols` | `TICKCHART_VERIFY_SYMBOLS` | off |

use std::path::PathBuf;

use clap::Parser;
use tickchart_core::{ApiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};

use crate::error::WebError;

/// Serve a form that charts stock price history from a quote API.
#[derive(Debug, Parser)]
#[command(name = "tickchart", author, version, about)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "TICKCHART_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// JSON listing whose `ACT Symbol` values populate the symbol picker.
    #[arg(long, env = "TICKCHART_SYMBOLS", default_value = "symbols.json")]
    pub symbols: PathBuf,

    /// Quote API key.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Quote API endpoint.
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each outbound API call, in milliseconds.
    #[arg(long, env = "TICKCHART_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Check symbols with SYMBOL_SEARCH before fetching their series.
    #[arg(long, env = "TICKCHART_VERIFY_SYMBOLS")]
    pub verify_symbols: bool,
}

impl ServerArgs {
    pub fn api_config(&self) -> Result<ApiConfig, WebError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(WebError::MissingApiKey)?;

        Ok(ApiConfig::new(api_key, self.api_url.as_str()).with_timeout_ms(self.timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_build_api_config() {
        let args = ServerArgs::try_parse_from([
            "tickchart",
            "--api-key",
            "k-123",
            "--api-url",
            "http://localhost:9000/query",
            "--timeout-ms",
            "500",
        ])
        .expect("args parse");

        let config = args.api_config().expect("config builds");
        assert_eq!(config.api_key(), "k-123");
        assert_eq!(config.base_url(), "http://localhost:9000/query");
        assert_eq!(config.timeout_ms(), 500);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let args = ServerArgs::try_parse_from(["tickchart", "--api-key", "  "]).expect("args parse");
        assert!(matches!(args.api_config(), Err(WebError::MissingApiKey)));
    }
}
