//! Startup configuration.
//!
//! Values come from flags or the environment (a `.env` file is loaded first by
//! the binary). The parsed [`Cli`] is validated into a [`RelayConfig`], which is
//! the only configuration the server sees.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: Gemini API key (required)
//! - `HOST` / `PORT`: bind address (default: 127.0.0.1:5000)
//! - `GEMINI_MODEL`: model name (default: gemini-2.0-flash)
//! - `GEMINI_BASE_URL`: API base URL
//! - `GEMINI_TIMEOUT_SECS`: outbound request timeout (default: 30)
//! - `WORKERS`: actix worker count (default: one per CPU)
//! - `DEBUG`: verbose logging

use std::time::Duration;

use clap::Parser;
use edukit_llm::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use edukit_llm::GeminiProvider;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(name = "edukit-server")]
#[command(about = "Edu-Kit quiz generation relay for the Gemini API")]
#[command(version)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for each Gemini call, in seconds
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Number of HTTP workers
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,

    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY must not be empty")]
    MissingApiKey,

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("worker count must be at least one")]
    ZeroWorkers,
}

/// Validated relay configuration.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub workers: Option<usize>,
    pub debug: bool,
}

impl RelayConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let api_key = cli.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if cli.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }

        Ok(Self {
            api_key,
            host: cli.host,
            port: cli.port,
            model: cli.model,
            base_url: cli.base_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            workers: cli.workers,
            debug: cli.debug,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn gemini_provider(&self) -> GeminiProvider {
        GeminiProvider::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(self.timeout)
    }
}

// Manual impl keeps the key out of logs
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("workers", &self.workers)
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("edukit-server").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--api-key", "k"]).unwrap();
        let config = RelayConfig::from_cli(cli).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn test_bind_addr() {
        let cli = parse(&["--api-key", "k", "--host", "0.0.0.0", "--port", "9000"]).unwrap();
        let config = RelayConfig::from_cli(cli).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_absent_api_key_refuses_to_start() {
        std::env::remove_var("GEMINI_API_KEY");
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let cli = parse(&["--api-key", "   "]).unwrap();
        assert_eq!(
            RelayConfig::from_cli(cli).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = parse(&["--api-key", "k", "--timeout-secs", "0"]).unwrap();
        assert_eq!(
            RelayConfig::from_cli(cli).unwrap_err(),
            ConfigError::ZeroTimeout
        );
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let cli = parse(&["--api-key", "super-secret", "--port", "8080"]).unwrap();
        let config = RelayConfig::from_cli(cli).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("8080"));
    }
}
