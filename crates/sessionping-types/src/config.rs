//! Environment-provided configuration.
//!
//! The relay takes no CLI flags: everything comes from environment
//! variables, loaded once at startup into a typed `Config`.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default Telegram Bot API base URL. Overridable for proxies and tests.
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Runtime configuration for the relay process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`SESSIONPING_BOT_TOKEN`, required).
    pub bot_token: String,
    /// Directory holding the SQLite database file.
    pub data_dir: PathBuf,
    /// SQLite database URL (`sqlite://{data_dir}/sessionping.db?mode=rwc`).
    pub database_url: String,
    /// Bind address host (`SESSIONPING_HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind address port (`SESSIONPING_PORT`, default `8080`).
    pub port: u16,
    /// Telegram Bot API base URL (`SESSIONPING_TELEGRAM_API`).
    pub telegram_api: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `SESSIONPING_DATA_DIR` controls where the SQLite file lives,
    /// falling back to `~/.sessionping`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("SESSIONPING_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingVar("SESSIONPING_BOT_TOKEN"))?;

        let data_dir = std::env::var("SESSIONPING_DATA_DIR").unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            format!("{home}/.sessionping")
        });
        let database_url = format!("sqlite://{data_dir}/sessionping.db?mode=rwc");
        let data_dir = PathBuf::from(data_dir);

        let host = std::env::var("SESSIONPING_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("SESSIONPING_PORT") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                var: "SESSIONPING_PORT",
                message: format!("{e}"),
            })?,
            Err(_) => 8080,
        };

        let telegram_api = std::env::var("SESSIONPING_TELEGRAM_API")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API.to_string());

        Ok(Self {
            bot_token,
            data_dir,
            database_url,
            host,
            port,
            telegram_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var mutation is process-global, so everything lives in one test.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::remove_var("SESSIONPING_BOT_TOKEN");
            std::env::remove_var("SESSIONPING_PORT");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("SESSIONPING_BOT_TOKEN"))
        ));

        unsafe {
            std::env::set_var("SESSIONPING_BOT_TOKEN", "123:abc");
            std::env::set_var("SESSIONPING_DATA_DIR", "/tmp/sessionping-test");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sessionping-test"));
        assert_eq!(
            config.database_url,
            "sqlite:///tmp/sessionping-test/sessionping.db?mode=rwc"
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.telegram_api, DEFAULT_TELEGRAM_API);

        unsafe {
            std::env::set_var("SESSIONPING_PORT", "not-a-port");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidVar { var: "SESSIONPING_PORT", .. })
        ));

        unsafe {
            std::env::remove_var("SESSIONPING_BOT_TOKEN");
            std::env::remove_var("SESSIONPING_DATA_DIR");
            std::env::remove_var("SESSIONPING_PORT");
        }
    }
}
