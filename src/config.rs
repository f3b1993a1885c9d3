//! Configuration management for the contact book.
//!
//! Every setting is optional and read from the environment. A `.env` file in
//! the working directory is loaded first if one is present. Parent directories
//! are not searched.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::Path;

/// Default number of days the `birthdays` command looks ahead.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Configuration for the contact book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Look-ahead window for `birthdays` when no argument is given (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS`: default `birthdays` window (default: 7)
    /// - `LOG_LEVEL`: `tracing` filter directive used when `RUST_LOG` is unset
    ///   (default: "error"). Unparseable directives are ignored by the filter.
    pub fn from_env() -> ConfigResult<Self> {
        Self::load_dotenv(Path::new("."));

        let birthday_window_days = Self::parse_env_u32(
            "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS",
            DEFAULT_BIRTHDAY_WINDOW_DAYS,
        )?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Load `dir/.env` without overriding variables that are already set.
    ///
    /// Unlike `dotenvy::dotenv()`, this never walks up to parent directories.
    fn load_dotenv(dir: &Path) {
        // dotenvy doesn't print to stdout
        let _ = dotenvy::from_path(dir.join(".env"));
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
