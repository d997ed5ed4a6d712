use std::env;
use std::str::FromStr;
use std::time::Duration;

use picture_core::{FEEDBACK_DELAY, ResolutionOrder};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub app_base_url: String,
    pub identity_database_url: String,
    pub feedback_delay: Duration,
    pub request_timeout: Duration,
    pub question_order: ResolutionOrder,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            api_base_url: lookup("API_BASE_URL").unwrap_or(defaults.api_base_url),
            app_base_url: lookup("APP_BASE_URL").unwrap_or(defaults.app_base_url),
            identity_database_url: lookup("IDENTITY_DATABASE_URL")
                .unwrap_or(defaults.identity_database_url),
            feedback_delay: Duration::from_millis(parse_or(
                &lookup,
                "FEEDBACK_DELAY_MS",
                defaults.feedback_delay.as_millis() as u64,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout.as_secs(),
            )?),
            question_order: parse_or(&lookup, "QUESTION_ORDER", defaults.question_order)?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            app_base_url: "http://localhost:5173".to_string(),
            identity_database_url: "sqlite://picture_guess.db?mode=rwc".to_string(),
            feedback_delay: FEEDBACK_DELAY,
            request_timeout: Duration::from_secs(10),
            question_order: ResolutionOrder::Declared,
        }
    }
}
