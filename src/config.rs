//! Environment-driven configuration.

use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::models::params::{NotificationCredentials, NotificationSettings, UserParameters};
use crate::services::binance::BINANCE_BASE_URL;
use crate::services::telegram::TELEGRAM_BASE_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub params: UserParameters,
    pub notifications: NotificationSettings,
    pub binance_base_url: String,
    pub telegram_base_url: String,
    pub port: u16,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            params: UserParameters::default(),
            notifications: NotificationSettings::default(),
            binance_base_url: BINANCE_BASE_URL.to_string(),
            telegram_base_url: TELEGRAM_BASE_URL.to_string(),
            port: 8080,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let params = UserParameters {
            symbol: get("SYMBOL").unwrap_or(defaults.params.symbol),
            cost_basis: parse_var("COST_BASIS", get("COST_BASIS"))?
                .unwrap_or(defaults.params.cost_basis),
            rsi_sell_threshold: parse_var("RSI_SELL_THRESHOLD", get("RSI_SELL_THRESHOLD"))?
                .unwrap_or(defaults.params.rsi_sell_threshold),
        };

        let notifications = NotificationSettings {
            enabled: parse_flag("NOTIFY_ENABLED", get("NOTIFY_ENABLED"))?,
            credentials: NotificationCredentials::new(
                get("TELEGRAM_BOT_TOKEN"),
                get("TELEGRAM_CHAT_ID"),
            ),
        };

        Ok(Self {
            params,
            notifications,
            binance_base_url: get("BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url),
            telegram_base_url: get("TELEGRAM_BASE_URL").unwrap_or(defaults.telegram_base_url),
            port: parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port),
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value })
    })
    .transpose()
}

fn parse_flag(var: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(false),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { var, value }),
        },
    }
}
