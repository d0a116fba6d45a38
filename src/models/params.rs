//! Per-invocation user inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RSI_THRESHOLD: u8 = 50;
pub const MAX_RSI_THRESHOLD: u8 = 90;
pub const DEFAULT_RSI_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("symbol must not be empty")]
    EmptySymbol,
    #[error("cost basis must be a positive number, got {0}")]
    InvalidCostBasis(f64),
    #[error("RSI sell threshold must be between 50 and 90, got {0}")]
    ThresholdOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserParameters {
    pub symbol: String,
    pub cost_basis: f64,
    #[serde(default = "default_threshold")]
    pub rsi_sell_threshold: u8,
}

fn default_threshold() -> u8 {
    DEFAULT_RSI_THRESHOLD
}

impl UserParameters {
    pub fn new(symbol: impl Into<String>, cost_basis: f64, rsi_sell_threshold: u8) -> Self {
        Self {
            symbol: symbol.into(),
            cost_basis,
            rsi_sell_threshold,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.symbol.trim().is_empty() {
            return Err(ParameterError::EmptySymbol);
        }
        if !self.cost_basis.is_finite() || self.cost_basis <= 0.0 {
            return Err(ParameterError::InvalidCostBasis(self.cost_basis));
        }
        if !(MIN_RSI_THRESHOLD..=MAX_RSI_THRESHOLD).contains(&self.rsi_sell_threshold) {
            return Err(ParameterError::ThresholdOutOfRange(self.rsi_sell_threshold));
        }
        Ok(())
    }
}

impl Default for UserParameters {
    fn default() -> Self {
        Self::new("BTC/USDT", 65000.0, DEFAULT_RSI_THRESHOLD)
    }
}

/// Telegram delivery target. Both halves must be present for delivery.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NotificationCredentials {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl NotificationCredentials {
    pub fn new(token: Option<String>, chat_id: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            token: non_empty(token),
            chat_id: non_empty(chat_id),
        }
    }

    /// Token and chat id, when both are set and non-empty.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.token.as_deref(), self.chat_id.as_deref()) {
            (Some(t), Some(c)) if !t.trim().is_empty() && !c.trim().is_empty() => Some((t, c)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for NotificationCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCredentials")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Notification settings for one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub credentials: NotificationCredentials,
}
