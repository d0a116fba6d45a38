//! Market data provider interface.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::indicators::Candle;

/// Bars fetched per analysis.
pub const DEFAULT_CANDLE_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("exchange error {code}: {msg}")]
    Api { code: i64, msg: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("no candles returned for {symbol}")]
    Empty { symbol: String },
}

/// Bar granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    OneHour,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneHour => "1h",
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get the most recent `limit` candles for a symbol, oldest first.
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
