//! Wire types for the Binance `/api/v3/klines` endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataError;

/// One kline row. Prices and volumes arrive as decimal strings.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,    // 0: Open time (ms)
    pub String, // 1: Open
    pub String, // 2: High
    pub String, // 3: Low
    pub String, // 4: Close
    pub String, // 5: Volume
    pub i64,    // 6: Close time
    pub String, // 7: Quote asset volume
    pub i64,    // 8: Number of trades
    pub String, // 9: Taker buy base asset volume
    pub String, // 10: Taker buy quote asset volume
    pub Value,  // 11: Ignore
);

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

impl RawKline {
    pub fn into_candle(self) -> Result<Candle, MarketDataError> {
        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.0).ok_or_else(|| {
            MarketDataError::Decode(format!("invalid open time {}", self.0))
        })?;
        Ok(Candle::new(
            parse_field("open", &self.1)?,
            parse_field("high", &self.2)?,
            parse_field("low", &self.3)?,
            parse_field("close", &self.4)?,
            parse_field("volume", &self.5)?,
            timestamp,
        ))
    }
}

fn parse_field(name: &str, raw: &str) -> Result<f64, MarketDataError> {
    raw.parse()
        .map_err(|e| MarketDataError::Decode(format!("invalid {} '{}': {}", name, raw, e)))
}
