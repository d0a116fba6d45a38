//! Binance market data provider implementation

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::messages::{ApiErrorBody, RawKline};
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider, Timeframe};

pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

pub struct BinanceMarketDataProvider {
    base_url: String,
    client: reqwest::Client,
}

impl BinanceMarketDataProvider {
    pub fn new() -> Self {
        Self::with_base_url(BINANCE_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn klines_url(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&format!("{}/api/v3/klines", self.base_url))
            .map_err(|e| MarketDataError::Decode(format!("invalid base url: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("interval", timeframe.as_str())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

impl Default for BinanceMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// `BTC/USDT`, `btc-usdt` and `BTCUSDT` all map to `BTCUSDT`.
pub fn exchange_symbol(symbol: &str) -> Result<String, MarketDataError> {
    let normalized: String = symbol
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '-' | '_'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(MarketDataError::InvalidSymbol(symbol.to_string()));
    }
    Ok(normalized)
}

#[async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let market = exchange_symbol(symbol)?;
        let url = self.klines_url(&market, timeframe, limit)?;

        debug!(symbol = %market, interval = timeframe.as_str(), limit, "fetching klines");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(symbol = %market, status = %status, "klines request rejected");
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => MarketDataError::Api {
                    code: err.code,
                    msg: err.msg,
                },
                Err(_) => MarketDataError::Decode(format!("HTTP {}: {}", status, body)),
            });
        }

        let raw: Vec<RawKline> = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::Decode(e.to_string()))?;
        if raw.is_empty() {
            return Err(MarketDataError::Empty {
                symbol: symbol.to_string(),
            });
        }

        let mut candles = raw
            .into_iter()
            .map(RawKline::into_candle)
            .collect::<Result<Vec<_>, _>>()?;
        candles.sort_by_key(|c| c.timestamp);

        debug!(symbol = %market, count = candles.len(), "fetched klines");
        Ok(candles)
    }
}
