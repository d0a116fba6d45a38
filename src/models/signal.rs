//! Verdict types produced by the signal engine.

use serde::{Deserialize, Serialize};

/// Primary momentum classification. Exactly one applies per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    SellOverbought,
    BuyOversold,
    Hold,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::SellOverbought => "sell_overbought",
            Classification::BuyOversold => "buy_oversold",
            Classification::Hold => "hold",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one engine evaluation.
///
/// `take_profit` is independent of `classification`; both can fire together.
/// `reasons` holds the overbought reason (if any) followed by the take-profit
/// reason (if any), in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub classification: Classification,
    pub take_profit: bool,
    pub reasons: Vec<String>,
    pub price: f64,
    pub rsi: Option<f64>,
    pub rsi_threshold: u8,
    pub cost_basis: f64,
    pub profit_pct: f64,
}

impl Verdict {
    /// Absolute unrealized gain per unit.
    pub fn profit_delta(&self) -> f64 {
        self.price - self.cost_basis
    }

    pub fn is_overbought(&self) -> bool {
        self.classification == Classification::SellOverbought
    }
}
