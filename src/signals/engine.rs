//! Rule-based verdict engine.
//!
//! Two independent checks run on every evaluation:
//! - a momentum classification (overbought / oversold / hold), first match wins;
//! - a take-profit check on unrealized gain, which never alters the classification.

use tracing::debug;

use crate::models::params::UserParameters;
use crate::models::signal::{Classification, Verdict};

/// RSI below this is oversold. Not user-configurable.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Unrealized gain (percent) above which the take-profit flag is raised.
pub const TAKE_PROFIT_PCT: f64 = 10.0;

/// Inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictInput {
    pub price: f64,
    pub rsi: Option<f64>,
    pub cost_basis: f64,
    pub rsi_threshold: u8,
}

impl VerdictInput {
    pub fn new(price: f64, rsi: Option<f64>, params: &UserParameters) -> Self {
        Self {
            price,
            rsi,
            cost_basis: params.cost_basis,
            rsi_threshold: params.rsi_sell_threshold,
        }
    }
}

pub struct VerdictEngine;

impl VerdictEngine {
    pub fn evaluate(input: &VerdictInput) -> Verdict {
        let threshold = f64::from(input.rsi_threshold);
        let profit_pct = profit_percent(input.price, input.cost_basis);
        let mut reasons = Vec::new();

        let classification = match input.rsi {
            Some(rsi) if rsi > threshold => {
                reasons.push(format!("RSI is high ({:.0}).", rsi));
                Classification::SellOverbought
            }
            Some(rsi) if rsi < RSI_OVERSOLD => Classification::BuyOversold,
            _ => Classification::Hold,
        };

        let take_profit = profit_pct > TAKE_PROFIT_PCT;
        if take_profit {
            reasons.push(format!("Profit is up {:.1}%.", profit_pct));
        }

        debug!(
            price = input.price,
            rsi = ?input.rsi,
            profit_pct,
            classification = %classification,
            take_profit,
            "verdict evaluated"
        );

        Verdict {
            classification,
            take_profit,
            reasons,
            price: input.price,
            rsi: input.rsi,
            rsi_threshold: input.rsi_threshold,
            cost_basis: input.cost_basis,
            profit_pct,
        }
    }
}

/// `(price - cost_basis) / cost_basis * 100`
pub fn profit_percent(price: f64, cost_basis: f64) -> f64 {
    ((price - cost_basis) / cost_basis) * 100.0
}
