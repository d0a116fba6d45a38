//! Alert trigger and message composition.

use crate::models::signal::Verdict;
use crate::render::format_usd;

/// True when the RSI is above the user's threshold or the take-profit flag is set.
pub fn should_alert(verdict: &Verdict) -> bool {
    verdict.is_overbought() || verdict.take_profit
}

/// `ALERT: <symbol> at $<price>` followed by one reason per line.
pub fn compose_alert(symbol: &str, verdict: &Verdict) -> String {
    let mut message = format!("ALERT: {} at {}\n", symbol, format_usd(verdict.price));
    message.push_str(&verdict.reasons.join("\n"));
    message
}
