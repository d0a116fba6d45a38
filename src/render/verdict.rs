use crate::models::report::{MetricsView, Severity, VerdictLine};
use crate::models::signal::{Classification, Verdict};
use crate::render::format_usd;

/// The three headline metrics: price, RSI, profit/loss.
pub fn metrics_view(verdict: &Verdict) -> MetricsView {
    MetricsView {
        price: format_usd(verdict.price),
        rsi: verdict
            .rsi
            .map(|rsi| format!("{:.1}", rsi))
            .unwrap_or_else(|| "n/a".to_string()),
        rsi_flagged: verdict.is_overbought(),
        profit_pct: format!("{:.2}%", verdict.profit_pct),
        profit_delta: format!("{:.2}", verdict.profit_delta()),
    }
}

/// Verdict text block: the classification line, then the take-profit line if raised.
pub fn verdict_lines(verdict: &Verdict) -> Vec<VerdictLine> {
    let mut lines = Vec::with_capacity(2);

    let primary = match (verdict.classification, verdict.rsi) {
        (Classification::SellOverbought, Some(rsi)) => VerdictLine {
            severity: Severity::Error,
            text: format!(
                "SELL SIGNAL: Market is Overbought (RSI {:.0} > {})",
                rsi, verdict.rsi_threshold
            ),
        },
        (Classification::BuyOversold, _) => VerdictLine {
            severity: Severity::Success,
            text: "BUY SIGNAL: Market is Oversold. Good time to accumulate.".to_string(),
        },
        _ => VerdictLine {
            severity: Severity::Info,
            text: "HOLD: Market is neutral.".to_string(),
        },
    };
    lines.push(primary);

    if verdict.take_profit {
        lines.push(VerdictLine {
            severity: Severity::Warning,
            text: format!(
                "TAKE PROFIT: You are up {:.1}%. Consider selling some.",
                verdict.profit_pct
            ),
        });
    }

    lines
}
