use serde::{Deserialize, Serialize};

use crate::models::indicators::Candle;
use crate::models::signal::Verdict;

/// Everything the presentation layer needs from one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub verdict: Verdict,
    pub candles: Vec<Candle>,
    pub metrics: MetricsView,
    pub verdict_lines: Vec<VerdictLine>,
    pub chart_svg: String,
    pub alert_dispatched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    pub price: String,
    pub rsi: String,
    pub rsi_flagged: bool,
    pub profit_pct: String,
    pub profit_delta: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictLine {
    pub severity: Severity,
    pub text: String,
}
