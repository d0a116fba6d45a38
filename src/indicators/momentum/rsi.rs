//! RSI (Relative Strength Index) indicator

use crate::models::indicators::{closes, Candle, RsiIndicator};

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// Calculate the RSI series for a close-price sequence using Wilder's smoothing.
///
/// The output is aligned index-for-index with `closes`. The first value is
/// defined at index `period`, seeded with the simple mean of the first
/// `period` gains and losses; later values apply
/// `avg = (avg * (period - 1) + x) / period`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
/// An average loss of zero yields 100.
pub fn calculate_rsi_series(closes: &[f64], period: u32) -> Vec<Option<f64>> {
    let period = period as usize;
    let mut series = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return series;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;
    series[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // gains[i - 1] is the change ending at close[i]
    for i in (period + 1)..closes.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[i - 1]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[i - 1]) / n;
        series[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    series
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate the RSI at the latest candle, if enough history exists.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let series = calculate_rsi_series(&closes(candles), period);
    let value = series.last().copied().flatten()?;
    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, DEFAULT_RSI_PERIOD)
}
