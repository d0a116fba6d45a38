//! Unit tests for RSI indicator

use chrono::{Duration, TimeZone, Utc};
use sellwise::indicators::momentum::{calculate_rsi, calculate_rsi_default, calculate_rsi_series};
use sellwise::models::indicators::Candle;

// Wilder's worked example as published by StockCharts.
const REFERENCE_CLOSES: [f64; 20] = [
    44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
    46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
];

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(close, close + 0.5, close - 0.5, close, 10.0, start + Duration::hours(i as i64))
        })
        .collect()
}

#[test]
fn test_rsi_series_is_aligned_with_input() {
    let series = calculate_rsi_series(&REFERENCE_CLOSES, 14);
    assert_eq!(series.len(), REFERENCE_CLOSES.len());
    assert!(series[..14].iter().all(Option::is_none));
    assert!(series[14..].iter().all(Option::is_some));
}

#[test]
fn test_rsi_matches_wilder_reference() {
    let series = calculate_rsi_series(&REFERENCE_CLOSES, 14);
    let expected = [
        70.46413502109705,
        66.24961855355505,
        66.48094183471265,
        69.34685316290866,
        66.29471265892624,
        57.91502067008556,
    ];
    for (actual, expected) in series[14..].iter().zip(expected) {
        let actual = actual.expect("defined after seed");
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }
}

#[test]
fn test_rsi_insufficient_data() {
    for len in 0..15 {
        let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        let series = calculate_rsi_series(&closes, 14);
        assert_eq!(series.len(), len);
        assert!(series.iter().all(Option::is_none), "len {} should be undefined", len);
    }
    let candles = candles_from_closes(&REFERENCE_CLOSES[..14]);
    assert!(calculate_rsi_default(&candles).is_none());
}

#[test]
fn test_rsi_strictly_increasing_is_100() {
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64 * 2.5).collect();
    let series = calculate_rsi_series(&closes, 14);
    assert_eq!(series.last().copied().flatten(), Some(100.0));
}

#[test]
fn test_rsi_strictly_decreasing_is_0() {
    let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
    let rsi = calculate_rsi_series(&closes, 14).last().copied().flatten();
    assert_eq!(rsi, Some(0.0));
}

#[test]
fn test_rsi_flat_then_jump() {
    let mut closes = vec![100.0; 14];
    closes.push(110.0);
    let series = calculate_rsi_series(&closes, 14);
    assert_eq!(series[14], Some(100.0));
}

#[test]
fn test_rsi_stays_in_bounds() {
    let closes: Vec<f64> = (0..100)
        .map(|i| 100.0 + ((i * 37) % 11) as f64 - 5.0)
        .collect();
    for value in calculate_rsi_series(&closes, 14).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_calculate_rsi_reports_latest_value() {
    let candles = candles_from_closes(&REFERENCE_CLOSES);
    let rsi = calculate_rsi(&candles, 14).expect("enough history");
    assert_eq!(rsi.period, 14);
    assert!((rsi.value - 57.91502067008556).abs() < 1e-9);
}

#[test]
fn test_zero_period_is_undefined() {
    let series = calculate_rsi_series(&REFERENCE_CLOSES, 0);
    assert!(series.iter().all(Option::is_none));
}
