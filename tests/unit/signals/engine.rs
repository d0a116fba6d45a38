//! Unit tests for the verdict engine

use sellwise::models::params::UserParameters;
use sellwise::models::signal::Classification;
use sellwise::signals::engine::{profit_percent, VerdictEngine, VerdictInput};

fn input(price: f64, rsi: Option<f64>, cost_basis: f64, threshold: u8) -> VerdictInput {
    VerdictInput {
        price,
        rsi,
        cost_basis,
        rsi_threshold: threshold,
    }
}

#[test]
fn test_overbought_sells() {
    let verdict = VerdictEngine::evaluate(&input(100.0, Some(78.2), 100.0, 70));
    assert_eq!(verdict.classification, Classification::SellOverbought);
    assert!(!verdict.take_profit);
    assert_eq!(verdict.reasons, vec!["RSI is high (78).".to_string()]);
}

#[test]
fn test_rsi_equal_to_threshold_holds() {
    let verdict = VerdictEngine::evaluate(&input(100.0, Some(70.0), 100.0, 70));
    assert_eq!(verdict.classification, Classification::Hold);
    assert!(verdict.reasons.is_empty());
}

#[test]
fn test_oversold_buys_regardless_of_profit() {
    for price in [50.0, 100.0, 150.0] {
        let verdict = VerdictEngine::evaluate(&input(price, Some(22.0), 100.0, 70));
        assert_eq!(verdict.classification, Classification::BuyOversold);
    }
}

#[test]
fn test_oversold_adds_no_reason() {
    let verdict = VerdictEngine::evaluate(&input(100.0, Some(29.9), 100.0, 70));
    assert_eq!(verdict.classification, Classification::BuyOversold);
    assert!(verdict.reasons.is_empty());
}

#[test]
fn test_rsi_of_30_holds() {
    let verdict = VerdictEngine::evaluate(&input(100.0, Some(30.0), 100.0, 70));
    assert_eq!(verdict.classification, Classification::Hold);
}

#[test]
fn test_undefined_rsi_holds() {
    let verdict = VerdictEngine::evaluate(&input(100.0, None, 100.0, 50));
    assert_eq!(verdict.classification, Classification::Hold);
    assert!(verdict.reasons.is_empty());
    assert!(!verdict.is_overbought());
}

#[test]
fn test_undefined_rsi_still_checks_profit() {
    let verdict = VerdictEngine::evaluate(&input(120.0, None, 100.0, 70));
    assert_eq!(verdict.classification, Classification::Hold);
    assert!(verdict.take_profit);
    assert_eq!(verdict.reasons, vec!["Profit is up 20.0%.".to_string()]);
}

#[test]
fn test_sell_and_take_profit_together() {
    let verdict = VerdictEngine::evaluate(&input(115.0, Some(95.0), 100.0, 70));
    assert_eq!(verdict.classification, Classification::SellOverbought);
    assert!(verdict.take_profit);
    assert_eq!(
        verdict.reasons,
        vec!["RSI is high (95).".to_string(), "Profit is up 15.0%.".to_string()]
    );
}

#[test]
fn test_take_profit_boundary_is_exclusive() {
    let at_boundary = VerdictEngine::evaluate(&input(71500.0, Some(50.0), 65000.0, 70));
    assert_eq!(at_boundary.profit_pct, 10.0);
    assert!(!at_boundary.take_profit);
    assert!(at_boundary.reasons.is_empty());

    let above = VerdictEngine::evaluate(&input(71501.0, Some(50.0), 65000.0, 70));
    assert!(above.profit_pct > 10.0);
    assert!(above.take_profit);
    assert_eq!(above.reasons, vec!["Profit is up 10.0%.".to_string()]);
}

#[test]
fn test_loss_is_negative_profit() {
    let verdict = VerdictEngine::evaluate(&input(57000.0, Some(45.0), 65000.0, 70));
    assert!((verdict.profit_pct - -12.307692307692308).abs() < 1e-9);
    assert!((verdict.profit_delta() - -8000.0).abs() < 1e-9);
    assert!(!verdict.take_profit);
}

#[test]
fn test_user_threshold_is_respected() {
    let lenient = VerdictEngine::evaluate(&input(100.0, Some(80.0), 100.0, 85));
    assert_eq!(lenient.classification, Classification::Hold);
    let strict = VerdictEngine::evaluate(&input(100.0, Some(80.0), 100.0, 50));
    assert_eq!(strict.classification, Classification::SellOverbought);
}

#[test]
fn test_evaluate_is_deterministic() {
    let input = input(71234.5, Some(73.3), 65000.0, 70);
    assert_eq!(VerdictEngine::evaluate(&input), VerdictEngine::evaluate(&input));
}

#[test]
fn test_input_from_parameters() {
    let params = UserParameters::new("ETH/USDT", 2000.0, 65);
    let input = VerdictInput::new(2500.0, Some(66.0), &params);
    assert_eq!(input.cost_basis, 2000.0);
    assert_eq!(input.rsi_threshold, 65);
    let verdict = VerdictEngine::evaluate(&input);
    assert_eq!(verdict.classification, Classification::SellOverbought);
    assert!(verdict.take_profit);
}

#[test]
fn test_profit_percent() {
    assert_eq!(profit_percent(110.0, 100.0), 10.0);
    assert_eq!(profit_percent(100.0, 100.0), 0.0);
    assert_eq!(profit_percent(50.0, 100.0), -50.0);
}
