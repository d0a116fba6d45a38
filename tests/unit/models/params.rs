//! Unit tests for user parameter validation

use sellwise::models::params::{NotificationCredentials, ParameterError, UserParameters};

#[test]
fn test_default_parameters_are_valid() {
    let params = UserParameters::default();
    assert_eq!(params.symbol, "BTC/USDT");
    assert_eq!(params.cost_basis, 65000.0);
    assert_eq!(params.rsi_sell_threshold, 70);
    assert!(params.validate().is_ok());
}

#[test]
fn test_threshold_bounds() {
    assert!(UserParameters::new("BTC/USDT", 1.0, 50).validate().is_ok());
    assert!(UserParameters::new("BTC/USDT", 1.0, 90).validate().is_ok());
    assert_eq!(
        UserParameters::new("BTC/USDT", 1.0, 49).validate(),
        Err(ParameterError::ThresholdOutOfRange(49))
    );
    assert_eq!(
        UserParameters::new("BTC/USDT", 1.0, 91).validate(),
        Err(ParameterError::ThresholdOutOfRange(91))
    );
}

#[test]
fn test_cost_basis_must_be_positive() {
    for cost in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            UserParameters::new("BTC/USDT", cost, 70).validate(),
            Err(ParameterError::InvalidCostBasis(_))
        ));
    }
}

#[test]
fn test_symbol_must_not_be_blank() {
    assert_eq!(
        UserParameters::new("  ", 100.0, 70).validate(),
        Err(ParameterError::EmptySymbol)
    );
}

#[test]
fn test_credentials_need_both_halves() {
    let both = NotificationCredentials::new(Some("tok".into()), Some("42".into()));
    assert_eq!(both.pair(), Some(("tok", "42")));

    let no_chat = NotificationCredentials::new(Some("tok".into()), Some("".into()));
    assert_eq!(no_chat.pair(), None);

    let no_token = NotificationCredentials::new(None, Some("42".into()));
    assert_eq!(no_token.pair(), None);
}

#[test]
fn test_credentials_debug_hides_token() {
    let creds = NotificationCredentials::new(Some("secret-token".into()), Some("42".into()));
    let rendered = format!("{:?}", creds);
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("42"));
}
