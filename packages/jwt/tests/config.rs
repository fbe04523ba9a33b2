//! Tests for configuration loading and defaults

use chrono::Duration;
use simple_jwt::{JwtConfig, SigningMethod};

#[test]
fn test_defaults() {
    let config = JwtConfig::default();
    assert_eq!(config.signing_method, SigningMethod::Hs256);
    assert_eq!(config.leeway, Duration::zero());
    assert!(config.validate_exp);
    assert!(config.validate_nbf);
    assert_eq!(config.min_key_length, None);
}

#[test]
fn test_strict_requires_digest_sized_keys() {
    assert_eq!(JwtConfig::strict(SigningMethod::Hs256).min_key_length, Some(32));
    assert_eq!(JwtConfig::strict(SigningMethod::Hs384).min_key_length, Some(48));
    assert_eq!(JwtConfig::strict(SigningMethod::Hs512).min_key_length, Some(64));
}

#[test]
fn test_deserialize_partial_config() {
    let config: JwtConfig =
        serde_json::from_str(r#"{"signing_method": "HS512", "leeway": 30}"#).expect("valid config");

    assert_eq!(config.signing_method, SigningMethod::Hs512);
    assert_eq!(config.leeway, Duration::seconds(30));
    assert!(config.validate_exp);
    assert_eq!(config.min_key_length, None);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = JwtConfig::strict(SigningMethod::Hs384)
        .with_leeway(Duration::seconds(5))
        .validate_not_before(false);

    let json = serde_json::to_string(&config).expect("serializes");
    let back: JwtConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, config);
}

#[test]
fn test_rejects_unknown_algorithm_and_negative_leeway() {
    assert!(serde_json::from_str::<JwtConfig>(r#"{"signing_method": "RS256"}"#).is_err());
    assert!(serde_json::from_str::<JwtConfig>(r#"{"leeway": -5}"#).is_err());
}

#[test]
fn test_negative_leeway_is_clamped() {
    let config = JwtConfig::default().with_leeway(Duration::seconds(-5));
    assert_eq!(config.leeway, Duration::zero());

    // A negative value set on the field directly still writes something loadable
    let mut direct = JwtConfig::default();
    direct.leeway = Duration::seconds(-5);
    let json = serde_json::to_string(&direct).expect("serializes");
    let back: JwtConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back.leeway, Duration::zero());
}

#[test]
fn test_signing_method_from_str() {
    assert_eq!("HS384".parse::<SigningMethod>().ok(), Some(SigningMethod::Hs384));
    assert!("hs256".parse::<SigningMethod>().is_err());
    assert_eq!(SigningMethod::Hs512.to_string(), "HS512");
}
