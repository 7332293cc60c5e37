// twofa-core/tests/config_tests.rs
use std::io::Write;

use tempfile::NamedTempFile;
use twofa_core::{TwoFactorChannel, TwoFactorConfig, TwoFactorError, DEFAULT_CODE_PATTERN};

#[test_log::test]
fn embedded_defaults_load_and_validate() {
    let config = TwoFactorConfig::load_defaults().unwrap();
    assert_eq!(config.pattern, DEFAULT_CODE_PATTERN);
    assert_eq!(config.expire_minutes, 5);
    assert_eq!(config.throttle_seconds, 30);
    assert_eq!(config.default_channel, TwoFactorChannel::Email);
    assert_eq!(config, TwoFactorConfig::default());
}

#[test]
fn yaml_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "pattern: \"[a-f0-9]{{8}}\"\nexpire_minutes: 10\ndefault_channel: sms"
    )
    .unwrap();

    let config = TwoFactorConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.pattern, "[a-f0-9]{8}");
    assert_eq!(config.expire_minutes, 10);
    // Unset fields fall back to the defaults.
    assert_eq!(config.throttle_seconds, 30);
    assert_eq!(config.default_channel, TwoFactorChannel::Sms);
}

#[test]
fn malformed_pattern_fails_at_load_time() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pattern: \"[0-9\"").unwrap();

    let err = TwoFactorConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("pattern"), "unexpected error: {err}");
}

#[test]
fn validation_rejects_bad_windows() {
    let zero_expiry = TwoFactorConfig {
        expire_minutes: 0,
        ..TwoFactorConfig::default()
    };
    assert!(matches!(
        zero_expiry.validate(),
        Err(TwoFactorError::Config(_))
    ));

    let negative_throttle = TwoFactorConfig {
        throttle_seconds: -1,
        ..TwoFactorConfig::default()
    };
    assert!(matches!(
        negative_throttle.validate(),
        Err(TwoFactorError::Config(_))
    ));
}

#[test]
fn validation_accepts_the_defaults() {
    assert!(TwoFactorConfig::default().validate().is_ok());
}

#[test]
fn missing_file_reports_the_path() {
    let err = TwoFactorConfig::load_from_file("/does/not/exist.yaml").unwrap_err();
    assert!(err.to_string().contains("/does/not/exist.yaml"));
}
