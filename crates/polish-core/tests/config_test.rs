use polish_core::config::PolishConfig;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PolishConfig::from_toml("").unwrap();

    // Backend defaults
    assert_eq!(config.backend.endpoint, "");
    assert!(!config.backend.is_configured());
    assert_eq!(config.backend.timeout_secs, 30);
    assert_eq!(config.backend.max_attempts, 3);
    assert_eq!(config.backend.backoff_unit_ms, 200);

    // Escalation defaults
    assert_eq!(config.escalation.batch_size, 3);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[backend]
endpoint = "https://relay.example.com/rewrite"
max_attempts = 5

[escalation]
batch_size = 1
"#;
    let config = PolishConfig::from_toml(toml).unwrap();
    assert_eq!(config.backend.endpoint, "https://relay.example.com/rewrite");
    assert!(config.backend.is_configured());
    assert_eq!(config.backend.max_attempts, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.backend.timeout_secs, 30);
    assert_eq!(config.escalation.batch_size, 1);
}

#[test]
fn config_serde_roundtrip() {
    let config = PolishConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = PolishConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.backend.endpoint, config.backend.endpoint);
    assert_eq!(
        roundtripped.escalation.batch_size,
        config.escalation.batch_size
    );
}

#[test]
fn durations_derive_from_numeric_fields() {
    let config = PolishConfig::default();
    assert_eq!(config.backend.timeout().as_secs(), 30);
    assert_eq!(config.backend.backoff_unit().as_millis(), 200);
}
