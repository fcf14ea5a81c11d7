use std::io::Write;

use scoring_core::config::*;
use scoring_core::errors::ConfigError;
use scoring_core::models::Policy;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ScoringConfig::from_toml("").unwrap();
    assert_eq!(config.policy.provider, ProviderType::Local);
    assert!(config.policy.policies.is_empty());
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_policies_from_toml() {
    let toml = r#"
[policy]
provider = "local"

[[policy.policies]]
classifier = "default"
items = [
    { key = "tpm", value = 5 },
    { key = "attestation", value = 3 },
]
attestationOpts = { cadenceThresholdMins = 50, timeRange = 0 }

[observability]
log_level = "debug"
"#;
    let config = ScoringConfig::from_toml(toml).unwrap();
    assert_eq!(config.policy.policies.len(), 1);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json);

    let policy = Policy::try_from(config.policy.policies[0].clone()).unwrap();
    assert_eq!(policy.name(), "default");
    assert_eq!(policy.fetch_weight("attestation").value(), 3);
}

#[test]
fn config_keeps_invalid_records_for_provider_validation() {
    let json = r#"{
        "policy": {
            "policies": [
                {"classifier": "bad", "attestationOpts": {"cadenceThresholdMins": 0}}
            ]
        }
    }"#;
    let config = ScoringConfig::from_json(json).unwrap();
    let record = config.policy.policies[0].clone();
    assert!(Policy::try_from(record).is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ScoringConfig::from_toml("[policy\nprovider=").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_provider_type_is_a_parse_error() {
    let err = ScoringConfig::from_toml("[policy]\nprovider = \"remote\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_loads_from_file_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"observability": {{"json": true}}}}"#).unwrap();
    let config = ScoringConfig::from_file(file.path()).unwrap();
    assert!(config.observability.json);
}

#[test]
fn missing_file_is_reported() {
    let err = ScoringConfig::from_file(std::path::Path::new("/definitely/missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn unsupported_extension_is_rejected() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let err = ScoringConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = ScoringConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ScoringConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.observability.log_level, config.observability.log_level);
    assert_eq!(roundtripped.policy.provider, config.policy.provider);
}
