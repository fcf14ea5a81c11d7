use scoring_core::config::{PolicySourceConfig, ProviderType};
use scoring_core::errors::{PolicyError, ScoringError};
use scoring_core::models::{AttestationOptions, AttestationOptionsRecord, Policy, PolicyRecord, Weight};
use scoring_core::traits::IPolicyProvider;
use scoring_policy::{new_policy_provider, LocalPolicyProvider};

fn provider() -> LocalPolicyProvider {
    LocalPolicyProvider::new(test_fixtures::golden_policies()).unwrap()
}

#[test]
fn get_weights_returns_policy_weights_in_order() {
    let weights = provider().get_weights("default").unwrap();
    let keys: Vec<&str> = weights.iter().map(|w| w.annotation_key()).collect();
    assert_eq!(keys, vec!["tpm", "pki", "tls", "src", "attestation"]);
    assert_eq!(weights[0].value(), 5);
}

#[test]
fn get_attestation_options_returns_policy_options() {
    let opts = provider().get_attestation_options("strict").unwrap();
    assert_eq!(opts.cadence_threshold_mins(), 30);
    assert_eq!(opts.time_range_mins(), 120);
}

#[test]
fn unknown_classifier_is_not_found() {
    let p = provider();
    assert!(matches!(
        p.get_weights("nope"),
        Err(ScoringError::ClassifierNotFound { ref classifier }) if classifier == "nope"
    ));
    assert!(matches!(
        p.get_attestation_options("nope"),
        Err(ScoringError::ClassifierNotFound { .. })
    ));
    assert!(matches!(p.get_policy("nope"), Err(ScoringError::ClassifierNotFound { .. })));
}

#[test]
fn classifiers_are_listed_in_load_order() {
    let p = provider();
    assert_eq!(p.classifiers(), vec!["default".to_string(), "strict".to_string()]);
    assert_eq!(p.len(), 2);
    assert!(!p.is_empty());
}

#[test]
fn duplicate_classifier_is_rejected() {
    let opts = AttestationOptions::new(10, 0).unwrap();
    let result = LocalPolicyProvider::new(vec![
        Policy::new("twice", vec![Weight::new("tpm", 2)], opts),
        Policy::new("twice", vec![Weight::new("tpm", 3)], opts),
    ]);
    assert!(matches!(
        result,
        Err(ScoringError::DuplicateClassifier { ref classifier }) if classifier == "twice"
    ));
}

#[test]
fn invalid_record_aborts_load() {
    let records = vec![
        PolicyRecord {
            classifier: "ok".into(),
            items: vec![],
            attestation_opts: AttestationOptionsRecord {
                cadence_threshold_mins: 10,
                time_range_mins: 0,
            },
        },
        PolicyRecord {
            classifier: "bad".into(),
            items: vec![],
            attestation_opts: AttestationOptionsRecord {
                cadence_threshold_mins: 0,
                time_range_mins: 0,
            },
        },
    ];
    match LocalPolicyProvider::from_records(records) {
        Err(ScoringError::PolicyValidation { classifier, source }) => {
            assert_eq!(classifier, "bad");
            assert_eq!(source, PolicyError::InvalidCadence { value: 0 });
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn factory_builds_local_provider_from_config() {
    let config = PolicySourceConfig {
        provider: ProviderType::Local,
        policies: test_fixtures::golden_policies()
            .into_iter()
            .map(PolicyRecord::from)
            .collect(),
    };
    let provider: Box<dyn IPolicyProvider> = new_policy_provider(&config).unwrap();
    let policy = provider.get_policy("default").unwrap();
    assert_eq!(policy.fetch_weight("src").value(), 4);
}

#[test]
fn empty_config_gives_empty_provider() {
    let provider = LocalPolicyProvider::from_config(&PolicySourceConfig::default()).unwrap();
    assert!(provider.is_empty());
    assert!(provider.classifiers().is_empty());
}

#[test]
fn provider_is_shareable_across_threads() {
    let p = std::sync::Arc::new(provider());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || p.get_weights("default").unwrap().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 5);
    }
}
