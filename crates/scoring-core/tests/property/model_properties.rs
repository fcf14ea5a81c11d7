use proptest::prelude::*;
use scoring_core::constants::{MAX_WEIGHT, MIN_WEIGHT};
use scoring_core::models::{clamp, AttestationOptions, Policy, Weight};

proptest! {
    #[test]
    fn clamp_is_always_in_range(v in any::<i64>()) {
        let c = clamp(v);
        prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&c));
    }

    #[test]
    fn clamp_is_identity_in_range(v in 1i64..=10) {
        prop_assert_eq!(clamp(v) as i64, v);
    }

    #[test]
    fn decoded_weight_is_clamped(v in -1000i64..1000) {
        let json = format!(r#"{{"key":"k","value":{v}}}"#);
        let w: Weight = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(w.value(), clamp(v));
    }

    #[test]
    fn attestation_options_accept_exactly_the_valid_domain(
        cadence in -100i64..100,
        range in -100i64..100,
    ) {
        let result = AttestationOptions::new(cadence, range);
        if cadence > 0 && range >= 0 {
            let opts = result.unwrap();
            prop_assert_eq!(opts.cadence_threshold_mins(), cadence);
            prop_assert_eq!(opts.time_range_mins(), range);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn unknown_kinds_resolve_to_weight_one(kind in "[a-z]{1,12}") {
        let policy = Policy::new(
            "p",
            vec![Weight::new("defined-kind", 7)],
            AttestationOptions::new(10, 0).unwrap(),
        );
        prop_assume!(kind != "defined-kind");
        prop_assert_eq!(policy.fetch_weight(&kind).value(), 1);
    }
}
