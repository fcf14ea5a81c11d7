use std::sync::Arc;

use proptest::prelude::*;
use scoring_core::models::{Annotation, AttestationOptions, Policy, Weight};
use scoring_core::traits::FixedClock;
use scoring_engine::attestation::calculate;
use scoring_engine::ScoreEngine;
use test_fixtures::{annotation_minutes_ago, attestations_at, reference_now};

fn arb_kind() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("tpm"),
        Just("pki"),
        Just("tls"),
        Just("src"),
        Just("attestation"),
        Just("unlisted"),
    ]
}

fn arb_options() -> impl Strategy<Value = AttestationOptions> {
    (1i64..120, 0i64..400).prop_map(|(cadence, range)| AttestationOptions::new(cadence, range).unwrap())
}

proptest! {
    #[test]
    fn empty_attestations_contribute_nothing(opts in arb_options(), weight in 1u8..=10) {
        let none: Vec<Annotation> = Vec::new();
        prop_assert_eq!(calculate(&none, &opts, weight, reference_now()), 0.0);
    }

    #[test]
    fn contribution_never_exceeds_weight(
        offsets in prop::collection::vec(0i64..600, 0..20),
        opts in arb_options(),
        weight in 1u8..=10,
    ) {
        let now = reference_now();
        let annotations = attestations_at(now, "d", &offsets);
        let contribution = calculate(&annotations, &opts, weight, now);
        prop_assert!(contribution >= 0.0);
        prop_assert!(contribution <= weight as f64 + 1e-9);
    }

    #[test]
    fn filling_a_gap_never_lowers_trust(
        offsets in prop::collection::btree_set(1i64..600, 2..15),
        pick in any::<prop::sample::Index>(),
        opts in arb_options(),
    ) {
        let now = reference_now();
        let sorted: Vec<i64> = offsets.into_iter().collect();
        let i = pick.index(sorted.len() - 1);
        let (newer, older) = (sorted[i], sorted[i + 1]);
        prop_assume!(older - newer >= 2);
        let inserted = newer + (older - newer) / 2;

        let before = calculate(&attestations_at(now, "d", &sorted), &opts, 1, now);
        let mut extended = sorted.clone();
        extended.push(inserted);
        let after = calculate(&attestations_at(now, "d", &extended), &opts, 1, now);

        prop_assert!(
            after + 1e-9 >= before,
            "inserting {} between {} and {} dropped trust {} -> {}",
            inserted, newer, older, before, after
        );
    }

    #[test]
    fn confidence_is_bounded(
        entries in prop::collection::vec((arb_kind(), any::<bool>(), 0i64..500), 0..30),
        weights in prop::collection::vec(-5i64..20, 5),
        opts in arb_options(),
    ) {
        let now = reference_now();
        let policy = Policy::new(
            "random",
            ["tpm", "pki", "tls", "src", "attestation"]
                .iter()
                .zip(weights.iter())
                .map(|(k, v)| Weight::new(*k, *v))
                .collect(),
            opts,
        );
        let annotations: Vec<Annotation> = entries
            .iter()
            .map(|(kind, ok, ago)| annotation_minutes_ago(now, "d", kind, *ok, *ago))
            .collect();

        let engine = ScoreEngine::with_clock(Arc::new(FixedClock::new(now)));
        let score = engine.compute_score("d", &annotations, &policy).unwrap();
        prop_assert!((0.0..=1.0).contains(&score.confidence()));
        prop_assert!(score.passed() <= score.count());
    }
}
