use palate_core::models::UserPalateProfile;
use palate_core::palate::{EmotionalResponse, PalateVector};
use palate_core::traits::IProfileUpdater;
use palate_learning::ProfileUpdater;
use proptest::prelude::*;
use test_fixtures::builders::{ExperienceBuilder, ProfileBuilder};

fn arb_palate() -> impl Strategy<Value = PalateVector> {
    prop::array::uniform11(0.0f64..=10.0).prop_map(PalateVector::new)
}

fn arb_response() -> impl Strategy<Value = EmotionalResponse> {
    (prop::array::uniform5(0.0f64..=10.0), 0.0f64..=10.0, 0.0f64..=10.0).prop_map(
        |(d, overall, intensity)| {
            EmotionalResponse::new(d[0], d[1], d[2], d[3], d[4], overall, intensity)
        },
    )
}

fn in_bounds(profile: &UserPalateProfile) -> bool {
    profile
        .palate_vector
        .values()
        .iter()
        .all(|v| (0.0..=10.0).contains(v))
        && profile
            .emotional_preference_matrix
            .cells()
            .all(|c| (0.0..=1.0).contains(&c))
        && (0.0..=100.0).contains(&profile.confidence_score)
}

// ── Every field stays in range across arbitrary update streams ──────────

proptest! {
    #[test]
    fn updates_preserve_bounds(
        steps in prop::collection::vec((arb_palate(), arb_response(), 0.0f64..=1.0), 1..30)
    ) {
        let updater = ProfileUpdater::new();
        let mut profile: Option<UserPalateProfile> = None;
        for (palate, response, confidence) in &steps {
            let exp = ExperienceBuilder::new("prop")
                .palate(*palate)
                .emotions(response.clone())
                .confidence(*confidence)
                .build();
            let next = updater.update(profile.as_ref(), &exp).unwrap();
            prop_assert!(in_bounds(&next));
            profile = Some(next);
        }
        let profile = profile.unwrap();
        prop_assert_eq!(profile.total_experiences, steps.len() as u64);
        prop_assert_eq!(profile.evolution_history.len(), steps.len() - 1);
    }
}

// ── A first experience is copied verbatim ───────────────────────────────

proptest! {
    #[test]
    fn initialization_copies_palate(palate in arb_palate(), confidence in 0.0f64..=1.0) {
        let exp = ExperienceBuilder::new("prop").palate(palate).confidence(confidence).build();
        let profile = ProfileUpdater::new().update(None, &exp).unwrap();
        prop_assert_eq!(profile.palate_vector, palate);
        prop_assert_eq!(profile.total_experiences, 1);
        prop_assert!((profile.confidence_score - confidence * 100.0).abs() < 1e-9);
    }
}

// ── Perfect satisfaction never moves a dimension away from the target ───

proptest! {
    #[test]
    fn max_satisfaction_moves_toward_target(current in arb_palate(), target in arb_palate()) {
        let profile = ProfileBuilder::new("prop").palate(current).experiences(10).build();
        let exp = ExperienceBuilder::new("prop")
            .palate(target)
            .emotions(EmotionalResponse::uniform(10.0))
            .build();
        let next = ProfileUpdater::new().update(Some(&profile), &exp).unwrap();
        for i in 0..11 {
            let before = (current.values()[i] - target.values()[i]).abs();
            let after = (next.palate_vector.values()[i] - target.values()[i]).abs();
            prop_assert!(after <= before + 1e-9, "dim {} drifted away: {} -> {}", i, before, after);
        }
    }
}

// ── Minimum satisfaction never moves a dimension toward the target ──────

proptest! {
    #[test]
    fn min_satisfaction_never_moves_toward_target(current in arb_palate(), target in arb_palate()) {
        let profile = ProfileBuilder::new("prop").palate(current).experiences(10).build();
        let response = EmotionalResponse::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0);
        let exp = ExperienceBuilder::new("prop").palate(target).emotions(response).build();
        let next = ProfileUpdater::new().update(Some(&profile), &exp).unwrap();
        for i in 0..11 {
            let before = (current.values()[i] - target.values()[i]).abs();
            let after = (next.palate_vector.values()[i] - target.values()[i]).abs();
            prop_assert!(after + 1e-9 >= before, "dim {} moved closer: {} -> {}", i, before, after);
        }
    }
}

// ── Experience count is strictly increasing ─────────────────────────────

proptest! {
    #[test]
    fn total_experiences_increments(total in 1u64..10_000, response in arb_response()) {
        let profile = ProfileBuilder::new("prop").experiences(total).build();
        let exp = ExperienceBuilder::new("prop").emotions(response).build();
        let next = ProfileUpdater::new().update(Some(&profile), &exp).unwrap();
        prop_assert_eq!(next.total_experiences, total + 1);
        prop_assert!(next.profile_maturity >= profile.profile_maturity);
    }
}
