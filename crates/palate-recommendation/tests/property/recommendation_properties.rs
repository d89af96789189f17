use palate_core::models::CandidateItem;
use palate_core::palate::{Context, ContextField, EmotionalPreferenceMatrix, PalateVector};
use palate_recommendation::RecommendationEngine;
use proptest::prelude::*;
use test_fixtures::builders::{similarity, CandidateBuilder, ProfileBuilder};

const CUISINES: [&str; 4] = ["sichuan", "thai", "italian", "mexican"];

fn arb_candidates() -> impl Strategy<Value = Vec<CandidateItem>> {
    prop::collection::vec(
        (prop::array::uniform11(0.0f64..=10.0), 0usize..4, 0usize..6, any::<bool>()),
        0..40,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(palate, cuisine, id, dinner)| {
                let context = if dinner {
                    Context::default().with(ContextField::TimeOfDay, "dinner")
                } else {
                    Context::default()
                };
                // Small id space so duplicates occur.
                CandidateBuilder::new(&format!("item-{id}"))
                    .cuisine(CUISINES[cuisine])
                    .palate(PalateVector::new(palate))
                    .context(context)
                    .build()
            })
            .collect()
    })
}

// ── recommend output is bounded, filtered, unique, and diverse ──────────

proptest! {
    #[test]
    fn recommend_invariants(
        palate in prop::array::uniform11(0.0f64..=10.0),
        cell in 0.0f64..=1.0,
        candidates in arb_candidates(),
        max_n in 0usize..12,
        peer_score in prop::option::of(0.0f64..=1.0),
    ) {
        let profile = ProfileBuilder::new("u")
            .palate(PalateVector::new(palate))
            .matrix(EmotionalPreferenceMatrix::filled(cell))
            .build();
        let peers: Vec<_> = peer_score.map(|s| similarity("u", "p", s)).into_iter().collect();
        let current = Context::default().with(ContextField::TimeOfDay, "dinner");

        let engine = RecommendationEngine::default();
        let recs = engine.recommend(&profile, &candidates, &current, &peers, Some(max_n));

        prop_assert!(recs.len() <= max_n);
        prop_assert!(recs.iter().all(|r| r.total_score >= 0.5));

        let mut ids: Vec<_> = recs.iter().map(|r| r.item_id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), recs.len());

        for cuisine in CUISINES {
            prop_assert!(recs.iter().filter(|r| r.category == cuisine).count() <= 2);
        }
        prop_assert!(recs.windows(2).all(|w| w[0].total_score >= w[1].total_score));
    }
}

// ── Every sub-score of a single score stays in [0, 1] ───────────────────

proptest! {
    #[test]
    fn score_is_bounded(
        user in prop::array::uniform11(0.0f64..=10.0),
        item in prop::array::uniform11(0.0f64..=10.0),
        cell in 0.0f64..=1.0,
        confidence in 0.0f64..=100.0,
    ) {
        let profile = ProfileBuilder::new("u")
            .palate(PalateVector::new(user))
            .matrix(EmotionalPreferenceMatrix::filled(cell))
            .confidence(confidence)
            .build();
        let item = CandidateBuilder::new("i").palate(PalateVector::new(item)).build();
        let s = RecommendationEngine::default().score(&profile, &item, &Context::default(), &[]);
        for x in [s.total_score, s.taste_score, s.emotional_score, s.context_score,
                  s.collaborative_score, s.novelty_score, s.confidence] {
            prop_assert!((0.0..=1.0).contains(&x), "out of range: {}", x);
        }
    }
}
