use chrono::Utc;
use palate_core::models::{PalateEvolution, UserPalateProfile};
use palate_core::palate::{EmotionalPreferenceMatrix, PalateVector};
use palate_similarity::{cosine_similarity, SimilarityEngine};
use proptest::prelude::*;
use test_fixtures::builders::ProfileBuilder;

fn arb_history() -> impl Strategy<Value = Vec<PalateEvolution>> {
    prop::collection::vec(0.0f64..1.0, 0..14).prop_map(|steps| {
        steps
            .into_iter()
            .map(|m| {
                let mut deltas = [0.0; 11];
                deltas[0] = m * 8.0;
                PalateEvolution::new(deltas, "exp", Utc::now())
            })
            .collect()
    })
}

prop_compose! {
    fn arb_profile(user: &'static str)(
        palate in prop::array::uniform11(0.0f64..=10.0),
        cell in 0.0f64..=1.0,
        weight in 0.0f64..=1.0,
        history in arb_history(),
        experiences in 0u64..800,
        confidence in 0.0f64..=100.0,
    ) -> UserPalateProfile {
        ProfileBuilder::new(user)
            .palate(PalateVector::new(palate))
            .matrix(EmotionalPreferenceMatrix::filled(cell))
            .context_weight("time_of_day:dinner", weight)
            .history(history)
            .experiences(experiences)
            .confidence(confidence)
            .build()
    }
}

// ── Cosine self-similarity is 1 for non-zero vectors ────────────────────

proptest! {
    #[test]
    fn cosine_self_similarity(v in prop::collection::vec(0.01f64..10.0, 1..20)) {
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }
}

// ── Similarity is symmetric ─────────────────────────────────────────────

proptest! {
    #[test]
    fn similarity_is_symmetric(a in arb_profile("a"), b in arb_profile("b"), w in 0.0f64..2.0) {
        let engine = SimilarityEngine::default();
        let ab = engine.similarity(&a, &b, w);
        let ba = engine.similarity(&b, &a, w);
        prop_assert!((ab.similarity_score - ba.similarity_score).abs() < 1e-12);
        prop_assert!((ab.confidence - ba.confidence).abs() < 1e-12);
    }
}

// ── Scores stay in [0, 1] ───────────────────────────────────────────────

proptest! {
    #[test]
    fn similarity_is_bounded(a in arb_profile("a"), b in arb_profile("b"), w in -1.0f64..3.0) {
        let s = SimilarityEngine::default().similarity(&a, &b, w);
        for x in [s.similarity_score, s.taste_alignment, s.emotional_alignment,
                  s.context_alignment, s.confidence] {
            prop_assert!((0.0..=1.0).contains(&x), "out of range: {}", x);
        }
    }
}

// ── A profile with non-zero taste is fully similar to itself ────────────

proptest! {
    #[test]
    fn self_similarity_is_one(p in arb_profile("a")) {
        prop_assume!(p.palate_vector.magnitude() > 1e-3);
        let mut copy = p.clone();
        copy.user_id = "copy".into();
        let s = SimilarityEngine::default().similarity(&p, &copy, 1.0);
        prop_assert!((s.similarity_score - 1.0).abs() < 1e-9);
    }
}

// ── find_similar honours both gates and never returns the target ────────

proptest! {
    #[test]
    fn find_similar_gates(
        target in arb_profile("me"),
        others in prop::collection::vec(arb_profile("other"), 0..8),
        threshold in 0.0f64..1.0,
    ) {
        let mut candidates = others;
        for (i, c) in candidates.iter_mut().enumerate() {
            c.user_id = format!("other-{i}");
        }
        candidates.push(target.clone());
        let engine = SimilarityEngine::default();
        let found = engine.find_similar(&target, &candidates, Some(threshold));
        for s in &found {
            prop_assert_ne!(&s.user_b, "me");
            prop_assert!(s.similarity_score >= threshold);
            prop_assert!(s.confidence >= 0.7);
        }
        prop_assert!(found.windows(2).all(|w| w[0].similarity_score >= w[1].similarity_score));
    }
}
