use palate_core::models::ProfileMaturity;
use palate_core::palate::*;
use proptest::prelude::*;

// ── Palate vector fields always within [0, 10] ──────────────────────────

proptest! {
    #[test]
    fn palate_vector_is_clamped(values in prop::array::uniform11(-100.0f64..100.0)) {
        let v = PalateVector::new(values);
        for x in v.values() {
            prop_assert!((0.0..=10.0).contains(x), "Out of bounds: {}", x);
        }
    }
}

// ── Matrix cells always within [0, 1] ───────────────────────────────────

proptest! {
    #[test]
    fn matrix_cells_are_clamped(value in -10.0f64..10.0) {
        let m = EmotionalPreferenceMatrix::filled(value);
        prop_assert!(m.cells().all(|c| (0.0..=1.0).contains(&c)));
    }
}

// ── Maturity is monotonic in the experience count ───────────────────────

proptest! {
    #[test]
    fn maturity_is_monotonic(a in 0u64..2000, b in 0u64..2000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            ProfileMaturity::from_experiences(lo) <= ProfileMaturity::from_experiences(hi)
        );
    }
}

// ── Emotional variance is bounded by the 0–10 scale ─────────────────────

proptest! {
    #[test]
    fn emotional_variance_is_bounded(fields in prop::array::uniform5(0.0f64..=10.0)) {
        let r = EmotionalResponse::new(fields[0], fields[1], fields[2], fields[3], fields[4], 5.0, 5.0);
        let var = r.variance();
        prop_assert!((0.0..=25.0).contains(&var), "variance {}", var);
        let sat = r.weighted_satisfaction();
        prop_assert!((0.0..=10.0 + 1e-9).contains(&sat), "satisfaction {}", sat);
    }
}
