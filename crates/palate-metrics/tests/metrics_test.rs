use std::collections::HashMap;

use palate_core::models::RecommendationScore;
use palate_metrics::*;

fn rec(id: &str, category: &str, total: f64) -> RecommendationScore {
    RecommendationScore {
        item_id: id.into(),
        user_id: "u".into(),
        category: category.into(),
        total_score: total,
        taste_score: total,
        emotional_score: total,
        context_score: 0.5,
        collaborative_score: 0.5,
        novelty_score: 0.0,
        confidence: 0.5,
        reasoning: String::new(),
    }
}

fn constant(actuals: &[f64]) -> Vec<PredictionPair> {
    actuals.iter().map(|&a| PredictionPair::new(0.5, a)).collect()
}

#[test]
fn constant_predictor_mae() {
    assert_eq!(mean_absolute_error(&constant(&[5.0, 5.0, 5.0])), 0.0);
    assert_eq!(mean_absolute_error(&constant(&[10.0, 10.0, 10.0])), 5.0);
}

#[test]
fn accuracy_uses_tolerance_inclusively() {
    let pairs = vec![
        PredictionPair::new(0.5, 6.5),
        PredictionPair::new(0.5, 7.0),
        PredictionPair::new(0.8, 8.0),
        PredictionPair::new(0.2, 9.0),
    ];
    assert_eq!(accuracy(&pairs), 0.5);
}

#[test]
fn empty_inputs_are_zero() {
    assert_eq!(accuracy(&[]), 0.0);
    assert_eq!(mean_absolute_error(&[]), 0.0);
    assert_eq!(diversity(&[]), 0.0);
}

#[test]
fn diversity_counts_distinct_categories() {
    let recs = vec![rec("a", "thai", 0.9), rec("b", "thai", 0.8), rec("c", "sichuan", 0.7), rec("d", "italian", 0.6)];
    assert_eq!(diversity(&recs), 0.75);
    assert_eq!(diversity(&recs[..1]), 1.0);
}

#[test]
fn pairs_match_by_item_id() {
    let recs = vec![rec("a", "thai", 0.9), rec("b", "thai", 0.6), rec("c", "sichuan", 0.7)];
    let ratings: HashMap<String, f64> = [("a".to_string(), 8.0), ("c".to_string(), 3.0)].into();
    let pairs = pair_by_item(&recs, &ratings);
    assert_eq!(pairs, vec![PredictionPair::new(0.9, 8.0), PredictionPair::new(0.7, 3.0)]);

    let report = evaluate(&recs, &ratings);
    assert_eq!(report.matched, 2);
    assert_eq!(report.accuracy, 0.5);
    assert!((report.mean_absolute_error - 2.5).abs() < 1e-12);
    assert!((report.diversity - 2.0 / 3.0).abs() < 1e-12);
    assert!(serde_json::to_string(&report).unwrap().contains("mean_absolute_error"));
}
