//! # palate-metrics
//!
//! Pure functions over (prediction, actual rating) pairs. Predictions are
//! recommendation total scores on [0, 1]; ratings are on the 0–10 scale.
//! Empty input yields 0.0 for every metric.

use std::collections::{HashMap, HashSet};

use palate_core::constants::SCALE_MAX;
use palate_core::models::RecommendationScore;
use serde::{Deserialize, Serialize};

/// A prediction within this many rating points of the actual rating counts
/// as accurate.
pub const ACCURACY_TOLERANCE: f64 = 1.5;

/// One predicted total score matched with the rating the user later gave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPair {
    /// Recommendation total score, [0, 1].
    pub predicted: f64,
    /// Actual rating, 0–10.
    pub actual: f64,
}

impl PredictionPair {
    pub fn new(predicted: f64, actual: f64) -> Self {
        Self { predicted, actual }
    }

    /// Absolute error on the rating scale.
    pub fn error(&self) -> f64 {
        (self.predicted * SCALE_MAX - self.actual).abs()
    }
}

/// Summary of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub matched: usize,
    pub accuracy: f64,
    pub mean_absolute_error: f64,
    pub diversity: f64,
}

/// Match scores with ratings by item id. Scores without a rating are skipped.
pub fn pair_by_item(
    scores: &[RecommendationScore],
    ratings: &HashMap<String, f64>,
) -> Vec<PredictionPair> {
    scores
        .iter()
        .filter_map(|s| {
            ratings
                .get(&s.item_id)
                .map(|&actual| PredictionPair::new(s.total_score, actual))
        })
        .collect()
}

/// Fraction of pairs whose error is at most [`ACCURACY_TOLERANCE`].
pub fn accuracy(pairs: &[PredictionPair]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let hits = pairs
        .iter()
        .filter(|p| p.error() <= ACCURACY_TOLERANCE)
        .count();
    hits as f64 / pairs.len() as f64
}

/// Mean of `|predicted × 10 - actual|`.
pub fn mean_absolute_error(pairs: &[PredictionPair]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    pairs.iter().map(PredictionPair::error).sum::<f64>() / pairs.len() as f64
}

/// Distinct categories over list length, in (0, 1].
pub fn diversity(recommendations: &[RecommendationScore]) -> f64 {
    if recommendations.is_empty() {
        return 0.0;
    }
    let categories: HashSet<&str> = recommendations
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    categories.len() as f64 / recommendations.len() as f64
}

/// Pair, then compute every metric in one pass over the results.
pub fn evaluate(recommendations: &[RecommendationScore], ratings: &HashMap<String, f64>) -> MetricsReport {
    let pairs = pair_by_item(recommendations, ratings);
    MetricsReport {
        matched: pairs.len(),
        accuracy: accuracy(&pairs),
        mean_absolute_error: mean_absolute_error(&pairs),
        diversity: diversity(recommendations),
    }
}
