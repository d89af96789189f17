use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit, check_weights, defaults};
use crate::errors::ConfigError;

/// Weights of the five recommendation factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationWeights {
    pub taste: f64,
    pub emotional: f64,
    pub context: f64,
    pub collaborative: f64,
    pub novelty: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            taste: defaults::DEFAULT_RECOMMENDATION_TASTE_WEIGHT,
            emotional: defaults::DEFAULT_RECOMMENDATION_EMOTIONAL_WEIGHT,
            context: defaults::DEFAULT_RECOMMENDATION_CONTEXT_WEIGHT,
            collaborative: defaults::DEFAULT_RECOMMENDATION_COLLABORATIVE_WEIGHT,
            novelty: defaults::DEFAULT_RECOMMENDATION_NOVELTY_WEIGHT,
        }
    }
}

/// Recommendation scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub weights: RecommendationWeights,
    /// Candidates scoring below this never reach the ranked list.
    pub min_total_score: f64,
    /// Result count used when the caller does not pass one.
    pub default_max_results: usize,
    /// How many times `max_n` candidates enter the diversity pass.
    pub candidate_pool_factor: usize,
    /// Most results allowed from one cuisine category.
    pub max_per_category: usize,
    /// Taste score above which the reasoning calls out a taste match.
    pub strong_taste_threshold: f64,
    /// Emotional score above which the reasoning calls out satisfaction.
    pub strong_emotional_threshold: f64,
    /// Context score above which the reasoning calls out situational fit.
    pub strong_context_threshold: f64,
    /// Collaborative score when no similar users are supplied.
    pub neutral_collaborative_score: f64,
    /// Context score when the current context sets no fields.
    pub neutral_context_score: f64,
}

impl RecommendationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        check_weights(
            "recommendation.weights",
            &[w.taste, w.emotional, w.context, w.collaborative, w.novelty],
        )?;
        check_unit("recommendation.min_total_score", self.min_total_score)?;
        check_positive("recommendation.default_max_results", self.default_max_results)?;
        check_positive("recommendation.candidate_pool_factor", self.candidate_pool_factor)?;
        check_positive("recommendation.max_per_category", self.max_per_category)?;
        check_unit("recommendation.strong_taste_threshold", self.strong_taste_threshold)?;
        check_unit(
            "recommendation.strong_emotional_threshold",
            self.strong_emotional_threshold,
        )?;
        check_unit("recommendation.strong_context_threshold", self.strong_context_threshold)?;
        check_unit(
            "recommendation.neutral_collaborative_score",
            self.neutral_collaborative_score,
        )?;
        check_unit("recommendation.neutral_context_score", self.neutral_context_score)
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weights: RecommendationWeights::default(),
            min_total_score: defaults::DEFAULT_MIN_TOTAL_SCORE,
            default_max_results: defaults::DEFAULT_MAX_RESULTS,
            candidate_pool_factor: defaults::DEFAULT_CANDIDATE_POOL_FACTOR,
            max_per_category: defaults::DEFAULT_MAX_PER_CATEGORY,
            strong_taste_threshold: defaults::DEFAULT_STRONG_TASTE_THRESHOLD,
            strong_emotional_threshold: defaults::DEFAULT_STRONG_EMOTIONAL_THRESHOLD,
            strong_context_threshold: defaults::DEFAULT_STRONG_CONTEXT_THRESHOLD,
            neutral_collaborative_score: defaults::DEFAULT_NEUTRAL_COLLABORATIVE_SCORE,
            neutral_context_score: defaults::DEFAULT_NEUTRAL_CONTEXT_SCORE,
        }
    }
}
