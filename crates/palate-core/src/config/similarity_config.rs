use serde::{Deserialize, Serialize};

use super::{check_positive, check_range, check_unit, check_weights, defaults};
use crate::errors::ConfigError;

/// Weights of the four alignment factors in the composite similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub taste: f64,
    pub emotional: f64,
    pub context: f64,
    pub evolution: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            taste: defaults::DEFAULT_SIMILARITY_TASTE_WEIGHT,
            emotional: defaults::DEFAULT_SIMILARITY_EMOTIONAL_WEIGHT,
            context: defaults::DEFAULT_SIMILARITY_CONTEXT_WEIGHT,
            evolution: defaults::DEFAULT_SIMILARITY_EVOLUTION_WEIGHT,
        }
    }
}

/// Similarity engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub weights: SimilarityWeights,
    /// Composite score a candidate must reach to count as similar.
    pub similarity_threshold: f64,
    /// Confidence a candidate must reach to count as similar.
    pub min_confidence: f64,
    /// Number of most recent evolution records compared per profile.
    pub evolution_window: usize,
    /// Confidence multiplier applied above the similarity threshold.
    pub high_similarity_boost: f64,
    /// Evolution alignment when exactly one profile has history.
    pub one_sided_history_alignment: f64,
}

impl SimilarityConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        check_weights("similarity.weights", &[w.taste, w.emotional, w.context, w.evolution])?;
        check_unit("similarity.similarity_threshold", self.similarity_threshold)?;
        check_unit("similarity.min_confidence", self.min_confidence)?;
        check_positive("similarity.evolution_window", self.evolution_window)?;
        check_range("similarity.high_similarity_boost", self.high_similarity_boost, 1.0, 2.0)?;
        check_unit(
            "similarity.one_sided_history_alignment",
            self.one_sided_history_alignment,
        )
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            min_confidence: defaults::DEFAULT_MIN_MATCH_CONFIDENCE,
            evolution_window: defaults::DEFAULT_EVOLUTION_WINDOW,
            high_similarity_boost: defaults::DEFAULT_HIGH_SIMILARITY_BOOST,
            one_sided_history_alignment: defaults::DEFAULT_ONE_SIDED_HISTORY_ALIGNMENT,
        }
    }
}
