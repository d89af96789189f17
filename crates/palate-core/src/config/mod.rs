//! Layered configuration: every section falls back to its defaults, so an
//! empty TOML document yields a fully working engine.

pub mod defaults;
mod learning_config;
mod observability_config;
mod recommendation_config;
mod similarity_config;

pub use learning_config::LearningConfig;
pub use observability_config::ObservabilityConfig;
pub use recommendation_config::{RecommendationConfig, RecommendationWeights};
pub use similarity_config::{SimilarityConfig, SimilarityWeights};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PalateResult};

/// Tolerance when checking that a weight set sums to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Root configuration for the palate engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PalateConfig {
    pub learning: LearningConfig,
    pub similarity: SimilarityConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

impl PalateConfig {
    /// Parse a TOML document; missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> PalateResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check weight sums and threshold ranges across all sections.
    pub fn validate(&self) -> PalateResult<()> {
        self.learning.validate()?;
        self.similarity.validate()?;
        self.recommendation.validate()?;
        Ok(())
    }
}

/// Reject negative weights and weight sets that do not sum to 1.0.
pub(crate) fn check_weights(section: &'static str, weights: &[f64]) -> Result<(), ConfigError> {
    for &w in weights {
        check_unit(section, w)?;
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSum { section, sum });
    }
    Ok(())
}

/// Reject values outside [0, 1].
pub(crate) fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_range(field, value, 0.0, 1.0)
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Reject counts below one.
pub(crate) fn check_positive(field: &'static str, value: usize) -> Result<(), ConfigError> {
    check_range(field, value as f64, 1.0, f64::INFINITY)
}
