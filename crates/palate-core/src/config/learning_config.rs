use serde::{Deserialize, Serialize};

use super::{check_range, check_unit, defaults};
use crate::errors::ConfigError;
use crate::models::ProfileMaturity;

/// Profile updater configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Base learning rate for novice profiles.
    pub novice_learning_rate: f64,
    /// Base learning rate for developing profiles.
    pub developing_learning_rate: f64,
    /// Base learning rate for established profiles.
    pub established_learning_rate: f64,
    /// Base learning rate for expert profiles.
    pub expert_learning_rate: f64,
    /// Share of the old emotional matrix kept on each update.
    pub matrix_decay: f64,
    /// Cap on the confidence blend weight.
    pub max_confidence_blend: f64,
    /// How far a seen context signature moves toward full familiarity.
    pub context_familiarity_step: f64,
    /// Lower bound of the contextual weight, reached in a fully unseen context.
    pub min_contextual_weight: f64,
    /// Contextual weight used when an experience carries no context.
    pub neutral_contextual_weight: f64,
}

impl LearningConfig {
    /// Base learning rate for a maturity tier.
    pub fn base_rate(&self, maturity: ProfileMaturity) -> f64 {
        match maturity {
            ProfileMaturity::Novice => self.novice_learning_rate,
            ProfileMaturity::Developing => self.developing_learning_rate,
            ProfileMaturity::Established => self.established_learning_rate,
            ProfileMaturity::Expert => self.expert_learning_rate,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        // Rates are doubled for zero-confidence profiles; keep the step below 1.
        check_range("learning.novice_learning_rate", self.novice_learning_rate, 0.0, 0.5)?;
        check_range("learning.developing_learning_rate", self.developing_learning_rate, 0.0, 0.5)?;
        check_range("learning.established_learning_rate", self.established_learning_rate, 0.0, 0.5)?;
        check_range("learning.expert_learning_rate", self.expert_learning_rate, 0.0, 0.5)?;
        check_unit("learning.matrix_decay", self.matrix_decay)?;
        check_unit("learning.max_confidence_blend", self.max_confidence_blend)?;
        check_unit("learning.context_familiarity_step", self.context_familiarity_step)?;
        check_unit("learning.min_contextual_weight", self.min_contextual_weight)?;
        check_range(
            "learning.neutral_contextual_weight",
            self.neutral_contextual_weight,
            self.min_contextual_weight,
            1.0,
        )
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            novice_learning_rate: defaults::DEFAULT_NOVICE_LEARNING_RATE,
            developing_learning_rate: defaults::DEFAULT_DEVELOPING_LEARNING_RATE,
            established_learning_rate: defaults::DEFAULT_ESTABLISHED_LEARNING_RATE,
            expert_learning_rate: defaults::DEFAULT_EXPERT_LEARNING_RATE,
            matrix_decay: defaults::DEFAULT_MATRIX_DECAY,
            max_confidence_blend: defaults::DEFAULT_MAX_CONFIDENCE_BLEND,
            context_familiarity_step: defaults::DEFAULT_CONTEXT_FAMILIARITY_STEP,
            min_contextual_weight: defaults::DEFAULT_MIN_CONTEXTUAL_WEIGHT,
            neutral_contextual_weight: defaults::DEFAULT_NEUTRAL_CONTEXTUAL_WEIGHT,
        }
    }
}
