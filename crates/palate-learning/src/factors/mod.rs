//! The four scalars that scale a single palate update.

pub mod contextual_weight;
pub mod emotional_weight;
pub mod learning_rate;
pub mod satisfaction;

pub use contextual_weight::FamiliarityContextWeigher;

use palate_core::config::LearningConfig;
use palate_core::models::{FoodExperience, UserPalateProfile};
use palate_core::traits::IContextWeigher;

/// Every factor of one update, kept together for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateFactors {
    pub learning_rate: f64,
    pub emotional_weight: f64,
    pub contextual_weight: f64,
    /// Re-centered satisfaction in [-1, 1].
    pub satisfaction_gradient: f64,
}

impl UpdateFactors {
    /// Scale applied to `(experience - current)` on every taste dimension.
    pub fn step(&self) -> f64 {
        self.learning_rate * self.satisfaction_gradient * self.emotional_weight * self.contextual_weight
    }
}

/// Compute every factor for applying `experience` to `profile`.
pub fn compute(
    profile: &UserPalateProfile,
    experience: &FoodExperience,
    config: &LearningConfig,
    context_weigher: &dyn IContextWeigher,
) -> UpdateFactors {
    UpdateFactors {
        learning_rate: learning_rate::calculate(profile, config),
        emotional_weight: emotional_weight::calculate(&experience.emotional_response),
        contextual_weight: context_weigher.weight(profile, &experience.context),
        satisfaction_gradient: satisfaction::gradient(&experience.emotional_response),
    }
}
