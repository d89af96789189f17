use palate_core::config::LearningConfig;
use palate_core::models::{ProfileMaturity, UserPalateProfile};

/// Adaptive learning rate.
///
/// Formula: `baseRate(maturity) × (1 + (1 - confidence/100))`
/// Range: `baseRate` – `2 × baseRate`.
///
/// New or unsure profiles move faster.
pub fn calculate(profile: &UserPalateProfile, config: &LearningConfig) -> f64 {
    let maturity = ProfileMaturity::from_experiences(profile.total_experiences);
    let base = config.base_rate(maturity);
    base * (1.0 + (1.0 - profile.normalized_confidence()))
}
