//! Evolution records and the profile confidence blend.

use chrono::{DateTime, Utc};
use palate_core::constants::MAX_PROFILE_CONFIDENCE;
use palate_core::models::PalateEvolution;
use palate_core::palate::{clamp_unit, PalateVector};

/// Record how the palate moved for one experience.
pub fn record(
    old: &PalateVector,
    new: &PalateVector,
    experience_id: &str,
    timestamp: DateTime<Utc>,
) -> PalateEvolution {
    PalateEvolution::new(new.delta(old), experience_id, timestamp)
}

/// Blend profile confidence toward the experience's confidence.
///
/// Formula: `old × (1 - w) + experienceConfidence × 100 × w`
/// with `w = min(maxBlend, 1 / totalExperiences)`.
pub fn blend_confidence(
    old_confidence: f64,
    experience_confidence: f64,
    total_experiences: u64,
    max_blend: f64,
) -> f64 {
    let weight = max_blend.min(1.0 / total_experiences.max(1) as f64);
    let target = clamp_unit(experience_confidence) * MAX_PROFILE_CONFIDENCE;
    (old_confidence * (1.0 - weight) + target * weight).clamp(0.0, MAX_PROFILE_CONFIDENCE)
}
