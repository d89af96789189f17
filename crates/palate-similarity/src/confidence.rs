//! How far a similarity score between two profiles can be trusted.

use palate_core::models::UserPalateProfile;

/// Mean of three reliability signals, boosted when the match is strong.
///
/// - mean maturity score of the two profiles (novice 0.4 … expert 1.0)
/// - experience overlap: smaller total over larger total (0 when both are 0)
/// - mean normalized profile confidence
///
/// When `composite` exceeds `threshold` the result is multiplied by `boost`,
/// then clamped to [0, 1].
pub fn calculate(
    a: &UserPalateProfile,
    b: &UserPalateProfile,
    composite: f64,
    threshold: f64,
    boost: f64,
) -> f64 {
    let maturity = (a.maturity_score() + b.maturity_score()) / 2.0;
    let overlap = experience_overlap(a.total_experiences, b.total_experiences);
    let reliability = (a.normalized_confidence() + b.normalized_confidence()) / 2.0;

    let mut confidence = (maturity + overlap + reliability) / 3.0;
    if composite > threshold {
        confidence *= boost;
    }
    confidence.clamp(0.0, 1.0)
}

/// Ratio of the smaller experience count to the larger.
pub fn experience_overlap(a: u64, b: u64) -> f64 {
    let max = a.max(b);
    if max == 0 {
        return 0.0;
    }
    a.min(b) as f64 / max as f64
}
