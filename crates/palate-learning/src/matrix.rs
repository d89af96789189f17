//! Exponential smoothing of the taste×emotion correlation matrix.

use palate_core::constants::SCALE_MAX;
use palate_core::palate::{EmotionalPreferenceMatrix, EmotionalResponse, PalateVector};

/// Blend every cell toward the instantaneous correlation of this experience.
///
/// ```text
/// cell[i][j] = decay × cell[i][j] + (1 - decay) × (taste[i]/10) × (emotion[j]/10)
/// ```
pub fn update(
    matrix: &EmotionalPreferenceMatrix,
    taste: &PalateVector,
    response: &EmotionalResponse,
    decay: f64,
) -> EmotionalPreferenceMatrix {
    let emotions = response.dimensions();
    EmotionalPreferenceMatrix::from_fn(|t, e| {
        let correlation = (taste.get(t) / SCALE_MAX) * (emotions[e.index()] / SCALE_MAX);
        decay * matrix.get(t, e) + (1.0 - decay) * correlation
    })
}
