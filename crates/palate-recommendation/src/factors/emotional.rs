use palate_core::constants::{SATISFACTION_WEIGHTS, SCALE_MAX, TASTE_DIMENSIONS};
use palate_core::palate::{EmotionDimension, EmotionalPreferenceMatrix, PalateVector, TasteDimension};

/// Predicted response of each emotional dimension to a dish, in [0, 1].
///
/// The matrix acts as a linear map from the normalized taste vector:
/// `pred_j = Σ_i M[i][j] × (c_i / 10) / 11`.
pub fn predicted_response(matrix: &EmotionalPreferenceMatrix, item: &PalateVector) -> [f64; 5] {
    EmotionDimension::ALL.map(|emotion| {
        let sum: f64 = TasteDimension::ALL
            .iter()
            .map(|&taste| matrix.get(taste, emotion) * item.get(taste) / SCALE_MAX)
            .sum();
        sum / TASTE_DIMENSIONS as f64
    })
}

/// Predicted satisfaction: the prediction folded with the satisfaction weights.
pub fn score(matrix: &EmotionalPreferenceMatrix, item: &PalateVector) -> f64 {
    let predicted = predicted_response(matrix, item);
    predicted
        .iter()
        .zip(SATISFACTION_WEIGHTS.iter())
        .map(|(p, w)| p * w)
        .sum::<f64>()
        .clamp(0.0, 1.0)
}
