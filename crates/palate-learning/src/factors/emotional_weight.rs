use palate_core::palate::EmotionalResponse;

/// Emotional consistency: `1 / (1 + variance)` of the five affective fields.
///
/// Range: (0, 1]. A coherent report scores 1.0; a scattershot one approaches 0.
pub fn consistency(response: &EmotionalResponse) -> f64 {
    1.0 / (1.0 + response.variance())
}

/// Emotional weight: `intensity/10 × consistency`.
///
/// Range: 0.0 – 1.0.
pub fn calculate(response: &EmotionalResponse) -> f64 {
    response.normalized_intensity() * consistency(response)
}
