use palate_core::constants::SCALE_MIDPOINT;
use palate_core::palate::EmotionalResponse;

/// Satisfaction gradient: weighted satisfaction re-centered around 5.
///
/// Formula: `(Σ wᵢ·emotionᵢ - 5) / 5` with weights 0.35/0.25/0.20/0.15/0.05.
/// Range: -1.0 – 1.0. Negative values push the palate away from the dish.
pub fn gradient(response: &EmotionalResponse) -> f64 {
    ((response.weighted_satisfaction() - SCALE_MIDPOINT) / SCALE_MIDPOINT).clamp(-1.0, 1.0)
}
