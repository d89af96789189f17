use palate_core::constants::SCALE_MAX;
use palate_core::palate::PalateVector;

/// Floor on a dimension's weight so weak preferences still count a little.
const MIN_DIMENSION_WEIGHT: f64 = 0.1;

/// Preference-weighted mean alignment across all taste dimensions.
///
/// Each dimension aligns as `1 - |user - item| / 10` and is weighted by the
/// user's own strength on it, `max(0.1, user / 10)`, so matching strong
/// preferences counts more than matching weak ones.
pub fn score(user: &PalateVector, item: &PalateVector) -> f64 {
    let (weighted, total_weight) = user
        .values()
        .iter()
        .zip(item.values().iter())
        .fold((0.0, 0.0), |(sum, weights), (u, c)| {
            let weight = (u / SCALE_MAX).max(MIN_DIMENSION_WEIGHT);
            let alignment = 1.0 - (u - c).abs() / SCALE_MAX;
            (sum + weight * alignment, weights + weight)
        });
    (weighted / total_weight).clamp(0.0, 1.0)
}
