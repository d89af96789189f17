use palate_core::palate::EmotionalPreferenceMatrix;

/// Mean of `1 - |a - b|` over all 55 matrix cells.
pub fn alignment(a: &EmotionalPreferenceMatrix, b: &EmotionalPreferenceMatrix) -> f64 {
    let (sum, count) = a
        .cells()
        .zip(b.cells())
        .fold((0.0, 0usize), |(sum, n), (x, y)| (sum + (1.0 - (x - y).abs()), n + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64).clamp(0.0, 1.0)
}
