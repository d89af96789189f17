use palate_core::models::PalateEvolution;

/// Alignment of two evolution histories.
///
/// The newest `window` records of each side are paired by distance from the
/// end. A pair with matching classification contributes
/// `1 / (1 + |magnitude_a - magnitude_b|)`, a mismatched pair contributes 0;
/// the sum is averaged over the number of pairs. Both histories empty gives
/// 1.0, exactly one empty gives `one_sided`.
pub fn alignment(
    a: &[PalateEvolution],
    b: &[PalateEvolution],
    window: usize,
    one_sided: f64,
) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return one_sided,
        _ => {}
    }

    let pairs = a.len().min(b.len()).min(window);
    if pairs == 0 {
        return one_sided;
    }
    let total: f64 = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take(pairs)
        .filter(|(ea, eb)| ea.kind == eb.kind)
        .map(|(ea, eb)| 1.0 / (1.0 + (ea.change_magnitude - eb.change_magnitude).abs()))
        .sum();
    (total / pairs as f64).clamp(0.0, 1.0)
}
