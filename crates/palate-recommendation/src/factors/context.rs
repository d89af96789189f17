use palate_core::palate::Context;

/// Fraction of the fields set in `current` that the item's context matches
/// exactly. Returns `neutral` when `current` sets no fields.
pub fn score(item: &Context, current: &Context, neutral: f64) -> f64 {
    let (set, matched) = current
        .present_fields()
        .fold((0usize, 0usize), |(set, matched), (field, value)| {
            let hit = item.get(field) == Some(value);
            (set + 1, matched + usize::from(hit))
        });
    if set == 0 {
        return neutral;
    }
    matched as f64 / set as f64
}
