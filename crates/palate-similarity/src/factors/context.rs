use std::collections::{BTreeMap, BTreeSet};

/// Mean of `1 - |w_a - w_b|` over the union of context keys; a key missing
/// from one side counts as `neutral`. Two empty maps align fully.
pub fn alignment(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>, neutral: f64) -> f64 {
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    if keys.is_empty() {
        return 1.0;
    }
    let total: f64 = keys
        .iter()
        .map(|k| {
            let wa = a.get(*k).copied().unwrap_or(neutral);
            let wb = b.get(*k).copied().unwrap_or(neutral);
            1.0 - (wa - wb).abs()
        })
        .sum();
    (total / keys.len() as f64).clamp(0.0, 1.0)
}
