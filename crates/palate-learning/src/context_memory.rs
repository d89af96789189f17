//! Learned familiarity of context signatures.

use std::collections::BTreeMap;

use palate_core::constants::NEUTRAL_CONTEXT_WEIGHT;
use palate_core::palate::Context;

/// Move every signature present in `context` toward full familiarity.
///
/// Unseen signatures start at the neutral 0.5; each sighting closes `step`
/// of the remaining gap to 1.0. Absent signatures are left untouched.
pub fn reinforce(weights: &BTreeMap<String, f64>, context: &Context, step: f64) -> BTreeMap<String, f64> {
    let mut next = weights.clone();
    for signature in context.signatures() {
        let current = next.get(&signature).copied().unwrap_or(NEUTRAL_CONTEXT_WEIGHT);
        let reinforced = (current + (1.0 - current) * step).clamp(0.0, 1.0);
        next.insert(signature, reinforced);
    }
    next
}
