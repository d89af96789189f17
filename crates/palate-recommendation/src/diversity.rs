//! Greedy category diversity over a ranked candidate list.

use std::collections::{HashMap, HashSet};

use palate_core::models::RecommendationScore;

/// Rank by total score descending, breaking ties by item id ascending.
pub fn rank(scores: &mut [RecommendationScore]) {
    scores.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
}

/// Walk `ranked` in order, admitting an item unless its category already
/// holds `max_per_category` picks or its id was already taken. Stops at
/// `max_n`. Skipped items are not reconsidered.
pub fn select(
    ranked: Vec<RecommendationScore>,
    max_n: usize,
    max_per_category: usize,
) -> Vec<RecommendationScore> {
    let mut per_category: HashMap<String, usize> = HashMap::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut picked = Vec::with_capacity(max_n.min(ranked.len()));

    for score in ranked {
        if picked.len() >= max_n {
            break;
        }
        if seen_ids.contains(&score.item_id) {
            continue;
        }
        let count = per_category.entry(score.category.clone()).or_insert(0);
        if *count >= max_per_category {
            continue;
        }
        *count += 1;
        seen_ids.insert(score.item_id.clone());
        picked.push(score);
    }
    picked
}
