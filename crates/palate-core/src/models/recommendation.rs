use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Score of one candidate item for one user, with its factor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationScore {
    pub item_id: String,
    pub user_id: String,
    /// Diversity category of the item (normalised cuisine).
    pub category: String,
    /// Weighted composite in [0, 1].
    pub total_score: f64,
    pub taste_score: f64,
    pub emotional_score: f64,
    pub context_score: f64,
    pub collaborative_score: f64,
    pub novelty_score: f64,
    pub confidence: f64,
    /// Short human-readable explanation.
    pub reasoning: String,
}
