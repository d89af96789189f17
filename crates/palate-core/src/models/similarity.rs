use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Composite palate similarity between two users. Computed on demand,
/// never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserSimilarity {
    pub user_a: String,
    pub user_b: String,
    /// Weighted composite in [0, 1].
    pub similarity_score: f64,
    pub taste_alignment: f64,
    pub emotional_alignment: f64,
    pub context_alignment: f64,
    /// How far the score can be trusted, in [0, 1].
    pub confidence: f64,
}
