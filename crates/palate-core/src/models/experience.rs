use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::palate::{Context, EmotionalResponse, PalateVector};

/// One logged food experience. Produced by the logging subsystem and
/// read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodExperience {
    /// UUID v4 identifier.
    pub id: String,
    pub user_id: String,
    pub food_item: String,
    pub cuisine: String,
    pub palate_vector: PalateVector,
    pub emotional_response: EmotionalResponse,
    #[serde(default)]
    pub context: Context,
    pub timestamp: DateTime<Utc>,
    /// How sure the user is about their own rating, 0–1.
    pub confidence: f64,
}

/// A dish or restaurant offered to the recommendation scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: String,
    pub name: String,
    /// Category key for the diversity filter.
    pub cuisine: String,
    pub palate_vector: PalateVector,
    /// Situation the item is typically enjoyed in.
    #[serde(default)]
    pub context: Context,
}

impl CandidateItem {
    /// Diversity category: the cuisine label trimmed and lowercased.
    pub fn category(&self) -> String {
        self.cuisine.trim().to_lowercase()
    }
}

impl From<&FoodExperience> for CandidateItem {
    fn from(e: &FoodExperience) -> Self {
        Self {
            id: e.id.clone(),
            name: e.food_item.clone(),
            cuisine: e.cuisine.clone(),
            palate_vector: e.palate_vector,
            context: e.context.clone(),
        }
    }
}
