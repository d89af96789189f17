//! Fluent builders with sensible neutral defaults.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use palate_core::models::{
    CandidateItem, FoodExperience, PalateEvolution, ProfileMaturity, UserPalateProfile,
    UserSimilarity,
};
use palate_core::palate::{Context, EmotionalPreferenceMatrix, EmotionalResponse, PalateVector};

/// Builds a [`FoodExperience`]. Defaults: neutral palate (5.0), mildly happy
/// response (7.0 everywhere), empty context, confidence 0.8.
#[derive(Debug, Clone)]
pub struct ExperienceBuilder {
    experience: FoodExperience,
}

impl ExperienceBuilder {
    pub fn new(user_id: &str) -> Self {
        Self {
            experience: FoodExperience {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                food_item: "Test dish".to_string(),
                cuisine: "fusion".to_string(),
                palate_vector: PalateVector::uniform(5.0),
                emotional_response: EmotionalResponse::uniform(7.0),
                context: Context::default(),
                timestamp: Utc::now(),
                confidence: 0.8,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.experience.id = id.to_string();
        self
    }

    pub fn food(mut self, food_item: &str, cuisine: &str) -> Self {
        self.experience.food_item = food_item.to_string();
        self.experience.cuisine = cuisine.to_string();
        self
    }

    pub fn palate(mut self, palate: PalateVector) -> Self {
        self.experience.palate_vector = palate;
        self
    }

    pub fn emotions(mut self, response: EmotionalResponse) -> Self {
        self.experience.emotional_response = response;
        self
    }

    pub fn context(mut self, context: Context) -> Self {
        self.experience.context = context;
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.experience.confidence = confidence;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.experience.timestamp = timestamp;
        self
    }

    pub fn build(self) -> FoodExperience {
        self.experience
    }
}

/// Builds a [`UserPalateProfile`]. Defaults: neutral palate and matrix,
/// confidence 50, one experience, no history.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: UserPalateProfile,
}

impl ProfileBuilder {
    pub fn new(user_id: &str) -> Self {
        Self {
            profile: UserPalateProfile {
                user_id: user_id.to_string(),
                palate_vector: PalateVector::uniform(5.0),
                emotional_preference_matrix: EmotionalPreferenceMatrix::neutral(),
                context_weights: BTreeMap::new(),
                evolution_history: Vec::new(),
                confidence_score: 50.0,
                profile_maturity: ProfileMaturity::Novice,
                total_experiences: 1,
                last_updated: Utc::now(),
            },
        }
    }

    pub fn palate(mut self, palate: PalateVector) -> Self {
        self.profile.palate_vector = palate;
        self
    }

    pub fn matrix(mut self, matrix: EmotionalPreferenceMatrix) -> Self {
        self.profile.emotional_preference_matrix = matrix;
        self
    }

    /// Profile confidence on the 0–100 scale.
    pub fn confidence(mut self, confidence_score: f64) -> Self {
        self.profile.confidence_score = confidence_score;
        self
    }

    /// Set the experience count; maturity follows it.
    pub fn experiences(mut self, total: u64) -> Self {
        self.profile.total_experiences = total;
        self.profile.profile_maturity = ProfileMaturity::from_experiences(total);
        self
    }

    pub fn context_weight(mut self, signature: &str, weight: f64) -> Self {
        self.profile
            .context_weights
            .insert(signature.to_string(), weight);
        self
    }

    pub fn history(mut self, history: Vec<PalateEvolution>) -> Self {
        self.profile.evolution_history = history;
        self
    }

    pub fn build(self) -> UserPalateProfile {
        self.profile
    }
}

/// Builds a [`CandidateItem`]. Defaults: neutral palate, empty context.
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
    item: CandidateItem,
}

impl CandidateBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: CandidateItem {
                id: id.to_string(),
                name: format!("Dish {id}"),
                cuisine: "fusion".to_string(),
                palate_vector: PalateVector::uniform(5.0),
                context: Context::default(),
            },
        }
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.item.cuisine = cuisine.to_string();
        self
    }

    pub fn palate(mut self, palate: PalateVector) -> Self {
        self.item.palate_vector = palate;
        self
    }

    pub fn context(mut self, context: Context) -> Self {
        self.item.context = context;
        self
    }

    pub fn build(self) -> CandidateItem {
        self.item
    }
}

/// A pre-computed similarity record, as supplied to the recommender.
pub fn similarity(user_a: &str, user_b: &str, score: f64) -> UserSimilarity {
    UserSimilarity {
        user_a: user_a.to_string(),
        user_b: user_b.to_string(),
        similarity_score: score,
        taste_alignment: score,
        emotional_alignment: score,
        context_alignment: score,
        confidence: 0.9,
    }
}
