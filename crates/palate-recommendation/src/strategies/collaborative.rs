use palate_core::config::RecommendationConfig;
use palate_core::models::{CandidateItem, UserPalateProfile, UserSimilarity};
use palate_core::palate::clamp_unit;
use palate_core::traits::ICollaborativeSignal;

/// Mean similarity score of the supplied similar users, independent of the
/// item. Falls back to a neutral score when no users are supplied.
#[derive(Debug, Clone, Copy)]
pub struct MeanSimilaritySignal {
    neutral: f64,
}

impl MeanSimilaritySignal {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            neutral: config.neutral_collaborative_score,
        }
    }
}

impl Default for MeanSimilaritySignal {
    fn default() -> Self {
        Self::new(&RecommendationConfig::default())
    }
}

impl ICollaborativeSignal for MeanSimilaritySignal {
    fn score(
        &self,
        _profile: &UserPalateProfile,
        _item: &CandidateItem,
        similar_users: &[UserSimilarity],
    ) -> f64 {
        if similar_users.is_empty() {
            return self.neutral;
        }
        let total: f64 = similar_users.iter().map(|s| s.similarity_score).sum();
        clamp_unit(total / similar_users.len() as f64)
    }
}
