use crate::models::{CandidateItem, RecommendationScore, UserPalateProfile, UserSimilarity};
use crate::palate::Context;

/// Reliability multiplier in [0.3, 1] for how familiar an experience's
/// context is to a profile.
pub trait IContextWeigher: Send + Sync {
    fn weight(&self, profile: &UserPalateProfile, context: &Context) -> f64;
}

/// "Would people like me enjoy this" signal in [0, 1].
pub trait ICollaborativeSignal: Send + Sync {
    fn score(
        &self,
        profile: &UserPalateProfile,
        item: &CandidateItem,
        similar_users: &[UserSimilarity],
    ) -> f64;
}

/// Exploration signal in [0, 1]: how far an item sits from the user's center.
pub trait INoveltyScorer: Send + Sync {
    fn score(&self, profile: &UserPalateProfile, item: &CandidateItem) -> f64;
}

/// Short explanation for a scored recommendation.
pub trait IReasoner: Send + Sync {
    /// `score` carries every sub-score; its `reasoning` field is still empty.
    fn explain(&self, score: &RecommendationScore) -> String;
}
