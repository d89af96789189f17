//! Span definitions per operation: learning, similarity, recommendation.
//!
//! Each span carries the user ids and batch sizes of the operation via the
//! `tracing` crate.

/// Create a learning span for one profile update.
#[macro_export]
macro_rules! learning_span {
    ($user_id:expr, $experience_id:expr) => {
        tracing::info_span!("palate.learning", user_id = %$user_id, experience_id = %$experience_id)
    };
}

/// Create a similarity span for a one-to-many comparison.
#[macro_export]
macro_rules! similarity_span {
    ($user_id:expr, $candidate_count:expr) => {
        tracing::info_span!("palate.similarity", user_id = %$user_id, candidates = $candidate_count)
    };
}

/// Create a recommendation span for ranking a candidate set.
#[macro_export]
macro_rules! recommendation_span {
    ($user_id:expr, $candidate_count:expr) => {
        tracing::info_span!("palate.recommendation", user_id = %$user_id, candidates = $candidate_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LEARNING: &str = "palate.learning";
    pub const SIMILARITY: &str = "palate.similarity";
    pub const RECOMMENDATION: &str = "palate.recommendation";
}
