//! # palate-core
//!
//! Foundation crate for the palate engine.
//! Defines the taste and emotion value types, the per-user profile model,
//! score types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod palate;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PalateConfig;
pub use errors::{PalateError, PalateResult};
pub use models::{
    CandidateItem, EvolutionKind, FoodExperience, PalateEvolution, ProfileMaturity,
    RecommendationScore, UserPalateProfile, UserSimilarity,
};
pub use palate::{
    Context, ContextField, EmotionDimension, EmotionalPreferenceMatrix, EmotionalResponse,
    PalateVector, TasteDimension,
};
