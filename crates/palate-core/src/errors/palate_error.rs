use super::{ConfigError, ModelError, StoreError};

/// Convenience alias used across every palate crate.
pub type PalateResult<T> = Result<T, PalateError>;

/// Top-level error for the palate engine.
///
/// Numeric edge cases (zero vectors, empty histories, out-of-range values)
/// never surface here; they resolve to documented defaults. Only malformed
/// shapes and caller contract violations do.
#[derive(Debug, thiserror::Error)]
pub enum PalateError {
    #[error("model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("experience {experience_id} belongs to user {experience_user}, not profile owner {profile_user}")]
    UserMismatch {
        experience_id: String,
        experience_user: String,
        profile_user: String,
    },

    #[error("no palate profile for user {user_id}")]
    MissingProfile { user_id: String },
}
