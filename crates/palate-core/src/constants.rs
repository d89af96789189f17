/// Palate engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of taste dimensions in a palate vector.
pub const TASTE_DIMENSIONS: usize = 11;

/// Number of emotional dimensions in an emotional response.
pub const EMOTION_DIMENSIONS: usize = 5;

/// Upper bound of every palate and emotional field.
pub const SCALE_MAX: f64 = 10.0;

/// Midpoint of the 0–10 scale, the neutral point of the satisfaction gradient.
pub const SCALE_MIDPOINT: f64 = 5.0;

/// Weights of satisfaction, excitement, comfort, surprise, nostalgia when
/// collapsing an emotional response into one satisfaction figure.
pub const SATISFACTION_WEIGHTS: [f64; EMOTION_DIMENSIONS] = [0.35, 0.25, 0.20, 0.15, 0.05];

/// Neutral prior for every cell of a fresh emotional preference matrix.
pub const NEUTRAL_MATRIX_PRIOR: f64 = 0.5;

/// Neutral reliability weight for an unseen context signature.
pub const NEUTRAL_CONTEXT_WEIGHT: f64 = 0.5;

/// Profile confidence ceiling (confidence_score is on a 0–100 scale).
pub const MAX_PROFILE_CONFIDENCE: f64 = 100.0;

/// Experience counts at which a profile graduates to the next maturity tier.
pub const DEVELOPING_THRESHOLD: u64 = 25;
pub const ESTABLISHED_THRESHOLD: u64 = 100;
pub const EXPERT_THRESHOLD: u64 = 500;

/// L1 change magnitudes used to tag an evolution record.
pub const SUDDEN_CHANGE_THRESHOLD: f64 = 5.0;
pub const GRADUAL_CHANGE_THRESHOLD: f64 = 2.0;
pub const CONTEXTUAL_CHANGE_THRESHOLD: f64 = 1.0;
