//! Default values for every config field.

// Learning
pub const DEFAULT_NOVICE_LEARNING_RATE: f64 = 0.30;
pub const DEFAULT_DEVELOPING_LEARNING_RATE: f64 = 0.20;
pub const DEFAULT_ESTABLISHED_LEARNING_RATE: f64 = 0.10;
pub const DEFAULT_EXPERT_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_MATRIX_DECAY: f64 = 0.95;
pub const DEFAULT_MAX_CONFIDENCE_BLEND: f64 = 0.1;
pub const DEFAULT_CONTEXT_FAMILIARITY_STEP: f64 = 0.1;
pub const DEFAULT_MIN_CONTEXTUAL_WEIGHT: f64 = 0.3;
pub const DEFAULT_NEUTRAL_CONTEXTUAL_WEIGHT: f64 = 0.5;

// Similarity
pub const DEFAULT_SIMILARITY_TASTE_WEIGHT: f64 = 0.40;
pub const DEFAULT_SIMILARITY_EMOTIONAL_WEIGHT: f64 = 0.30;
pub const DEFAULT_SIMILARITY_CONTEXT_WEIGHT: f64 = 0.20;
pub const DEFAULT_SIMILARITY_EVOLUTION_WEIGHT: f64 = 0.10;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.90;
pub const DEFAULT_MIN_MATCH_CONFIDENCE: f64 = 0.70;
pub const DEFAULT_EVOLUTION_WINDOW: usize = 10;
pub const DEFAULT_HIGH_SIMILARITY_BOOST: f64 = 1.2;
pub const DEFAULT_ONE_SIDED_HISTORY_ALIGNMENT: f64 = 0.3;

// Recommendation
pub const DEFAULT_RECOMMENDATION_TASTE_WEIGHT: f64 = 0.35;
pub const DEFAULT_RECOMMENDATION_EMOTIONAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_RECOMMENDATION_CONTEXT_WEIGHT: f64 = 0.20;
pub const DEFAULT_RECOMMENDATION_COLLABORATIVE_WEIGHT: f64 = 0.15;
pub const DEFAULT_RECOMMENDATION_NOVELTY_WEIGHT: f64 = 0.05;
pub const DEFAULT_MIN_TOTAL_SCORE: f64 = 0.5;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_CANDIDATE_POOL_FACTOR: usize = 2;
pub const DEFAULT_MAX_PER_CATEGORY: usize = 2;
pub const DEFAULT_STRONG_TASTE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_STRONG_EMOTIONAL_THRESHOLD: f64 = 0.7;
pub const DEFAULT_STRONG_CONTEXT_THRESHOLD: f64 = 0.8;
pub const DEFAULT_NEUTRAL_COLLABORATIVE_SCORE: f64 = 0.5;
pub const DEFAULT_NEUTRAL_CONTEXT_SCORE: f64 = 0.5;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
