//! # palate-recommendation
//!
//! Scores candidate dishes for one user and ranks them with a category
//! diversity pass.
//!
//! | Factor | Default weight | Source |
//! |--------|----------------|--------|
//! | Taste | 0.35 | preference-weighted per-dimension alignment |
//! | Emotional | 0.25 | satisfaction predicted through the preference matrix |
//! | Context | 0.20 | exact matches against the current situation |
//! | Collaborative | 0.15 | [`ICollaborativeSignal`](palate_core::traits::ICollaborativeSignal) |
//! | Novelty | 0.05 | [`INoveltyScorer`](palate_core::traits::INoveltyScorer) |

pub mod diversity;
pub mod engine;
pub mod factors;
pub mod strategies;

pub use engine::RecommendationEngine;
pub use strategies::{MeanSimilaritySignal, PalateDistanceNovelty, TemplateReasoner};
