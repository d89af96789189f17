//! # palate-similarity
//!
//! Compares two palate profiles along four axes and gates matches on both
//! score and confidence.
//!
//! | Factor | Default weight |
//! |--------|----------------|
//! | Taste (cosine of palate vectors) | 0.40 |
//! | Emotional (preference matrix cells) | 0.30 |
//! | Context (learned context weights) | 0.20 |
//! | Evolution (recent change records) | 0.10 |

pub mod confidence;
pub mod engine;
pub mod factors;

pub use engine::{SimilarityBreakdown, SimilarityEngine};
pub use factors::taste::cosine_similarity;
