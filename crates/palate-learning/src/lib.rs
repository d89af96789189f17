//! # palate-learning
//!
//! Turns a stream of food experiences into an evolving palate profile.
//!
//! ## Update pipeline
//!
//! | Step | Output |
//! |------|--------|
//! | Factors | learning rate, emotional weight, contextual weight, satisfaction gradient |
//! | Gradient | palate vector moved toward (or away from) the experience |
//! | Matrix | emotional preference matrix smoothed toward the new correlation |
//! | Evolution | delta record appended to the history |
//! | Confidence | blended profile confidence, recomputed maturity |

pub mod context_memory;
pub mod engine;
pub mod evolution;
pub mod factors;
pub mod gradient;
pub mod matrix;

pub use engine::ProfileUpdater;
pub use factors::{FamiliarityContextWeigher, UpdateFactors};
