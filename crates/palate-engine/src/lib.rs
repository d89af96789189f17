//! # palate-engine
//!
//! One entry point wiring the profile store, the updater, the similarity
//! engine, and the recommender from a single [`PalateConfig`].

mod engine;

pub use engine::PalateEngine;
pub use palate_core::config::PalateConfig;
