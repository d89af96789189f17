//! Default implementations of the pluggable recommendation signals.

mod collaborative;
mod novelty;
mod reasoning;

pub use collaborative::MeanSimilaritySignal;
pub use novelty::PalateDistanceNovelty;
pub use reasoning::TemplateReasoner;
