//! Seams between crates: the updater and store boundaries, and the
//! pluggable strategies behind the extension-point sub-scores.

mod profile_store;
mod profile_updater;
mod strategies;

pub use profile_store::IProfileStore;
pub use profile_updater::IProfileUpdater;
pub use strategies::{ICollaborativeSignal, IContextWeigher, INoveltyScorer, IReasoner};
