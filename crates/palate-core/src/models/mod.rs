mod evolution;
mod experience;
mod profile;
mod recommendation;
mod similarity;

pub use evolution::{EvolutionKind, PalateEvolution};
pub use experience::{CandidateItem, FoodExperience};
pub use profile::{ProfileMaturity, UserPalateProfile};
pub use recommendation::RecommendationScore;
pub use similarity::UserSimilarity;
