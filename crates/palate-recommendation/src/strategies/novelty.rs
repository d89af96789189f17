use palate_core::constants::SCALE_MAX;
use palate_core::models::{CandidateItem, UserPalateProfile};
use palate_core::traits::INoveltyScorer;

/// Mean absolute per-dimension distance between the user's palate center and
/// the item, on [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct PalateDistanceNovelty;

impl INoveltyScorer for PalateDistanceNovelty {
    fn score(&self, profile: &UserPalateProfile, item: &CandidateItem) -> f64 {
        let l1 = profile.palate_vector.l1_distance(&item.palate_vector);
        let dimensions = profile.palate_vector.values().len() as f64;
        (l1 / dimensions / SCALE_MAX).min(1.0)
    }
}
