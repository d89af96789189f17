use crate::errors::PalateResult;
use crate::models::{FoodExperience, UserPalateProfile};

/// Produces the next profile from the latest profile and one new experience.
pub trait IProfileUpdater: Send + Sync {
    /// `None` initializes a fresh profile from the experience.
    fn update(
        &self,
        profile: Option<&UserPalateProfile>,
        experience: &FoodExperience,
    ) -> PalateResult<UserPalateProfile>;
}
