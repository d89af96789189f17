use crate::errors::PalateResult;
use crate::models::UserPalateProfile;

/// Whole-profile persistence boundary. No partial-field updates.
pub trait IProfileStore: Send + Sync {
    fn load(&self, user_id: &str) -> PalateResult<Option<UserPalateProfile>>;
    fn save(&self, profile: &UserPalateProfile) -> PalateResult<()>;
    fn user_ids(&self) -> PalateResult<Vec<String>>;
}
