//! InMemoryProfileStore: concurrent per-user profile access via DashMap.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{debug, info};

use palate_core::errors::{PalateError, PalateResult, StoreError};
use palate_core::models::{FoodExperience, UserPalateProfile};
use palate_core::traits::{IProfileStore, IProfileUpdater};

/// Thread-safe profile store. Cloning shares the underlying map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<DashMap<String, UserPalateProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Cloned snapshot of every profile, ordered by user id.
    pub fn profiles(&self) -> Vec<UserPalateProfile> {
        let mut all: Vec<UserPalateProfile> =
            self.profiles.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        all
    }

    /// Load a profile that the caller expects to exist.
    pub fn require_profile(&self, user_id: &str) -> PalateResult<UserPalateProfile> {
        self.profiles
            .get(user_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| PalateError::MissingProfile {
                user_id: user_id.to_string(),
            })
    }

    /// Apply one experience to its user's profile, creating the profile on
    /// first sight. The entry stays locked from read to write.
    pub fn apply_experience(
        &self,
        updater: &dyn IProfileUpdater,
        experience: &FoodExperience,
    ) -> PalateResult<UserPalateProfile> {
        if experience.user_id.is_empty() {
            return Err(StoreError::EmptyUserId.into());
        }
        match self.profiles.entry(experience.user_id.clone()) {
            Entry::Occupied(mut slot) => {
                let next = updater.update(Some(slot.get()), experience)?;
                slot.insert(next.clone());
                Ok(next)
            }
            Entry::Vacant(slot) => {
                let first = updater.update(None, experience)?;
                debug!(user_id = %experience.user_id, "profile created");
                slot.insert(first.clone());
                Ok(first)
            }
        }
    }

    /// Apply many experiences. Experiences are grouped by user and applied in
    /// timestamp order within each user (stable for equal timestamps); users
    /// are processed in parallel. Returns the final profile of every touched
    /// user, ordered by user id.
    ///
    /// A user's stream stops at its first error and that error is returned.
    /// Updates already applied, for that user or others, are kept.
    pub fn apply_batch(
        &self,
        updater: &dyn IProfileUpdater,
        experiences: &[FoodExperience],
    ) -> PalateResult<Vec<UserPalateProfile>> {
        let mut by_user: BTreeMap<&str, Vec<&FoodExperience>> = BTreeMap::new();
        for experience in experiences {
            by_user
                .entry(experience.user_id.as_str())
                .or_default()
                .push(experience);
        }
        for stream in by_user.values_mut() {
            stream.sort_by_key(|e| e.timestamp);
        }

        let users = by_user.len();
        let finals: Vec<Option<UserPalateProfile>> = by_user
            .into_par_iter()
            .map(|(_, stream)| -> PalateResult<Option<UserPalateProfile>> {
                let mut current = None;
                for experience in stream {
                    current = Some(self.apply_experience(updater, experience)?);
                }
                Ok(current)
            })
            .collect::<PalateResult<_>>()?;

        info!(experiences = experiences.len(), users, "batch applied");
        Ok(finals.into_iter().flatten().collect())
    }

    /// Serialize every profile to a JSON array ordered by user id.
    pub fn snapshot(&self) -> PalateResult<String> {
        Ok(serde_json::to_string(&self.profiles())?)
    }

    /// Rebuild a store from [`snapshot`](Self::snapshot) output.
    pub fn restore(json: &str) -> PalateResult<Self> {
        let profiles: Vec<UserPalateProfile> = serde_json::from_str(json)?;
        let store = Self::new();
        for profile in profiles {
            if profile.user_id.is_empty() {
                return Err(StoreError::EmptyUserId.into());
            }
            if store.profiles.contains_key(&profile.user_id) {
                return Err(StoreError::DuplicateUser {
                    user_id: profile.user_id,
                }
                .into());
            }
            store.profiles.insert(profile.user_id.clone(), profile);
        }
        Ok(store)
    }
}

impl IProfileStore for InMemoryProfileStore {
    fn load(&self, user_id: &str) -> PalateResult<Option<UserPalateProfile>> {
        Ok(self.profiles.get(user_id).map(|r| r.value().clone()))
    }

    fn save(&self, profile: &UserPalateProfile) -> PalateResult<()> {
        if profile.user_id.is_empty() {
            return Err(StoreError::EmptyUserId.into());
        }
        self.profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    fn user_ids(&self) -> PalateResult<Vec<String>> {
        let mut ids: Vec<String> = self.profiles.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}
