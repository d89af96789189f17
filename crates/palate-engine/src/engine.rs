//! PalateEngine: the facade over every palate subsystem.

use palate_core::config::PalateConfig;
use palate_core::errors::PalateResult;
use palate_core::models::{
    CandidateItem, FoodExperience, RecommendationScore, UserPalateProfile, UserSimilarity,
};
use palate_core::palate::Context;
use palate_core::traits::IProfileStore;
use palate_learning::ProfileUpdater;
use palate_recommendation::RecommendationEngine;
use palate_similarity::SimilarityEngine;
use palate_store::InMemoryProfileStore;
use tracing::{info, instrument};

pub struct PalateEngine {
    config: PalateConfig,
    store: InMemoryProfileStore,
    updater: ProfileUpdater,
    similarity: SimilarityEngine,
    recommender: RecommendationEngine,
}

impl PalateEngine {
    /// Validate `config` and build every subsystem from it, with an empty store.
    pub fn new(config: PalateConfig) -> PalateResult<Self> {
        Self::with_store(config, InMemoryProfileStore::new())
    }

    /// Like [`new`](Self::new), over an existing store.
    pub fn with_store(config: PalateConfig, store: InMemoryProfileStore) -> PalateResult<Self> {
        config.validate()?;
        info!(profiles = store.len(), "palate engine ready");
        Ok(Self {
            updater: ProfileUpdater::with_config(config.learning.clone()),
            similarity: SimilarityEngine::new(config.similarity.clone()),
            recommender: RecommendationEngine::new(config.recommendation.clone()),
            store,
            config,
        })
    }

    /// Parse a TOML config and build the engine.
    pub fn from_toml(source: &str) -> PalateResult<Self> {
        Self::new(PalateConfig::from_toml(source)?)
    }

    /// Install the global tracing subscriber from the observability section.
    /// Returns false when a subscriber was already installed.
    pub fn install_tracing(&self) -> bool {
        palate_observability::try_init_tracing(&self.config.observability)
    }

    pub fn config(&self) -> &PalateConfig {
        &self.config
    }

    pub fn store(&self) -> &InMemoryProfileStore {
        &self.store
    }

    pub fn updater(&self) -> &ProfileUpdater {
        &self.updater
    }

    pub fn similarity_engine(&self) -> &SimilarityEngine {
        &self.similarity
    }

    pub fn recommender(&self) -> &RecommendationEngine {
        &self.recommender
    }

    pub fn profile(&self, user_id: &str) -> PalateResult<Option<UserPalateProfile>> {
        self.store.load(user_id)
    }

    /// Learn from one experience and persist the result.
    pub fn record_experience(&self, experience: &FoodExperience) -> PalateResult<UserPalateProfile> {
        self.store.apply_experience(&self.updater, experience)
    }

    /// Learn from many experiences, parallel across users.
    #[instrument(skip_all, fields(experiences = experiences.len()))]
    pub fn record_batch(&self, experiences: &[FoodExperience]) -> PalateResult<Vec<UserPalateProfile>> {
        self.store.apply_batch(&self.updater, experiences)
    }

    /// Similarity of two stored profiles.
    #[instrument(skip(self))]
    pub fn similarity_between(
        &self,
        user_a: &str,
        user_b: &str,
        context_weight: f64,
    ) -> PalateResult<UserSimilarity> {
        let a = self.store.require_profile(user_a)?;
        let b = self.store.require_profile(user_b)?;
        Ok(self.similarity.similarity(&a, &b, context_weight))
    }

    /// Stored users that pass both similarity gates for `user_id`.
    #[instrument(skip(self))]
    pub fn similar_users(
        &self,
        user_id: &str,
        threshold: Option<f64>,
    ) -> PalateResult<Vec<UserSimilarity>> {
        let target = self.store.require_profile(user_id)?;
        let others = self.store.profiles();
        Ok(self.similarity.find_similar(&target, &others, threshold))
    }

    /// Rank `candidates` for a stored user, using that user's similar users
    /// as the collaborative signal.
    #[instrument(skip(self, candidates, current_context), fields(candidates = candidates.len()))]
    pub fn recommend_for(
        &self,
        user_id: &str,
        candidates: &[CandidateItem],
        current_context: &Context,
        max_n: Option<usize>,
    ) -> PalateResult<Vec<RecommendationScore>> {
        let profile = self.store.require_profile(user_id)?;
        let peers = self
            .similarity
            .find_similar(&profile, &self.store.profiles(), None);
        Ok(self
            .recommender
            .recommend(&profile, candidates, current_context, &peers, max_n))
    }
}
