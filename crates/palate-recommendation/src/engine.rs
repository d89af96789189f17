//! RecommendationEngine: per-candidate scoring and diverse top-N ranking.

use palate_core::config::RecommendationConfig;
use palate_core::models::{CandidateItem, RecommendationScore, UserPalateProfile, UserSimilarity};
use palate_core::palate::{clamp_unit, Context};
use palate_core::traits::{ICollaborativeSignal, INoveltyScorer, IReasoner};
use palate_observability::recommendation_span;
use rayon::prelude::*;
use tracing::debug;

use crate::diversity;
use crate::factors::{context, emotional, taste};
use crate::strategies::{MeanSimilaritySignal, PalateDistanceNovelty, TemplateReasoner};

/// Scores candidates for one user and ranks them with a diversity pass.
pub struct RecommendationEngine {
    config: RecommendationConfig,
    collaborative: Box<dyn ICollaborativeSignal>,
    novelty: Box<dyn INoveltyScorer>,
    reasoner: Box<dyn IReasoner>,
}

impl RecommendationEngine {
    /// Create with the default strategies.
    pub fn new(config: RecommendationConfig) -> Self {
        Self {
            collaborative: Box::new(MeanSimilaritySignal::new(&config)),
            novelty: Box::new(PalateDistanceNovelty),
            reasoner: Box::new(TemplateReasoner::new(&config)),
            config,
        }
    }

    pub fn with_collaborative_signal(mut self, signal: Box<dyn ICollaborativeSignal>) -> Self {
        self.collaborative = signal;
        self
    }

    pub fn with_novelty_scorer(mut self, scorer: Box<dyn INoveltyScorer>) -> Self {
        self.novelty = scorer;
        self
    }

    pub fn with_reasoner(mut self, reasoner: Box<dyn IReasoner>) -> Self {
        self.reasoner = reasoner;
        self
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Score one candidate for one user in the current situation.
    pub fn score(
        &self,
        profile: &UserPalateProfile,
        item: &CandidateItem,
        current_context: &Context,
        similar_users: &[UserSimilarity],
    ) -> RecommendationScore {
        let w = &self.config.weights;

        let taste_score = taste::score(&profile.palate_vector, &item.palate_vector);
        let emotional_score =
            emotional::score(&profile.emotional_preference_matrix, &item.palate_vector);
        let context_score = context::score(
            &item.context,
            current_context,
            self.config.neutral_context_score,
        );
        let collaborative_score = clamp_unit(self.collaborative.score(profile, item, similar_users));
        let novelty_score = clamp_unit(self.novelty.score(profile, item));

        let total_score = clamp_unit(
            w.taste * taste_score
                + w.emotional * emotional_score
                + w.context * context_score
                + w.collaborative * collaborative_score
                + w.novelty * novelty_score,
        );

        let consistency = 1.0 - (taste_score - emotional_score).abs();
        let confidence = clamp_unit(
            (profile.normalized_confidence() + consistency + context_score) / 3.0,
        );

        let mut scored = RecommendationScore {
            item_id: item.id.clone(),
            user_id: profile.user_id.clone(),
            category: item.category(),
            total_score,
            taste_score,
            emotional_score,
            context_score,
            collaborative_score,
            novelty_score,
            confidence,
            reasoning: String::new(),
        };
        scored.reasoning = self.reasoner.explain(&scored);
        scored
    }

    /// Rank candidates for a user: score in parallel, drop weak candidates,
    /// keep the best `pool factor × max_n`, then pick at most `max_n` with
    /// at most `max_per_category` per cuisine. `max_n` defaults to the
    /// configured result count.
    pub fn recommend(
        &self,
        profile: &UserPalateProfile,
        candidates: &[CandidateItem],
        current_context: &Context,
        similar_users: &[UserSimilarity],
        max_n: Option<usize>,
    ) -> Vec<RecommendationScore> {
        let _span = recommendation_span!(profile.user_id, candidates.len()).entered();
        let max_n = max_n.unwrap_or(self.config.default_max_results);
        let min_total = self.config.min_total_score;

        let mut scored: Vec<RecommendationScore> = candidates
            .par_iter()
            .map(|item| self.score(profile, item, current_context, similar_users))
            .filter(|s| s.total_score >= min_total)
            .collect();
        let eligible = scored.len();

        diversity::rank(&mut scored);
        scored.truncate(max_n.saturating_mul(self.config.candidate_pool_factor));
        let picked = diversity::select(scored, max_n, self.config.max_per_category);

        debug!(
            candidates = candidates.len(),
            eligible,
            returned = picked.len(),
            max_n,
            "recommendations ranked"
        );
        picked
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}
