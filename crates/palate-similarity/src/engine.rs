//! SimilarityEngine: composite profile similarity and gated matching.

use palate_core::config::SimilarityConfig;
use palate_core::constants::NEUTRAL_CONTEXT_WEIGHT;
use palate_core::models::{UserPalateProfile, UserSimilarity};
use palate_core::palate::clamp_unit;
use palate_observability::similarity_span;
use rayon::prelude::*;
use tracing::debug;

use crate::confidence;
use crate::factors::{context, emotional, evolution, taste};

/// Every intermediate of one similarity computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityBreakdown {
    pub taste: f64,
    pub emotional: f64,
    pub context: f64,
    pub evolution: f64,
    /// Weighted sum scaled by the caller's context weight, in [0, 1].
    pub composite: f64,
    pub confidence: f64,
}

/// Stateless apart from configuration.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
}

impl SimilarityEngine {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Compute all four alignments, the composite and its confidence.
    pub fn similarity_breakdown(
        &self,
        a: &UserPalateProfile,
        b: &UserPalateProfile,
        context_weight: f64,
    ) -> SimilarityBreakdown {
        let w = &self.config.weights;

        let taste = taste::alignment(&a.palate_vector, &b.palate_vector);
        let emotional = emotional::alignment(
            &a.emotional_preference_matrix,
            &b.emotional_preference_matrix,
        );
        let context = context::alignment(
            &a.context_weights,
            &b.context_weights,
            NEUTRAL_CONTEXT_WEIGHT,
        );
        let evolution = evolution::alignment(
            &a.evolution_history,
            &b.evolution_history,
            self.config.evolution_window,
            self.config.one_sided_history_alignment,
        );

        let weighted = w.taste * taste
            + w.emotional * emotional
            + w.context * context
            + w.evolution * evolution;
        let composite = clamp_unit(weighted * context_weight);

        let confidence = confidence::calculate(
            a,
            b,
            composite,
            self.config.similarity_threshold,
            self.config.high_similarity_boost,
        );

        SimilarityBreakdown {
            taste,
            emotional,
            context,
            evolution,
            composite,
            confidence,
        }
    }

    /// Composite similarity of two profiles. `context_weight` scales the
    /// composite before clamping; pass 1.0 for no situational adjustment.
    pub fn similarity(
        &self,
        a: &UserPalateProfile,
        b: &UserPalateProfile,
        context_weight: f64,
    ) -> UserSimilarity {
        let breakdown = self.similarity_breakdown(a, b, context_weight);
        UserSimilarity {
            user_a: a.user_id.clone(),
            user_b: b.user_id.clone(),
            similarity_score: breakdown.composite,
            taste_alignment: breakdown.taste,
            emotional_alignment: breakdown.emotional,
            context_alignment: breakdown.context,
            confidence: breakdown.confidence,
        }
    }

    /// Candidates whose score reaches `threshold` (default: the configured
    /// similarity threshold) and whose confidence reaches the configured
    /// minimum, best first. The target itself is never returned.
    pub fn find_similar(
        &self,
        target: &UserPalateProfile,
        candidates: &[UserPalateProfile],
        threshold: Option<f64>,
    ) -> Vec<UserSimilarity> {
        let _span = similarity_span!(target.user_id, candidates.len()).entered();
        let threshold = threshold.unwrap_or(self.config.similarity_threshold);
        let min_confidence = self.config.min_confidence;

        let mut matches: Vec<UserSimilarity> = candidates
            .par_iter()
            .filter(|c| c.user_id != target.user_id)
            .map(|c| self.similarity(target, c, 1.0))
            .filter(|s| s.similarity_score >= threshold && s.confidence >= min_confidence)
            .collect();

        matches.sort_by(|x, y| {
            y.similarity_score
                .total_cmp(&x.similarity_score)
                .then_with(|| x.user_b.cmp(&y.user_b))
        });

        debug!(
            candidates = candidates.len(),
            matched = matches.len(),
            threshold,
            "similar users found"
        );
        matches
    }
}
