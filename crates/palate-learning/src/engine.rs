//! ProfileUpdater: implements IProfileUpdater, orchestrates one update.

use palate_core::config::LearningConfig;
use palate_core::constants::MAX_PROFILE_CONFIDENCE;
use palate_core::errors::{PalateError, PalateResult};
use palate_core::models::{FoodExperience, ProfileMaturity, UserPalateProfile};
use palate_core::palate::{clamp_unit, EmotionalPreferenceMatrix};
use palate_core::traits::{IContextWeigher, IProfileUpdater};
use palate_observability::learning_span;
use tracing::debug;

use crate::factors::{self, FamiliarityContextWeigher, UpdateFactors};
use crate::{context_memory, evolution, gradient, matrix};

/// The profile updater.
///
/// Orchestrates: factors → emotional gradient descent → matrix smoothing →
/// context reinforcement → evolution record → confidence and maturity.
/// Stateless apart from configuration; every call returns a new profile.
pub struct ProfileUpdater {
    config: LearningConfig,
    context_weigher: Box<dyn IContextWeigher>,
}

impl ProfileUpdater {
    /// Create an updater with default configuration.
    pub fn new() -> Self {
        Self::with_config(LearningConfig::default())
    }

    /// Create with explicit configuration and the familiarity context weigher.
    pub fn with_config(config: LearningConfig) -> Self {
        let context_weigher = Box::new(FamiliarityContextWeigher::new(&config));
        Self {
            config,
            context_weigher,
        }
    }

    /// Swap in a different contextual-weight strategy.
    pub fn with_context_weigher(mut self, context_weigher: Box<dyn IContextWeigher>) -> Self {
        self.context_weigher = context_weigher;
        self
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// Build a first profile from a user's first experience.
    pub fn initialize(&self, experience: &FoodExperience) -> UserPalateProfile {
        debug!(user_id = %experience.user_id, "initializing palate profile");
        UserPalateProfile {
            user_id: experience.user_id.clone(),
            palate_vector: experience.palate_vector,
            emotional_preference_matrix: EmotionalPreferenceMatrix::neutral(),
            context_weights: context_memory::reinforce(
                &Default::default(),
                &experience.context,
                self.config.context_familiarity_step,
            ),
            evolution_history: Vec::new(),
            confidence_score: clamp_unit(experience.confidence) * MAX_PROFILE_CONFIDENCE,
            profile_maturity: ProfileMaturity::Novice,
            total_experiences: 1,
            last_updated: experience.timestamp,
        }
    }

    /// Compute the factors that `update_existing` would apply, without applying them.
    pub fn factors(&self, profile: &UserPalateProfile, experience: &FoodExperience) -> UpdateFactors {
        factors::compute(profile, experience, &self.config, self.context_weigher.as_ref())
    }

    /// Advance an existing profile by one experience.
    pub fn update_existing(
        &self,
        profile: &UserPalateProfile,
        experience: &FoodExperience,
    ) -> PalateResult<UserPalateProfile> {
        if experience.user_id != profile.user_id {
            return Err(PalateError::UserMismatch {
                experience_id: experience.id.clone(),
                experience_user: experience.user_id.clone(),
                profile_user: profile.user_id.clone(),
            });
        }

        let _span = learning_span!(profile.user_id, experience.id).entered();

        let factors = self.factors(profile, experience);
        let palate_vector =
            gradient::apply(&profile.palate_vector, &experience.palate_vector, &factors);
        let emotional_preference_matrix = matrix::update(
            &profile.emotional_preference_matrix,
            &experience.palate_vector,
            &experience.emotional_response,
            self.config.matrix_decay,
        );
        let context_weights = context_memory::reinforce(
            &profile.context_weights,
            &experience.context,
            self.config.context_familiarity_step,
        );

        let record = evolution::record(
            &profile.palate_vector,
            &palate_vector,
            &experience.id,
            experience.timestamp,
        );
        let mut evolution_history = profile.evolution_history.clone();
        evolution_history.push(record);

        let confidence_score = evolution::blend_confidence(
            profile.confidence_score,
            experience.confidence,
            profile.total_experiences,
            self.config.max_confidence_blend,
        );
        let total_experiences = profile.total_experiences.saturating_add(1);
        let profile_maturity = ProfileMaturity::from_experiences(total_experiences);

        debug!(
            learning_rate = factors.learning_rate,
            emotional_weight = factors.emotional_weight,
            contextual_weight = factors.contextual_weight,
            satisfaction_gradient = factors.satisfaction_gradient,
            total_experiences,
            maturity = %profile_maturity,
            "palate profile updated"
        );

        Ok(UserPalateProfile {
            user_id: profile.user_id.clone(),
            palate_vector,
            emotional_preference_matrix,
            context_weights,
            evolution_history,
            confidence_score,
            profile_maturity,
            total_experiences,
            last_updated: experience.timestamp.max(profile.last_updated),
        })
    }

    /// Fold a chronological stream of one user's experiences into a profile.
    ///
    /// Returns `Ok(None)` only when `profile` is `None` and the stream is empty.
    pub fn replay<'a>(
        &self,
        profile: Option<UserPalateProfile>,
        experiences: impl IntoIterator<Item = &'a FoodExperience>,
    ) -> PalateResult<Option<UserPalateProfile>> {
        let mut current = profile;
        for experience in experiences {
            current = Some(self.update(current.as_ref(), experience)?);
        }
        Ok(current)
    }
}

impl Default for ProfileUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl IProfileUpdater for ProfileUpdater {
    fn update(
        &self,
        profile: Option<&UserPalateProfile>,
        experience: &FoodExperience,
    ) -> PalateResult<UserPalateProfile> {
        match profile {
            Some(existing) => self.update_existing(existing, experience),
            None => Ok(self.initialize(experience)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::palate::{EmotionalResponse, PalateVector, TasteDimension};
    use test_fixtures::builders::{ExperienceBuilder, ProfileBuilder};

    #[test]
    fn initialize_copies_the_experience_palate() {
        let updater = ProfileUpdater::new();
        let exp = ExperienceBuilder::new("alice")
            .palate(PalateVector::uniform(3.0).with(TasteDimension::Umami, 8.0))
            .confidence(0.8)
            .build();
        let profile = updater.update(None, &exp).unwrap();
        assert_eq!(profile.palate_vector, exp.palate_vector);
        assert_eq!(profile.total_experiences, 1);
        assert_eq!(profile.profile_maturity, ProfileMaturity::Novice);
        assert!((profile.confidence_score - 80.0).abs() < 1e-9);
        assert!(profile.emotional_preference_matrix.cells().all(|c| c == 0.5));
        assert!(profile.evolution_history.is_empty());
    }

    #[test]
    fn update_rejects_experience_of_another_user() {
        let updater = ProfileUpdater::new();
        let profile = ProfileBuilder::new("alice").build();
        let exp = ExperienceBuilder::new("bob").build();
        let err = updater.update(Some(&profile), &exp).unwrap_err();
        assert!(matches!(err, PalateError::UserMismatch { .. }));
    }

    #[test]
    fn happy_sweet_experience_moves_sweet_up() {
        let updater = ProfileUpdater::new();
        let profile = ProfileBuilder::new("alice")
            .palate(PalateVector::uniform(5.0))
            .confidence(50.0)
            .experiences(10)
            .build();
        let exp = ExperienceBuilder::new("alice")
            .palate(PalateVector::uniform(5.0).with(TasteDimension::Sweet, 9.0))
            .emotions(EmotionalResponse::new(9.0, 8.0, 8.0, 5.0, 5.0, 8.0, 8.0))
            .build();

        let next = updater.update(Some(&profile), &exp).unwrap();
        let sweet = next.palate_vector.get(TasteDimension::Sweet);
        assert!(sweet > 5.0 && sweet <= 10.0, "sweet = {sweet}");
        assert_eq!(next.palate_vector.get(TasteDimension::Salty), 5.0);
        assert_eq!(next.total_experiences, 11);
        assert_eq!(next.evolution_history.len(), 1);
        assert!(next.evolution_history[0].change_magnitude > 0.0);
    }

    #[test]
    fn maturity_is_recomputed_from_count() {
        let updater = ProfileUpdater::new();
        let profile = ProfileBuilder::new("alice").experiences(24).build();
        let next = updater
            .update(Some(&profile), &ExperienceBuilder::new("alice").build())
            .unwrap();
        assert_eq!(next.total_experiences, 25);
        assert_eq!(next.profile_maturity, ProfileMaturity::Developing);
    }

    #[test]
    fn replay_folds_a_stream() {
        let updater = ProfileUpdater::new();
        let stream: Vec<FoodExperience> = (0..5)
            .map(|_| ExperienceBuilder::new("alice").build())
            .collect();
        let profile = updater.replay(None, &stream).unwrap().unwrap();
        assert_eq!(profile.total_experiences, 5);
        assert_eq!(profile.evolution_history.len(), 4);
        assert!(updater.replay(None, std::iter::empty()).unwrap().is_none());
    }

    #[test]
    fn context_weights_learn_seen_situations() {
        use palate_core::palate::{Context, ContextField};
        let updater = ProfileUpdater::new();
        let ctx = Context::default().with(ContextField::SocialSetting, "friends");
        let exp = ExperienceBuilder::new("alice").context(ctx).build();
        let first = updater.update(None, &exp).unwrap();
        let second = updater.update(Some(&first), &exp).unwrap();
        let w1 = first.context_weight("social_setting:friends").unwrap();
        let w2 = second.context_weight("social_setting:friends").unwrap();
        assert!(w2 > w1);
    }

    #[test]
    fn novel_context_weighs_less_than_no_context() {
        use palate_core::palate::{Context, ContextField};
        let updater = ProfileUpdater::new();
        let seen = Context::default().with(ContextField::SocialSetting, "friends");
        let profile = updater.initialize(&ExperienceBuilder::new("alice").context(seen.clone()).build());

        let weight_for = |ctx: Context| {
            let exp = ExperienceBuilder::new("alice").context(ctx).build();
            updater.factors(&profile, &exp).contextual_weight
        };
        let familiar = weight_for(seen);
        let neutral = weight_for(Context::default());
        let novel = weight_for(Context::default().with(ContextField::Occasion, "wedding"));
        assert!((familiar - 0.685).abs() < 1e-9, "familiar = {familiar}");
        assert_eq!(neutral, 0.5);
        assert!((novel - 0.3).abs() < 1e-9, "novel = {novel}");
    }

    #[test]
    fn initialize_treats_nan_confidence_as_zero() {
        let updater = ProfileUpdater::new();
        let exp = ExperienceBuilder::new("alice").confidence(f64::NAN).build();
        let profile = updater.initialize(&exp);
        assert_eq!(profile.confidence_score, 0.0);
    }

    struct FixedWeigher(f64);

    impl IContextWeigher for FixedWeigher {
        fn weight(&self, _: &UserPalateProfile, _: &palate_core::palate::Context) -> f64 {
            self.0
        }
    }

    #[test]
    fn swapped_context_weigher_drives_the_factors() {
        let updater = ProfileUpdater::new().with_context_weigher(Box::new(FixedWeigher(0.9)));
        let profile = ProfileBuilder::new("alice").experiences(10).build();
        let exp = ExperienceBuilder::new("alice").build();
        let factors = updater.factors(&profile, &exp);
        assert_eq!(factors.contextual_weight, 0.9);

        let stock = ProfileUpdater::new().factors(&profile, &exp);
        assert_eq!(stock.contextual_weight, 0.5);
        assert_eq!(factors.learning_rate, stock.learning_rate);
        assert_eq!(factors.emotional_weight, stock.emotional_weight);
    }
}
