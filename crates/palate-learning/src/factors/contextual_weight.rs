use palate_core::config::LearningConfig;
use palate_core::models::UserPalateProfile;
use palate_core::palate::Context;
use palate_core::traits::IContextWeigher;

/// Familiarity of a signature the profile has never seen.
const UNSEEN_FAMILIARITY: f64 = 0.0;

/// Familiarity-based contextual weight.
///
/// Averages the profile's learned weight for every context signature of the
/// experience (unseen signatures count as 0) and maps the average onto
/// `[min, 1]`. A fully novel context lands on `min`; an experience with no
/// context gets the neutral weight.
#[derive(Debug, Clone)]
pub struct FamiliarityContextWeigher {
    min_weight: f64,
    neutral_weight: f64,
}

impl FamiliarityContextWeigher {
    pub fn new(config: &LearningConfig) -> Self {
        Self {
            min_weight: config.min_contextual_weight,
            neutral_weight: config.neutral_contextual_weight,
        }
    }
}

impl Default for FamiliarityContextWeigher {
    fn default() -> Self {
        Self::new(&LearningConfig::default())
    }
}

impl IContextWeigher for FamiliarityContextWeigher {
    fn weight(&self, profile: &UserPalateProfile, context: &Context) -> f64 {
        let signatures = context.signatures();
        if signatures.is_empty() {
            return self.neutral_weight;
        }
        let familiarity = signatures
            .iter()
            .map(|s| profile.context_weight(s).unwrap_or(UNSEEN_FAMILIARITY))
            .sum::<f64>()
            / signatures.len() as f64;
        (self.min_weight + (1.0 - self.min_weight) * familiarity).clamp(self.min_weight, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::palate::ContextField;
    use test_fixtures::builders::ProfileBuilder;

    #[test]
    fn no_context_is_neutral() {
        let profile = ProfileBuilder::new("u").build();
        let w = FamiliarityContextWeigher::default().weight(&profile, &Context::default());
        assert_eq!(w, 0.5);
    }

    #[test]
    fn novel_context_sits_on_the_floor() {
        let profile = ProfileBuilder::new("u").build();
        let ctx = Context::default().with(ContextField::Occasion, "wedding");
        let w = FamiliarityContextWeigher::default().weight(&profile, &ctx);
        assert!((w - 0.3).abs() < 1e-12, "w = {w}");
        assert!(w < 0.5);
    }

    #[test]
    fn familiar_context_climbs_toward_one() {
        let profile = ProfileBuilder::new("u")
            .context_weight("occasion:wedding", 1.0)
            .context_weight("time_of_day:dinner", 0.6)
            .build();
        let weigher = FamiliarityContextWeigher::default();
        let full = Context::default().with(ContextField::Occasion, "wedding");
        assert!((weigher.weight(&profile, &full) - 1.0).abs() < 1e-12);

        // mean(0.6, 0.0) = 0.3 -> 0.3 + 0.7 * 0.3
        let mixed = Context::default()
            .with(ContextField::TimeOfDay, "dinner")
            .with(ContextField::MoodBefore, "tired");
        assert!((weigher.weight(&profile, &mixed) - 0.51).abs() < 1e-12);
    }

    #[test]
    fn weight_stays_within_bounds() {
        let profile = ProfileBuilder::new("u")
            .context_weight("occasion:date", 1.0)
            .build();
        let weigher = FamiliarityContextWeigher::default();
        for field in ContextField::ALL {
            for value in ["date", "brunch", ""] {
                let w = weigher.weight(&profile, &Context::default().with(field, value));
                assert!((0.3..=1.0).contains(&w), "{field}={value}: {w}");
            }
        }
    }
}
