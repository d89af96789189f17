use palate_core::config::RecommendationConfig;
use palate_core::models::RecommendationScore;
use palate_core::traits::IReasoner;

/// Picks one fixed sentence from which sub-scores clear their thresholds.
#[derive(Debug, Clone, Copy)]
pub struct TemplateReasoner {
    taste_threshold: f64,
    emotional_threshold: f64,
    context_threshold: f64,
}

impl TemplateReasoner {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            taste_threshold: config.strong_taste_threshold,
            emotional_threshold: config.strong_emotional_threshold,
            context_threshold: config.strong_context_threshold,
        }
    }
}

impl Default for TemplateReasoner {
    fn default() -> Self {
        Self::new(&RecommendationConfig::default())
    }
}

impl IReasoner for TemplateReasoner {
    fn explain(&self, score: &RecommendationScore) -> String {
        let taste = score.taste_score > self.taste_threshold;
        let emotional = score.emotional_score > self.emotional_threshold;
        let context = score.context_score > self.context_threshold;

        let text = match (taste, emotional, context) {
            (true, true, _) => "Matches your taste and dishes like it have made you happy",
            (true, false, _) => "Closely matches your taste preferences",
            (false, true, _) => "Similar flavors have left you satisfied before",
            (false, false, true) => "A good fit for your current situation",
            (false, false, false) => "Similar users enjoyed this",
        };
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(taste: f64, emotional: f64, context: f64) -> RecommendationScore {
        RecommendationScore {
            item_id: "i".into(),
            user_id: "u".into(),
            category: "thai".into(),
            total_score: 0.7,
            taste_score: taste,
            emotional_score: emotional,
            context_score: context,
            collaborative_score: 0.5,
            novelty_score: 0.1,
            confidence: 0.6,
            reasoning: String::new(),
        }
    }

    #[test]
    fn picks_template_by_threshold() {
        let r = TemplateReasoner::default();
        assert!(r.explain(&score(0.9, 0.8, 0.0)).contains("made you happy"));
        assert!(r.explain(&score(0.9, 0.2, 0.9)).contains("taste preferences"));
        assert!(r.explain(&score(0.5, 0.8, 0.0)).contains("satisfied"));
        assert!(r.explain(&score(0.5, 0.5, 1.0)).contains("current situation"));
        assert_eq!(r.explain(&score(0.5, 0.5, 0.5)), "Similar users enjoyed this");
    }

    #[test]
    fn thresholds_are_strict() {
        let r = TemplateReasoner::default();
        assert_eq!(r.explain(&score(0.8, 0.7, 0.8)), "Similar users enjoyed this");
    }
}
