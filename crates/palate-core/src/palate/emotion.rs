use std::fmt;

use serde::{Deserialize, Serialize};

use super::clamp_scale;
use crate::constants::{EMOTION_DIMENSIONS, SATISFACTION_WEIGHTS, SCALE_MAX};

/// One of the five affective dimensions recorded per experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionDimension {
    Satisfaction,
    Excitement,
    Comfort,
    Surprise,
    Nostalgia,
}

impl EmotionDimension {
    pub const ALL: [EmotionDimension; EMOTION_DIMENSIONS] = [
        Self::Satisfaction,
        Self::Excitement,
        Self::Comfort,
        Self::Surprise,
        Self::Nostalgia,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Weight of this dimension in the collapsed satisfaction figure.
    pub fn satisfaction_weight(self) -> f64 {
        SATISFACTION_WEIGHTS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Satisfaction => "satisfaction",
            Self::Excitement => "excitement",
            Self::Comfort => "comfort",
            Self::Surprise => "surprise",
            Self::Nostalgia => "nostalgia",
        }
    }
}

impl fmt::Display for EmotionDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a user felt about one experience. Every field is on the 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionalResponse {
    pub satisfaction: f64,
    pub excitement: f64,
    pub comfort: f64,
    pub surprise: f64,
    pub nostalgia: f64,
    pub overall_rating: f64,
    pub emotional_intensity: f64,
}

impl EmotionalResponse {
    /// Build a response, clamping every field to [0, 10].
    pub fn new(
        satisfaction: f64,
        excitement: f64,
        comfort: f64,
        surprise: f64,
        nostalgia: f64,
        overall_rating: f64,
        emotional_intensity: f64,
    ) -> Self {
        Self {
            satisfaction: clamp_scale(satisfaction),
            excitement: clamp_scale(excitement),
            comfort: clamp_scale(comfort),
            surprise: clamp_scale(surprise),
            nostalgia: clamp_scale(nostalgia),
            overall_rating: clamp_scale(overall_rating),
            emotional_intensity: clamp_scale(emotional_intensity),
        }
    }

    /// Every field, rating and intensity included, set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value, value, value)
    }

    pub fn get(&self, dimension: EmotionDimension) -> f64 {
        match dimension {
            EmotionDimension::Satisfaction => self.satisfaction,
            EmotionDimension::Excitement => self.excitement,
            EmotionDimension::Comfort => self.comfort,
            EmotionDimension::Surprise => self.surprise,
            EmotionDimension::Nostalgia => self.nostalgia,
        }
    }

    /// The five affective fields in [`EmotionDimension::ALL`] order, clamped.
    pub fn dimensions(&self) -> [f64; EMOTION_DIMENSIONS] {
        EmotionDimension::ALL.map(|d| clamp_scale(self.get(d)))
    }

    /// Weighted satisfaction on the 0–10 scale.
    pub fn weighted_satisfaction(&self) -> f64 {
        self.dimensions()
            .iter()
            .zip(SATISFACTION_WEIGHTS)
            .map(|(v, w)| v * w)
            .sum()
    }

    /// Population variance of the five affective fields.
    pub fn variance(&self) -> f64 {
        let dims = self.dimensions();
        let mean = dims.iter().sum::<f64>() / EMOTION_DIMENSIONS as f64;
        dims.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / EMOTION_DIMENSIONS as f64
    }

    /// Intensity on [0, 1].
    pub fn normalized_intensity(&self) -> f64 {
        clamp_scale(self.emotional_intensity) / SCALE_MAX
    }
}

impl Default for EmotionalResponse {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_weights_sum_to_one() {
        let sum: f64 = EmotionDimension::ALL
            .iter()
            .map(|d| d.satisfaction_weight())
            .sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_satisfaction_of_uniform_response_is_that_value() {
        let r = EmotionalResponse::uniform(7.0);
        assert!((r.weighted_satisfaction() - 7.0).abs() < 1e-9);
        assert_eq!(r.variance(), 0.0);
    }

    #[test]
    fn weighted_satisfaction_uses_fixed_weights() {
        let r = EmotionalResponse::new(9.0, 8.0, 8.0, 5.0, 5.0, 8.0, 8.0);
        // 0.35*9 + 0.25*8 + 0.20*8 + 0.15*5 + 0.05*5
        assert!((r.weighted_satisfaction() - 7.75).abs() < 1e-9);
    }

    #[test]
    fn variance_grows_with_scatter() {
        let coherent = EmotionalResponse::new(6.0, 6.0, 7.0, 6.0, 6.0, 6.0, 5.0);
        let scattered = EmotionalResponse::new(10.0, 0.0, 9.0, 1.0, 5.0, 6.0, 5.0);
        assert!(scattered.variance() > coherent.variance());
    }
}
