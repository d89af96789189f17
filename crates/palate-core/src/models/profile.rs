use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::PalateEvolution;
use crate::constants::{
    DEVELOPING_THRESHOLD, ESTABLISHED_THRESHOLD, EXPERT_THRESHOLD, MAX_PROFILE_CONFIDENCE,
};
use crate::palate::{EmotionalPreferenceMatrix, PalateVector};

/// Coarse reliability tier derived from how many experiences shaped a profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMaturity {
    #[default]
    Novice,
    Developing,
    Established,
    Expert,
}

impl ProfileMaturity {
    /// `>= 500` expert, `>= 100` established, `>= 25` developing, else novice.
    pub fn from_experiences(total: u64) -> Self {
        if total >= EXPERT_THRESHOLD {
            Self::Expert
        } else if total >= ESTABLISHED_THRESHOLD {
            Self::Established
        } else if total >= DEVELOPING_THRESHOLD {
            Self::Developing
        } else {
            Self::Novice
        }
    }

    /// Reliability weight used by similarity confidence.
    pub fn score(self) -> f64 {
        match self {
            Self::Novice => 0.4,
            Self::Developing => 0.6,
            Self::Established => 0.8,
            Self::Expert => 1.0,
        }
    }
}

impl fmt::Display for ProfileMaturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Novice => write!(f, "novice"),
            Self::Developing => write!(f, "developing"),
            Self::Established => write!(f, "established"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

/// Per-user aggregate taste state. Created on a user's first experience and
/// only ever advanced by the profile updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPalateProfile {
    pub user_id: String,
    /// The learned taste center.
    pub palate_vector: PalateVector,
    pub emotional_preference_matrix: EmotionalPreferenceMatrix,
    /// Familiarity of `"field:value"` context signatures, each in [0, 1].
    #[serde(default)]
    pub context_weights: BTreeMap<String, f64>,
    /// Append-only, oldest first.
    #[serde(default)]
    pub evolution_history: Vec<PalateEvolution>,
    /// Reliability of the profile itself, 0–100.
    pub confidence_score: f64,
    pub profile_maturity: ProfileMaturity,
    pub total_experiences: u64,
    pub last_updated: DateTime<Utc>,
}

impl UserPalateProfile {
    /// Maturity tier score, recomputed from the experience count.
    pub fn maturity_score(&self) -> f64 {
        ProfileMaturity::from_experiences(self.total_experiences).score()
    }

    /// Confidence on [0, 1].
    pub fn normalized_confidence(&self) -> f64 {
        (self.confidence_score / MAX_PROFILE_CONFIDENCE).clamp(0.0, 1.0)
    }

    /// The `n` most recent evolution records, most recent first.
    pub fn recent_evolution(&self, n: usize) -> impl Iterator<Item = &PalateEvolution> {
        self.evolution_history.iter().rev().take(n)
    }

    /// Familiarity of a context signature, or `None` if never seen.
    pub fn context_weight(&self, signature: &str) -> Option<f64> {
        self.context_weights.get(signature).copied()
    }
}
