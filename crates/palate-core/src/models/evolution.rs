use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{
    CONTEXTUAL_CHANGE_THRESHOLD, GRADUAL_CHANGE_THRESHOLD, SUDDEN_CHANGE_THRESHOLD,
    TASTE_DIMENSIONS,
};

/// How a palate shift is tagged, derived only from its L1 magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionKind {
    Sudden,
    Gradual,
    Contextual,
}

impl EvolutionKind {
    /// `> 5` sudden, `> 2` gradual, `> 1` contextual, otherwise gradual.
    pub fn classify(change_magnitude: f64) -> Self {
        if change_magnitude > SUDDEN_CHANGE_THRESHOLD {
            Self::Sudden
        } else if change_magnitude > GRADUAL_CHANGE_THRESHOLD {
            Self::Gradual
        } else if change_magnitude > CONTEXTUAL_CHANGE_THRESHOLD {
            Self::Contextual
        } else {
            Self::Gradual
        }
    }
}

/// One append-only audit entry of how a profile's palate moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalateEvolution {
    pub timestamp: DateTime<Utc>,
    /// Per-dimension `new - old`, in taste dimension order.
    pub deltas: [f64; TASTE_DIMENSIONS],
    pub experience_id: String,
    /// Sum of absolute deltas.
    pub change_magnitude: f64,
    pub kind: EvolutionKind,
}

impl PalateEvolution {
    pub fn new(
        deltas: [f64; TASTE_DIMENSIONS],
        experience_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let change_magnitude = deltas.iter().map(|d| d.abs()).sum();
        Self {
            timestamp,
            deltas,
            experience_id: experience_id.into(),
            change_magnitude,
            kind: EvolutionKind::classify(change_magnitude),
        }
    }
}
