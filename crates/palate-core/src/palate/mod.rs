//! Fixed-dimension value types: taste vectors, emotional responses, the
//! taste×emotion preference matrix, and situational context.

pub mod context;
pub mod emotion;
pub mod matrix;
pub mod vector;

pub use context::{Context, ContextField};
pub use emotion::{EmotionDimension, EmotionalResponse};
pub use matrix::EmotionalPreferenceMatrix;
pub use vector::{PalateValues, PalateVector, TasteDimension};

use crate::constants::SCALE_MAX;

/// Clamp to the 0–10 scale. Non-finite input collapses to 0.
pub fn clamp_scale(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, SCALE_MAX)
    } else {
        0.0
    }
}

/// Clamp to [0, 1]. Non-finite input collapses to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
