use serde::{Deserialize, Serialize};

use super::{clamp_unit, EmotionDimension, TasteDimension};
use crate::constants::{EMOTION_DIMENSIONS, NEUTRAL_MATRIX_PRIOR, TASTE_DIMENSIONS};
use crate::errors::ModelError;

type Grid = [[f64; EMOTION_DIMENSIONS]; TASTE_DIMENSIONS];

/// Learned correlation between taste intensity (rows) and emotional
/// response (columns). 11×5, every cell in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct EmotionalPreferenceMatrix(Grid);

impl EmotionalPreferenceMatrix {
    /// A matrix with every cell at the neutral prior (0.5).
    pub fn neutral() -> Self {
        Self::filled(NEUTRAL_MATRIX_PRIOR)
    }

    pub fn filled(value: f64) -> Self {
        Self([[clamp_unit(value); EMOTION_DIMENSIONS]; TASTE_DIMENSIONS])
    }

    /// Build a matrix by evaluating `f` for every (taste, emotion) cell.
    pub fn from_fn(mut f: impl FnMut(TasteDimension, EmotionDimension) -> f64) -> Self {
        Self(TasteDimension::ALL.map(|t| EmotionDimension::ALL.map(|e| clamp_unit(f(t, e)))))
    }

    /// Build from nested rows; the shape must be exactly 11×5.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ModelError> {
        if rows.len() != TASTE_DIMENSIONS {
            return Err(ModelError::DimensionMismatch {
                what: "emotional preference matrix rows",
                expected: TASTE_DIMENSIONS,
                actual: rows.len(),
            });
        }
        let mut grid = [[0.0; EMOTION_DIMENSIONS]; TASTE_DIMENSIONS];
        for (target, row) in grid.iter_mut().zip(rows) {
            if row.len() != EMOTION_DIMENSIONS {
                return Err(ModelError::DimensionMismatch {
                    what: "emotional preference matrix columns",
                    expected: EMOTION_DIMENSIONS,
                    actual: row.len(),
                });
            }
            for (cell, &value) in target.iter_mut().zip(row) {
                *cell = clamp_unit(value);
            }
        }
        Ok(Self(grid))
    }

    pub fn get(&self, taste: TasteDimension, emotion: EmotionDimension) -> f64 {
        self.0[taste.index()][emotion.index()]
    }

    /// Bounds-checked positional access.
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.0.get(row).and_then(|r| r.get(column)).copied()
    }

    /// A copy with one cell replaced (clamped to [0, 1]).
    pub fn with(mut self, taste: TasteDimension, emotion: EmotionDimension, value: f64) -> Self {
        self.0[taste.index()][emotion.index()] = clamp_unit(value);
        self
    }

    pub fn rows(&self) -> &Grid {
        &self.0
    }

    /// All 55 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }
}

impl Default for EmotionalPreferenceMatrix {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TryFrom<Vec<Vec<f64>>> for EmotionalPreferenceMatrix {
    type Error = ModelError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<EmotionalPreferenceMatrix> for Vec<Vec<f64>> {
    fn from(m: EmotionalPreferenceMatrix) -> Self {
        m.0.iter().map(|row| row.to_vec()).collect()
    }
}
