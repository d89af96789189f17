use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clamp_scale;
use crate::constants::{SCALE_MAX, TASTE_DIMENSIONS};
use crate::errors::ModelError;

/// One of the 11 taste, texture, and temperature attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TasteDimension {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Umami,
    Spicy,
    Crunchy,
    Creamy,
    Chewy,
    Hot,
    Cold,
}

impl TasteDimension {
    /// Every dimension in storage order.
    pub const ALL: [TasteDimension; TASTE_DIMENSIONS] = [
        Self::Sweet,
        Self::Salty,
        Self::Sour,
        Self::Bitter,
        Self::Umami,
        Self::Spicy,
        Self::Crunchy,
        Self::Creamy,
        Self::Chewy,
        Self::Hot,
        Self::Cold,
    ];

    /// Position of this dimension in a palate vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sweet => "sweet",
            Self::Salty => "salty",
            Self::Sour => "sour",
            Self::Bitter => "bitter",
            Self::Umami => "umami",
            Self::Spicy => "spicy",
            Self::Crunchy => "crunchy",
            Self::Creamy => "creamy",
            Self::Chewy => "chewy",
            Self::Hot => "hot",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for TasteDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TasteDimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ModelError::UnknownDimension {
                kind: "taste",
                name: s.to_string(),
            })
    }
}

/// A dish's (or a user's aggregate) sensory profile.
///
/// Immutable: every field is clamped to [0, 10] on construction and
/// "modifying" methods return a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PalateValues", into = "PalateValues")]
pub struct PalateVector([f64; TASTE_DIMENSIONS]);

impl PalateVector {
    /// Build from values in [`TasteDimension::ALL`] order.
    pub fn new(values: [f64; TASTE_DIMENSIONS]) -> Self {
        Self(values.map(clamp_scale))
    }

    /// Every dimension set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self::new([value; TASTE_DIMENSIONS])
    }

    /// Build from a dynamically sized slice; the length must be exactly 11.
    pub fn from_slice(values: &[f64]) -> Result<Self, ModelError> {
        let array: [f64; TASTE_DIMENSIONS] =
            values
                .try_into()
                .map_err(|_| ModelError::DimensionMismatch {
                    what: "palate vector",
                    expected: TASTE_DIMENSIONS,
                    actual: values.len(),
                })?;
        Ok(Self::new(array))
    }

    /// A copy with one dimension replaced.
    pub fn with(mut self, dimension: TasteDimension, value: f64) -> Self {
        self.0[dimension.index()] = clamp_scale(value);
        self
    }

    pub fn get(&self, dimension: TasteDimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn values(&self) -> &[f64; TASTE_DIMENSIONS] {
        &self.0
    }

    /// Per-dimension `self - other`.
    pub fn delta(&self, other: &PalateVector) -> [f64; TASTE_DIMENSIONS] {
        std::array::from_fn(|i| self.0[i] - other.0[i])
    }

    /// Sum of absolute per-dimension differences.
    pub fn l1_distance(&self, other: &PalateVector) -> f64 {
        self.delta(other).iter().map(|d| d.abs()).sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Each value divided by 10, giving [0, 1] intensities.
    pub fn normalized(&self) -> [f64; TASTE_DIMENSIONS] {
        self.0.map(|v| v / SCALE_MAX)
    }

    /// The `n` strongest dimensions, strongest first. Ties keep storage order.
    pub fn dominant_dimensions(&self, n: usize) -> Vec<(TasteDimension, f64)> {
        let mut dims: Vec<(TasteDimension, f64)> = TasteDimension::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .collect();
        dims.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        dims.truncate(n);
        dims
    }
}

impl Default for PalateVector {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

/// Named-field wire form of a [`PalateVector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, rename = "PalateVector")]
pub struct PalateValues {
    pub sweet: f64,
    pub salty: f64,
    pub sour: f64,
    pub bitter: f64,
    pub umami: f64,
    pub spicy: f64,
    pub crunchy: f64,
    pub creamy: f64,
    pub chewy: f64,
    pub hot: f64,
    pub cold: f64,
}

impl From<PalateValues> for PalateVector {
    fn from(v: PalateValues) -> Self {
        Self::new([
            v.sweet, v.salty, v.sour, v.bitter, v.umami, v.spicy, v.crunchy, v.creamy, v.chewy,
            v.hot, v.cold,
        ])
    }
}

impl From<PalateVector> for PalateValues {
    fn from(p: PalateVector) -> Self {
        let [sweet, salty, sour, bitter, umami, spicy, crunchy, creamy, chewy, hot, cold] = p.0;
        Self {
            sweet,
            salty,
            sour,
            bitter,
            umami,
            spicy,
            crunchy,
            creamy,
            chewy,
            hot,
            cold,
        }
    }
}
