//! Emotional gradient descent: the palate moves toward what made the user
//! happy, not merely toward what they ate.

use palate_core::palate::PalateVector;

use crate::factors::UpdateFactors;

/// Apply one update step to every taste dimension independently.
///
/// ```text
/// new = clamp(0, 10, old + learningRate × (experience - old)
///                          × satisfactionGradient
///                          × emotionalWeight
///                          × contextualWeight)
/// ```
pub fn apply(current: &PalateVector, experience: &PalateVector, factors: &UpdateFactors) -> PalateVector {
    let step = factors.step();
    let old = current.values();
    let target = experience.values();
    // PalateVector::new clamps each dimension back into [0, 10].
    PalateVector::new(std::array::from_fn(|i| old[i] + step * (target[i] - old[i])))
}
