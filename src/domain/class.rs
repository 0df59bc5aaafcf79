// ============================================================================
// Value Class
// Finite / infinite / NaN tag carried alongside sign and magnitude
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpretation of a decimal value.
///
/// The class fully determines how the limb store is read: infinite and NaN
/// values carry no meaningful limbs or exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FpClass {
    /// Ordinary value (including zero)
    #[default]
    Finite,
    /// Signed infinity
    Infinite,
    /// Not a number
    NaN,
}

impl FpClass {
    /// Stable small integer used when hashing the class.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        match self {
            FpClass::Finite => 0,
            FpClass::Infinite => 1,
            FpClass::NaN => 2,
        }
    }
}
