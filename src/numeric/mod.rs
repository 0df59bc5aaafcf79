// ============================================================================
// Numeric Module
// Arbitrary-precision decimal floating point with compile-time digit count
// ============================================================================
//
// This module provides:
// - DecFloat<D, L>: Radix-10^8 limb value with sign, exponent and class tag
// - Arithmetic, Newton reciprocal/sqrt, rounding and exponent helpers
// - Text parsing and formatting, native and Decimal conversions
// - A process-wide registry of computed constants per precision
//
// Design principles:
// - Values are Copy and never allocate
// - Overflow, underflow and division by zero fold into the value class
// - Fallible conversions and checked helpers return NumericResult

mod arithmetic;
mod convert;
mod dec_float;
mod errors;
mod format;
mod iterative;
mod layout;
mod limbs;
mod math;
mod num_traits_impl;
mod parse;
mod registry;
#[cfg(feature = "serde")]
mod serde_impl;

pub use dec_float::{
    limb_count, Dec100, Dec50, DecFloat, GUARD_LIMBS, MAX_EXP10, MIN_DIGITS10, MIN_EXP10,
};
pub use errors::{NumericError, NumericResult};
pub use limbs::{LIMB_BASE, LIMB_DIGITS, MAX_LIMBS};
pub use registry::{special_values, SpecialValues, POW2_TABLE_LIMIT};
