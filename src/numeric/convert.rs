// ============================================================================
// Conversions
// Native integers and floats, integer part, rust_decimal boundary
// ============================================================================

use super::dec_float::DecFloat;
use super::errors::{NumericError, NumericResult};
use super::limbs::{LIMB_BASE, LIMB_DIGITS};
use super::registry::{self, POW2_TABLE_LIMIT};
use crate::domain::FormatOptions;
use num_traits::Float;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Significant digits rendered when converting to `f64` (`digits10 + 3`).
const F64_RENDER_DIGITS: usize = 18;

/// Significant digits rendered when converting to `f32` (`digits10 + 3`).
const F32_RENDER_DIGITS: usize = 9;

/// Largest mantissa a `rust_decimal::Decimal` can hold (`2^96 - 1`).
const DECIMAL_MAX_MANTISSA: i128 = (1 << 96) - 1;

/// Largest `rust_decimal::Decimal` scale.
const DECIMAL_MAX_SCALE: i32 = 28;

impl<const D: u32, const L: usize> DecFloat<D, L> {
    // ========================================================================
    // From Native
    // ========================================================================

    /// Create from a 128-bit unsigned integer (exact).
    pub fn from_u128(value: u128) -> Self {
        if let Ok(small) = u64::try_from(value) {
            return Self::from_u64(small);
        }

        // u128 spans at most five limbs, and every precision has at least five
        let mut little = [0u32; 5];
        let mut count = 0;
        let mut rest = value;
        while rest != 0 {
            little[count] = (rest % u128::from(LIMB_BASE)) as u32;
            rest /= u128::from(LIMB_BASE);
            count += 1;
        }

        let mut out = Self::ZERO;
        for (dst, &src) in out.data.iter_mut().zip(little[..count].iter().rev()) {
            *dst = src;
        }
        out.exp = (count as i32 - 1) * LIMB_DIGITS;
        out
    }

    /// Create from a 128-bit signed integer (exact).
    pub fn from_i128(value: i128) -> Self {
        let mut out = Self::from_u128(value.unsigned_abs());
        if value < 0 {
            out.negate();
        }
        out
    }

    /// Create from a double.
    ///
    /// The binary mantissa is taken as an integer and scaled by powers of two,
    /// so every finite double converts exactly up to the limb capacity.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return if value < 0.0 {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            };
        }
        if value == 0.0 {
            return Self::ZERO;
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut out = Self::from_u64(mantissa);
        out.mul_pow2(i64::from(exponent));
        if sign < 0 {
            out.negate();
        }
        out
    }

    /// Create from a single-precision float (exact).
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// `self *= 2^e`, in table-sized steps.
    pub(crate) fn mul_pow2(&mut self, mut e: i64) {
        let table = registry::special_values::<D, L>();
        while e != 0 && self.is_finite() && !self.is_zero() {
            let step = e.clamp(-POW2_TABLE_LIMIT, POW2_TABLE_LIMIT);
            if let Some(factor) = table.pow2(step) {
                self.mul_in_place(&factor);
            }
            e -= step;
        }
    }

    // ========================================================================
    // To Native
    // ========================================================================

    /// Integer part, truncated toward zero. Non-finite values are returned as is.
    pub fn integer_part(&self) -> Self {
        if !self.is_finite() {
            return *self;
        }
        if self.exp < 0 {
            return Self::ZERO;
        }
        let mut out = *self;
        let first_fraction = (self.exp / LIMB_DIGITS) as usize + 1;
        if first_fraction < L {
            out.data[first_fraction..].fill(0);
        }
        out
    }

    /// Accumulate the integer limbs of a non-negative integral value.
    fn integral_limbs_to_u64(&self) -> u64 {
        let last = ((self.exp / LIMB_DIGITS) as usize).min(L - 1);
        self.data[1..=last].iter().fold(u64::from(self.data[0]), |acc, &limb| {
            acc.wrapping_mul(u64::from(LIMB_BASE)).wrapping_add(u64::from(limb))
        })
    }

    /// Truncate toward zero, saturating at the `i64` range. NaN maps to 0.
    pub fn to_i64(&self) -> i64 {
        if self.is_nan() || self.exp < 0 {
            return 0;
        }
        if !self.neg && self.compare(&Self::I64_MAX) == Ordering::Greater {
            return i64::MAX;
        }
        if self.neg && self.compare(&Self::I64_MIN) == Ordering::Less {
            return i64::MIN;
        }

        let magnitude = self.integer_part().abs().integral_limbs_to_u64();
        if self.neg {
            // magnitude may be 2^63
            -((magnitude - 1) as i64) - 1
        } else {
            magnitude as i64
        }
    }

    /// Truncate toward zero, saturating at the `u64` range. Negative values and NaN map to 0.
    pub fn to_u64(&self) -> u64 {
        if self.is_nan() || self.neg || self.exp < 0 {
            return 0;
        }
        let whole = self.integer_part();
        if whole.compare(&Self::U64_MAX) == Ordering::Greater {
            return u64::MAX;
        }
        whole.integral_limbs_to_u64()
    }

    /// Nearest double.
    ///
    /// Magnitudes below `f64::MIN_POSITIVE` flush to zero and magnitudes
    /// above `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return if self.neg {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        let bounds = registry::special_values::<D, L>();
        let magnitude = self.abs();
        if magnitude.is_zero() || magnitude.compare(&bounds.f64_min_positive) == Ordering::Less {
            return 0.0;
        }
        if magnitude.compare(&bounds.f64_max) == Ordering::Greater {
            return if self.neg {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        self.to_string_with(&FormatOptions::scientific(F64_RENDER_DIGITS))
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Nearest single-precision float, with the same flushing rules as [`Self::to_f64`].
    pub fn to_f32(&self) -> f32 {
        if !self.is_finite() {
            return self.to_f64() as f32;
        }

        let bounds = registry::special_values::<D, L>();
        let magnitude = self.abs();
        if magnitude.is_zero() || magnitude.compare(&bounds.f32_min_positive) == Ordering::Less {
            return 0.0;
        }
        if magnitude.compare(&bounds.f32_max) == Ordering::Greater {
            return if self.neg {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            };
        }

        self.to_string_with(&FormatOptions::scientific(F32_RENDER_DIGITS))
            .parse()
            .unwrap_or(f32::NAN)
    }

    // ========================================================================
    // rust_decimal Boundary
    // ========================================================================

    /// Convert from `rust_decimal::Decimal` (exact).
    pub fn from_decimal(d: Decimal) -> Self {
        let mut out = Self::from_i128(d.mantissa());
        out.scale_pow10(-i64::from(d.scale()));
        out
    }

    /// Convert to `rust_decimal::Decimal`, rounding to the 28-digit scale it can hold.
    ///
    /// # Errors
    /// - `NotFinite` for NaN and infinities
    /// - `Overflow` if the magnitude exceeds `Decimal::MAX`
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NotFinite);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let order = self.order();
        if order > DECIMAL_MAX_SCALE {
            return Err(NumericError::Overflow);
        }
        let scale = (DECIMAL_MAX_SCALE - 1 - order).clamp(0, DECIMAL_MAX_SCALE);

        let text = self
            .abs()
            .to_string_with(&FormatOptions::fixed(scale as usize));
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let mantissa: i128 = digits.parse().map_err(|_| NumericError::Overflow)?;
        if mantissa > DECIMAL_MAX_MANTISSA {
            return Err(NumericError::Overflow);
        }

        let signed = if self.neg { -mantissa } else { mantissa };
        Decimal::try_from_i128_with_scale(signed, scale as u32)
            .map(|d| d.normalize())
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// From Implementations
// ============================================================================

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<const D: u32, const L: usize> From<$t> for DecFloat<D, L> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl<const D: u32, const L: usize> From<$t> for DecFloat<D, L> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_i64(value as i64)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl<const D: u32, const L: usize> From<u128> for DecFloat<D, L> {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl<const D: u32, const L: usize> From<i128> for DecFloat<D, L> {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl<const D: u32, const L: usize> From<f64> for DecFloat<D, L> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl<const D: u32, const L: usize> From<f32> for DecFloat<D, L> {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl<const D: u32, const L: usize> From<Decimal> for DecFloat<D, L> {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}
