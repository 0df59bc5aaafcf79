// ============================================================================
// Floating-Point Helpers
// floor/ceil/trunc, frexp/ldexp/scalbn, classification and hashing
// ============================================================================

use super::dec_float::{DecFloat, MAX_EXP10, MIN_EXP10};
use super::errors::{NumericError, NumericResult};
use super::limbs::{self, LIMB_DIGITS};
use std::cmp::Ordering;
use std::num::FpCategory;
use tracing::debug;

/// Smallest binary exponent, `MIN_EXP10 · log2(10)` rounded toward zero.
const MIN_EXP2: i64 = MIN_EXP10 as i64 * 1000 / 301;

/// Shifts below this many bits use the scalar `u64` paths in [`DecFloat::ldexp`].
const SCALAR_SHIFT_BITS: i64 = 63;

/// `boost::hash_combine` mixing step.
#[inline]
fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

impl<const D: u32, const L: usize> DecFloat<D, L> {
    // ========================================================================
    // Rounding to Integers
    // ========================================================================

    /// Largest integer not above `self`. Non-finite values are returned as is.
    pub fn floor(&self) -> Self {
        if !self.is_finite() || self.is_integer() {
            if self.is_nan() {
                debug!("floor of NaN");
            }
            return *self;
        }
        let mut out = *self;
        if out.neg {
            out.sub_in_place(&Self::ONE);
        }
        out.integer_part()
    }

    /// Smallest integer not below `self`. Non-finite values are returned as is.
    pub fn ceil(&self) -> Self {
        if !self.is_finite() || self.is_integer() {
            if self.is_nan() {
                debug!("ceil of NaN");
            }
            return *self;
        }
        let mut out = *self;
        if !out.neg {
            out.add_in_place(&Self::ONE);
        }
        out.integer_part()
    }

    /// Integer part, truncated toward zero. Non-finite values are returned as is.
    pub fn trunc(&self) -> Self {
        if self.is_nan() {
            debug!("trunc of NaN");
        }
        self.integer_part()
    }

    /// [`Self::floor`], rejecting NaN.
    ///
    /// # Errors
    /// [`NumericError::DomainError`] for NaN.
    pub fn checked_floor(&self) -> NumericResult<Self> {
        self.reject_nan().map(|x| x.floor())
    }

    /// [`Self::ceil`], rejecting NaN.
    ///
    /// # Errors
    /// [`NumericError::DomainError`] for NaN.
    pub fn checked_ceil(&self) -> NumericResult<Self> {
        self.reject_nan().map(|x| x.ceil())
    }

    /// [`Self::trunc`], rejecting NaN.
    ///
    /// # Errors
    /// [`NumericError::DomainError`] for NaN.
    pub fn checked_trunc(&self) -> NumericResult<Self> {
        self.reject_nan().map(|x| x.trunc())
    }

    fn reject_nan(&self) -> NumericResult<&Self> {
        if self.is_nan() {
            Err(NumericError::DomainError)
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Exponent Manipulation
    // ========================================================================

    /// `self *= 10^e`, exact apart from saturation.
    pub fn scale_pow10(&mut self, e: i64) {
        if !self.is_finite() || self.is_zero() || e == 0 {
            return;
        }

        let limb_digits = i64::from(LIMB_DIGITS);
        let shifted = i64::from(self.exp).saturating_add(e.div_euclid(limb_digits) * limb_digits);
        if shifted > i64::from(MAX_EXP10) {
            let neg = self.neg;
            *self = Self::INFINITY;
            self.neg = neg;
            return;
        }
        if shifted < i64::from(MIN_EXP10) {
            *self = Self::ZERO;
            return;
        }

        self.exp = shifted as i32;
        let rem = e.rem_euclid(limb_digits) as usize;
        if rem != 0 {
            self.mul_u64(u64::from(limbs::POW10[rem]));
        }
        self.saturate();
    }

    /// Split into a fraction with magnitude in `[0.5, 1)` and a power of two.
    ///
    /// Zero, infinities and NaN are returned unchanged with exponent 0.
    ///
    /// # Errors
    /// [`NumericError::ExponentOutOfRange`] if the binary exponent does not fit `i32`.
    pub fn frexp(&self) -> NumericResult<(Self, i32)> {
        if self.is_zero() || !self.is_finite() {
            return Ok((*self, 0));
        }

        let mut result = self.abs();
        let mut t: i64 = 0;

        // Coarse scaling by log2(10) ≈ 1000/301 until the order is small
        while result.order().abs() > 5 {
            let mut step = i64::from(result.order()) * 1000 / 301;
            let mut scaled = result;
            scaled.mul_in_place(&Self::pow2(-step));
            if scaled.is_zero() || !scaled.is_finite() {
                step /= 2;
                scaled = result;
                scaled.mul_in_place(&Self::pow2(-step));
            }
            result = scaled;
            t += step;
        }

        while result.compare(&Self::ONE) != Ordering::Less {
            result.div_u64(2);
            t += 1;
        }
        while result.compare(&Self::HALF) == Ordering::Less {
            result.mul_u64(2);
            t -= 1;
        }

        let t = i32::try_from(t).map_err(|_| {
            debug!(exponent = t, "frexp exponent outside i32");
            NumericError::ExponentOutOfRange
        })?;
        if self.neg {
            result.negate();
        }
        Ok((result, t))
    }

    /// `self · 2^e`.
    ///
    /// # Errors
    /// [`NumericError::ExponentOutOfRange`] if `e` does not fit `i32`.
    pub fn ldexp(&self, e: i64) -> NumericResult<Self> {
        Self::check_exponent(e)?;

        let mut result = *self;
        if e > -SCALAR_SHIFT_BITS && e < 0 {
            result.div_u64(1u64 << -e);
        } else if e > 0 && e < SCALAR_SHIFT_BITS {
            result.mul_u64(1u64 << e);
        } else if e != 0 {
            if e < MIN_EXP2 / 2 && self.order() > 0 {
                // Split so the intermediate factor does not underflow
                let half = e / 2;
                let mut factor = Self::pow2(half);
                result.mul_in_place(&factor);
                if 2 * half != e {
                    factor.div_u64(2);
                }
                result.mul_in_place(&factor);
            } else {
                result.mul_in_place(&Self::pow2(e));
            }
        }
        Ok(result)
    }

    /// `self · 10^e`.
    ///
    /// # Errors
    /// [`NumericError::ExponentOutOfRange`] if `e` does not fit `i32`.
    pub fn scalbn(&self, e: i64) -> NumericResult<Self> {
        Self::check_exponent(e)?;
        let mut result = *self;
        result.scale_pow10(e);
        Ok(result)
    }

    fn check_exponent(e: i64) -> NumericResult<()> {
        if i32::try_from(e).is_err() {
            debug!(exponent = e, "scaling exponent outside i32");
            return Err(NumericError::ExponentOutOfRange);
        }
        Ok(())
    }

    /// Decimal exponent of the leading digit.
    ///
    /// Zero reports `i32::MIN`; infinities and NaN report `i32::MAX`.
    pub fn ilogb(&self) -> i32 {
        if self.is_zero() {
            i32::MIN
        } else if !self.is_finite() {
            i32::MAX
        } else {
            self.order()
        }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn fabs(&self) -> Self {
        self.abs()
    }

    /// Floating-point category. There are no subnormal values.
    pub fn classify(&self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_infinite() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else {
            FpCategory::Normal
        }
    }

    /// -1, 0 or 1. NaN reports 1.
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.neg {
            -1
        } else {
            1
        }
    }

    /// Stable hash over limbs, exponent, sign and class.
    pub fn hash_value(&self) -> u64 {
        let seed = self
            .data
            .iter()
            .fold(0u64, |seed, &limb| hash_combine(seed, u64::from(limb)));
        let seed = hash_combine(seed, self.exp as u32 as u64);
        let seed = hash_combine(seed, u64::from(self.neg));
        hash_combine(seed, u64::from(self.class.ordinal()))
    }
}
