// ============================================================================
// Iterative Algorithms
// Newton reciprocal, coupled Newton square root, powers of two
// ============================================================================
//
// Both iterations start from a double-precision estimate and double the
// working precision on every round, so early rounds only pay for the
// digits they can actually get right.

use super::dec_float::{DecFloat, MAX_EXP10, MIN_EXP10};
use super::errors::{NumericError, NumericResult};
use super::limbs::{self, LIMB_BASE, LIMB_DIGITS};
use super::registry;
use tracing::debug;

/// Digits a double estimate is trusted for (`f64` digits10 minus a few).
const SEED_DIGITS: u32 = 12;

/// Limbs read when extracting a double estimate.
const EXTRACT_LIMBS: usize = 3;

impl<const D: u32, const L: usize> DecFloat<D, L> {
    /// Working-precision schedule: 12, 24, 48, … while not above the total digit count.
    fn newton_schedule() -> impl Iterator<Item = u32> {
        std::iter::successors(Some(SEED_DIGITS), |&d| d.checked_mul(2))
            .take_while(|&d| d <= Self::TOTAL_DIGITS10)
    }

    // ========================================================================
    // Reciprocal
    // ========================================================================

    /// `1 / self`.
    ///
    /// Zero maps to infinity, infinity to zero, and NaN stays NaN.
    pub fn reciprocal(&self) -> Self {
        let mut out = *self;
        out.invert_in_place();
        out
    }

    fn invert_in_place(&mut self) {
        let neg = self.neg;
        self.neg = false;

        if self.is_zero() {
            *self = Self::INFINITY;
            self.neg = neg;
            return;
        }
        if self.is_nan() {
            return;
        }
        if self.is_infinite() {
            *self = Self::ZERO;
            return;
        }
        if self.is_one() {
            self.neg = neg;
            return;
        }

        let mut divisor = *self;
        let (mantissa, exponent) = divisor.extract_parts();
        *self = Self::from_mantissa_exponent(1.0 / mantissa, -exponent);

        for digits in Self::newton_schedule() {
            let working = (digits + 10) * 2;
            self.set_precision(working);
            divisor.set_precision(working);

            // x <- x * (2 - v * x)
            let mut t = *self;
            t.mul_in_place(&divisor);
            t.sub_in_place(&Self::TWO);
            t.negate();
            self.mul_in_place(&t);
        }

        self.neg = neg;
        self.active = L;
    }

    // ========================================================================
    // Square Root
    // ========================================================================

    /// Square root.
    ///
    /// Negative values and NaN produce NaN; `+inf` stays `+inf`.
    pub fn sqrt(&self) -> Self {
        if self.is_infinite() && !self.neg {
            return *self;
        }
        if self.neg || !self.is_finite() {
            debug!(value = %self, "sqrt argument outside domain");
            return Self::NAN;
        }
        if self.is_zero() || self.is_one() {
            return *self;
        }

        let x = *self;
        let (mut mantissa, mut exponent) = x.extract_parts();
        if exponent % 2 != 0 {
            exponent += 1;
            mantissa /= 10.0;
        }

        let root = mantissa.sqrt();
        let mut result = Self::from_mantissa_exponent(root, exponent / 2);
        // vi approximates 1 / (2 * result)
        let mut vi = Self::from_mantissa_exponent(0.5 / root, -exponent / 2);

        for digits in Self::newton_schedule() {
            let working = (digits + 10) * 2;
            result.set_precision(working);
            vi.set_precision(working);

            // vi <- vi + vi * (1 - 2 * result * vi)
            let mut t = result;
            t.mul_in_place(&vi);
            t.negate();
            t.mul_u64(2);
            t.add_in_place(&Self::ONE);
            t.mul_in_place(&vi);
            vi.add_in_place(&t);

            // result <- result + vi * (x - result^2)
            let mut t = result;
            t.mul_in_place(&result);
            t.negate();
            t.add_in_place(&x);
            t.mul_in_place(&vi);
            result.add_in_place(&t);
        }

        result.active = L;
        result
    }

    /// Square root, reporting a domain error instead of returning NaN.
    ///
    /// # Errors
    /// [`NumericError::DomainError`] for negative values and NaN.
    pub fn checked_sqrt(&self) -> NumericResult<Self> {
        if self.is_nan() || (self.neg && !self.is_zero()) {
            return Err(NumericError::DomainError);
        }
        Ok(self.sqrt())
    }

    // ========================================================================
    // Powers of Two
    // ========================================================================

    /// `2^p`.
    ///
    /// Exponents in `-127..=127` come from a table built once per precision;
    /// larger magnitudes use binary exponentiation, saturating to infinity
    /// (or zero for negative `p`).
    pub fn pow2(p: i64) -> Self {
        if let Some(v) = registry::special_values::<D, L>().pow2(p) {
            return v;
        }

        let mut magnitude = Self::ONE;
        let mut base = Self::TWO;
        let mut n = p.unsigned_abs();
        loop {
            if n & 1 == 1 {
                magnitude.mul_in_place(&base);
                if magnitude.is_infinite() {
                    break;
                }
            }
            n >>= 1;
            if n == 0 {
                break;
            }
            let square = base;
            base.mul_in_place(&square);
            if base.is_infinite() {
                magnitude = Self::INFINITY;
                break;
            }
        }

        if p < 0 {
            magnitude.reciprocal()
        } else {
            magnitude
        }
    }

    // ========================================================================
    // Double Estimates
    // ========================================================================

    /// Approximate `(mantissa, exponent)` with `1 <= |mantissa| < 10` and
    /// `self ≈ mantissa × 10^exponent`, read from the leading limbs.
    pub fn extract_parts(&self) -> (f64, i32) {
        let lead_digits = limbs::digit_count(self.data[0]);
        let exponent = self.exp + lead_digits - 1;
        let p10 = f64::from(limbs::POW10[(lead_digits - 1) as usize]);

        let mut mantissa = f64::from(self.data[0]);
        let mut scale = 1.0;
        for &limb in self.data.iter().take(EXTRACT_LIMBS.min(L)).skip(1) {
            scale /= f64::from(LIMB_BASE);
            mantissa += f64::from(limb) * scale;
        }
        mantissa /= p10;

        if self.neg {
            mantissa = -mantissa;
        }
        (mantissa, exponent)
    }

    /// Build `mantissa × 10^exponent` from a double, keeping about three limbs.
    ///
    /// Magnitudes beyond the exponent range saturate to infinity or zero.
    pub fn from_mantissa_exponent(mantissa: f64, exponent: i32) -> Self {
        if mantissa.is_nan() {
            return Self::NAN;
        }
        if mantissa.is_infinite() {
            return if mantissa < 0.0 {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            };
        }
        if mantissa.abs() < f64::MIN_POSITIVE * (1.0 + f64::EPSILON) {
            return Self::ZERO;
        }

        let neg = mantissa < 0.0;
        let mut d = mantissa.abs();
        let mut e = i64::from(exponent);
        while d >= 10.0 {
            d /= 10.0;
            e += 1;
        }
        while d < 1.0 {
            d *= 10.0;
            e -= 1;
        }

        // Align the exponent down to a limb boundary
        for _ in 0..e.rem_euclid(i64::from(LIMB_DIGITS)) {
            d *= 10.0;
            e -= 1;
        }

        if e > i64::from(MAX_EXP10) {
            return if neg {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            };
        }
        if e < i64::from(MIN_EXP10) {
            return Self::ZERO;
        }

        let mut out = Self::ZERO;
        for limb in out.data.iter_mut().take(EXTRACT_LIMBS) {
            let n = (d as u64).min(u64::from(LIMB_BASE - 1)) as u32;
            *limb = n;
            d = (d - f64::from(n)) * f64::from(LIMB_BASE);
        }
        out.exp = e as i32;
        out.neg = neg;
        out.saturate();
        out
    }

    /// Fold a value above `MAX` into infinity, keeping the sign.
    pub(crate) fn saturate(&mut self) {
        if self.is_finite() && self.exp >= MAX_EXP10 {
            let neg = self.neg;
            self.neg = false;
            if self.compare(&Self::MAX) == std::cmp::Ordering::Greater {
                *self = Self::INFINITY;
            }
            self.neg = neg;
        }
    }
}
