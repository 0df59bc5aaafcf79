// ============================================================================
// num-traits Integration
// ============================================================================

use super::dec_float::DecFloat;
use super::errors::NumericError;
use num_traits::{Bounded, FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

impl<const D: u32, const L: usize> Zero for DecFloat<D, L> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl<const D: u32, const L: usize> One for DecFloat<D, L> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        Self::is_one(self)
    }
}

impl<const D: u32, const L: usize> Num for DecFloat<D, L> {
    type FromStrRadixErr = NumericError;

    /// Only radix 10 is accepted.
    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(NumericError::InvalidInput);
        }
        text.parse()
    }
}

impl<const D: u32, const L: usize> Signed for DecFloat<D, L> {
    #[inline]
    fn abs(&self) -> Self {
        Self::abs(*self)
    }

    /// `max(self - other, 0)`.
    fn abs_sub(&self, other: &Self) -> Self {
        if self.compare(other) == Ordering::Greater {
            *self - *other
        } else {
            Self::ZERO
        }
    }

    fn signum(&self) -> Self {
        if self.is_nan() {
            Self::NAN
        } else if Self::is_zero(self) {
            Self::ZERO
        } else if self.neg {
            -Self::ONE
        } else {
            Self::ONE
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.neg && !self.is_nan() && !Self::is_zero(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Self::is_negative(self) && !Self::is_zero(self)
    }
}

impl<const D: u32, const L: usize> Bounded for DecFloat<D, L> {
    #[inline]
    fn min_value() -> Self {
        -Self::MAX
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const D: u32, const L: usize> FromPrimitive for DecFloat<D, L> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_i64(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_u64(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from_i128(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from_u128(n))
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from_f64(n))
    }
}

/// Checked conversions: `None` for NaN, infinities and integer parts outside
/// the target range.
impl<const D: u32, const L: usize> ToPrimitive for DecFloat<D, L> {
    fn to_i64(&self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }
        let whole = self.integer_part();
        if whole.compare(&Self::I64_MAX) == Ordering::Greater
            || whole.compare(&Self::I64_MIN) == Ordering::Less
        {
            return None;
        }
        Some(Self::to_i64(&whole))
    }

    fn to_u64(&self) -> Option<u64> {
        if !self.is_finite() {
            return None;
        }
        let whole = self.integer_part();
        if Self::is_zero(&whole) {
            return Some(0);
        }
        if whole.neg || whole.compare(&Self::U64_MAX) == Ordering::Greater {
            return None;
        }
        Some(Self::to_u64(&whole))
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(self))
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(Self::to_f32(self))
    }
}
