// ============================================================================
// Float Hooks Interface
// Standard floating-point functions a generic front end dispatches to
// ============================================================================

use crate::numeric::{DecFloat, NumericResult};
use std::num::FpCategory;

/// Rounding, exponent and classification hooks.
pub trait FloatHooks: Sized {
    fn floor(&self) -> Self;
    fn ceil(&self) -> Self;
    fn trunc(&self) -> Self;

    /// Fraction in `[0.5, 1)` and binary exponent.
    fn frexp(&self) -> NumericResult<(Self, i32)>;

    /// `self · 2^e`.
    fn ldexp(&self, e: i64) -> NumericResult<Self>;

    /// `self · radix^e`.
    fn scalbn(&self, e: i64) -> NumericResult<Self>;

    fn ilogb(&self) -> i32;
    fn fabs(&self) -> Self;
    fn fpclassify(&self) -> FpCategory;
    fn is_zero(&self) -> bool;
    fn sign(&self) -> i32;
    fn hash_value(&self) -> u64;
}

impl<const D: u32, const L: usize> FloatHooks for DecFloat<D, L> {
    fn floor(&self) -> Self {
        Self::floor(self)
    }

    fn ceil(&self) -> Self {
        Self::ceil(self)
    }

    fn trunc(&self) -> Self {
        Self::trunc(self)
    }

    fn frexp(&self) -> NumericResult<(Self, i32)> {
        Self::frexp(self)
    }

    fn ldexp(&self, e: i64) -> NumericResult<Self> {
        Self::ldexp(self, e)
    }

    fn scalbn(&self, e: i64) -> NumericResult<Self> {
        Self::scalbn(self, e)
    }

    fn ilogb(&self) -> i32 {
        Self::ilogb(self)
    }

    fn fabs(&self) -> Self {
        Self::fabs(self)
    }

    fn fpclassify(&self) -> FpCategory {
        self.classify()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn sign(&self) -> i32 {
        Self::sign(self)
    }

    fn hash_value(&self) -> u64 {
        Self::hash_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Dec50;

    /// Rebuild a value from its frexp parts using only the hooks.
    fn rebuild<F: FloatHooks>(x: &F) -> Option<F> {
        let (fraction, exponent) = x.frexp().ok()?;
        fraction.ldexp(i64::from(exponent)).ok()
    }

    #[test]
    fn test_frexp_ldexp_through_hooks() {
        let x: Dec50 = "-12.75".parse().unwrap();
        assert_eq!(rebuild(&x), Some(x));
    }

    #[test]
    fn test_dispatch_matches_inherent() {
        let x: Dec50 = "-2.5".parse().unwrap();
        assert_eq!(FloatHooks::floor(&x), x.floor());
        assert_eq!(FloatHooks::fabs(&x), x.abs());
        assert_eq!(FloatHooks::sign(&x), -1);
        assert_eq!(FloatHooks::fpclassify(&x), FpCategory::Normal);
        assert!(FloatHooks::is_zero(&Dec50::ZERO));
        assert_eq!(FloatHooks::hash_value(&x), x.hash_value());
        assert_eq!(FloatHooks::scalbn(&x, 1), Ok("-25".parse::<Dec50>().unwrap()));
    }
}
