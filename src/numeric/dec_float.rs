// ============================================================================
// Decimal Floating-Point Value
// Fixed-capacity radix-10^8 limb store with sign, exponent and class tag
// ============================================================================

use super::limbs::{self, LIMB_BASE, LIMB_DIGITS, MAX_LIMBS};
use crate::domain::FpClass;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest decimal exponent of a finite value's leading limb.
pub const MAX_EXP10: i32 = 1 << 26;

/// Smallest decimal exponent of a finite value's leading limb.
pub const MIN_EXP10: i32 = -MAX_EXP10;

/// Requested digit counts below this are raised to it.
pub const MIN_DIGITS10: u32 = 9;

/// Extra limbs kept beyond the requested precision.
pub const GUARD_LIMBS: usize = 3;

/// Limb count for a requested number of significant decimal digits.
///
/// `max(2, ceil(d / 8)) + 3` where `d` is the digit count raised to at least 9.
pub const fn limb_count(digits10: u32) -> usize {
    let digits = if digits10 < MIN_DIGITS10 {
        MIN_DIGITS10
    } else {
        digits10
    } as usize;
    let requested = (digits + LIMB_DIGITS as usize - 1) / LIMB_DIGITS as usize;
    let requested = if requested < 2 { 2 } else { requested };
    requested + GUARD_LIMBS
}

/// Arbitrary-precision decimal floating-point number.
///
/// The magnitude of a finite value is
/// `(limb[0] + limb[1]·10^-8 + limb[2]·10^-16 + …) × 10^exponent`,
/// where every limb is below `10^8` and the exponent is a multiple of 8.
/// A non-zero finite value always has a non-zero leading limb.
///
/// # Type Parameters
/// - `DIGITS10`: Requested significant decimal digits (raised to at least 9)
/// - `LIMBS`: Limb capacity, which must equal `limb_count(DIGITS10)`
///
/// Use the [`Dec50`] / [`Dec100`] aliases or spell other precisions as
/// `DecFloat<D, { limb_count(D) }>`.
///
/// # Example
/// ```ignore
/// use dec_float::numeric::Dec50;
///
/// let third = Dec50::ONE / Dec50::from(3u64);
/// assert_eq!(format!("{:.5}", third), "0.33333");
/// ```
#[derive(Clone, Copy)]
pub struct DecFloat<const DIGITS10: u32, const LIMBS: usize> {
    pub(crate) data: [u32; LIMBS],
    pub(crate) exp: i32,
    pub(crate) neg: bool,
    pub(crate) class: FpClass,
    pub(crate) active: usize,
}

/// 50 significant digits
pub type Dec50 = DecFloat<50, { limb_count(50) }>;

/// 100 significant digits
pub type Dec100 = DecFloat<100, { limb_count(100) }>;

// ============================================================================
// Constants
// ============================================================================

impl<const D: u32, const L: usize> DecFloat<D, L> {
    const LAYOUT_CHECK: () = assert!(
        L == limb_count(D) && L < MAX_LIMBS,
        "LIMBS must equal limb_count(DIGITS10) and stay below 1800"
    );

    /// Significant decimal digits guaranteed by this type
    pub const DIGITS10: u32 = if D < MIN_DIGITS10 { MIN_DIGITS10 } else { D };

    /// Decimal digits held by the whole limb store, guard limbs included
    pub const TOTAL_DIGITS10: u32 = (L as u32) * (LIMB_DIGITS as u32);

    /// Zero
    pub const ZERO: Self = Self::from_leading_limb(0, 0);

    /// One (1.0)
    pub const ONE: Self = Self::from_leading_limb(1, 0);

    /// Two (2.0)
    pub const TWO: Self = Self::from_leading_limb(2, 0);

    /// One half (0.5)
    pub const HALF: Self = Self::from_leading_limb(50_000_000, -LIMB_DIGITS);

    /// Quiet NaN
    pub const NAN: Self = Self {
        class: FpClass::NaN,
        ..Self::ZERO
    };

    /// Positive infinity
    pub const INFINITY: Self = Self {
        class: FpClass::Infinite,
        ..Self::ZERO
    };

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self {
        class: FpClass::Infinite,
        neg: true,
        ..Self::ZERO
    };

    /// Largest finite magnitude, `10^MAX_EXP10`
    pub const MAX: Self = Self::from_leading_limb(1, MAX_EXP10);

    /// Smallest non-zero magnitude, `10^MIN_EXP10`
    pub const MIN: Self = Self::from_leading_limb(1, MIN_EXP10);

    /// Difference between one and the next value at `DIGITS10` digits, `10^(1 - DIGITS10)`
    pub const EPSILON: Self = Self::pow10_const(1 - Self::DIGITS10 as i32);

    pub(crate) const I64_MAX: Self = Self::from_u64(i64::MAX as u64);
    pub(crate) const I64_MIN: Self = Self::from_u64(1 << 63).negated_const();
    pub(crate) const U64_MAX: Self = Self::from_u64(u64::MAX);

    const fn from_leading_limb(limb: u32, exp: i32) -> Self {
        let () = Self::LAYOUT_CHECK;
        let mut data = [0u32; L];
        data[0] = limb;
        Self {
            data,
            exp,
            neg: false,
            class: FpClass::Finite,
            active: L,
        }
    }

    /// Exact `10^e`.
    const fn pow10_const(e: i32) -> Self {
        let exp = e.div_euclid(LIMB_DIGITS) * LIMB_DIGITS;
        Self::from_leading_limb(limbs::POW10[(e - exp) as usize], exp)
    }

    const fn negated_const(mut self) -> Self {
        self.neg = true;
        self
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unsigned integer (exact).
    pub const fn from_u64(value: u64) -> Self {
        let mut out = Self::ZERO;
        if value == 0 {
            return out;
        }

        // u64 spans at most three limbs
        let mut little = [0u32; 3];
        let mut count = 0;
        let mut rest = value;
        while rest != 0 {
            little[count] = (rest % LIMB_BASE as u64) as u32;
            rest /= LIMB_BASE as u64;
            count += 1;
        }

        let mut i = 0;
        while i < count {
            out.data[i] = little[count - 1 - i];
            i += 1;
        }
        out.exp = (count as i32 - 1) * LIMB_DIGITS;
        out
    }

    /// Create from a signed integer (exact).
    pub const fn from_i64(value: i64) -> Self {
        let out = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            out.negated_const()
        } else {
            out
        }
    }

    /// Create from raw parts.
    ///
    /// Returns `None` if a limb is `>= 10^8`, the exponent is not a multiple
    /// of 8 or lies outside `[MIN_EXP10, MAX_EXP10]`, the magnitude exceeds
    /// `MAX`, or a non-zero value has a zero leading limb.
    pub fn from_parts(limbs: [u32; L], exponent: i32, negative: bool) -> Option<Self> {
        if limbs.iter().any(|&l| l >= LIMB_BASE)
            || exponent % LIMB_DIGITS != 0
            || !(MIN_EXP10..=MAX_EXP10).contains(&exponent)
        {
            return None;
        }
        if limbs[0] == 0 {
            return limbs.iter().all(|&l| l == 0).then_some(Self::ZERO);
        }
        let value = Self {
            data: limbs,
            exp: exponent,
            neg: false,
            ..Self::ZERO
        };
        if value.compare(&Self::MAX) == Ordering::Greater {
            return None;
        }
        Some(Self { neg: negative, ..value })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Limb store, most significant limb first.
    #[inline]
    pub fn limbs(&self) -> &[u32; L] {
        &self.data
    }

    /// Decimal exponent of the leading limb (always a multiple of 8).
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exp
    }

    /// Value class.
    #[inline]
    pub const fn class(&self) -> FpClass {
        self.class
    }

    /// Number of limbs currently treated as significant.
    #[inline]
    pub const fn active_limbs(&self) -> usize {
        self.active
    }

    /// Decimal exponent of the leading digit: `⌊log10 |x|⌋` for finite non-zero values.
    ///
    /// Zero and non-finite values report 0.
    #[inline]
    pub fn order(&self) -> i32 {
        if !self.is_finite() || self.data[0] == 0 {
            return 0;
        }
        self.exp + limbs::digit_count(self.data[0]) - 1
    }

    // ========================================================================
    // Precision Cursor
    // ========================================================================

    /// Restrict subsequent multiplications to roughly `digits` significant digits.
    pub fn set_precision(&mut self, digits: u32) {
        self.active = if digits >= Self::TOTAL_DIGITS10 {
            L
        } else {
            let per = LIMB_DIGITS as u32;
            let elems = (digits + per / 2) / per + u32::from(digits % per != 0);
            (elems as usize).clamp(2, L)
        };
    }

    /// Precision currently in effect, in decimal digits.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.active as u32 * LIMB_DIGITS as u32
    }

    /// Copy with the precision cursor restored to the full limb count.
    #[inline]
    pub fn with_full_precision(mut self) -> Self {
        self.active = L;
        self
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True for the finite value zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.class == FpClass::Finite && self.data[0] == 0
    }

    /// True for exactly one, or for `0.99999999…` filling every limb.
    pub fn is_one(&self) -> bool {
        if self.neg || self.class != FpClass::Finite {
            return false;
        }
        if self.data[0] == 1 && self.exp == 0 {
            return self.data[1..].iter().all(|&l| l == 0);
        }
        self.exp == -LIMB_DIGITS && self.data.iter().all(|&l| l == LIMB_BASE - 1)
    }

    /// True for finite values with no fractional digits.
    pub fn is_integer(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        if self.exp < 0 {
            return false;
        }
        let first_fraction = (self.exp / LIMB_DIGITS) as usize + 1;
        first_fraction >= L || self.data[first_fraction..].iter().all(|&l| l == 0)
    }

    /// True if the sign flag is set (never for zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.neg
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.class == FpClass::NaN
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.class == FpClass::Infinite
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.class == FpClass::Finite
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Flip the sign in place. Zero and NaN stay unsigned.
    #[inline]
    pub fn negate(&mut self) {
        if !self.is_zero() && !self.is_nan() {
            self.neg = !self.neg;
        }
    }

    /// Absolute value.
    #[inline]
    pub fn abs(mut self) -> Self {
        self.neg = false;
        self
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison.
    ///
    /// A NaN operand yields `Greater` when `self` is NaN and `Less` otherwise;
    /// that result carries no numeric meaning.
    pub fn compare(&self, other: &Self) -> Ordering {
        if !self.is_finite() || !other.is_finite() {
            if self.is_nan() || other.is_nan() {
                return if self.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            if self.is_infinite() && other.is_infinite() {
                return match (self.neg, other.neg) {
                    (a, b) if a == b => Ordering::Equal,
                    (true, _) => Ordering::Less,
                    (false, _) => Ordering::Greater,
                };
            }
            if self.is_infinite() {
                return if self.neg {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            return if other.neg {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        if self.is_zero() {
            if other.is_zero() {
                return Ordering::Equal;
            }
            return if other.neg {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        if other.is_zero() {
            return if self.neg {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if self.neg != other.neg {
            return if self.neg {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let magnitude = self
            .exp
            .cmp(&other.exp)
            .then_with(|| limbs::compare(&self.data, &other.data));
        if self.neg {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    /// Compare limb stores only, ignoring sign, exponent and class.
    #[inline]
    pub(crate) fn compare_limbs(&self, other: &Self) -> Ordering {
        limbs::compare(&self.data, &other.data)
    }

    /// Returns the smaller of two values (NaN loses).
    pub fn min(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            Some(_) => self,
            None if self.is_nan() => other,
            None => self,
        }
    }

    /// Returns the larger of two values (NaN loses).
    pub fn max(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => other,
            Some(_) => self,
            None if self.is_nan() => other,
            None => self,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u32, const L: usize> Default for DecFloat<D, L> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u32, const L: usize> PartialEq for DecFloat<D, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.compare(other) == Ordering::Equal
    }
}

impl<const D: u32, const L: usize> PartialOrd for DecFloat<D, L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.compare(other))
        }
    }
}

impl<const D: u32, const L: usize> Hash for DecFloat<D, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.ordinal().hash(state);
        match self.class {
            FpClass::Finite if self.is_zero() => {},
            FpClass::Finite => {
                self.neg.hash(state);
                self.exp.hash(state);
                self.data.hash(state);
            },
            FpClass::Infinite => self.neg.hash(state),
            FpClass::NaN => {},
        }
    }
}

// ============================================================================
// Debug
// ============================================================================

impl<const D: u32, const L: usize> fmt::Debug for DecFloat<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecFloat<{}>({}, exp={}, limbs={:?})",
            Self::DIGITS10,
            self,
            self.exp,
            &self.data[..]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    type Dec9 = DecFloat<9, { limb_count(9) }>;

    fn hash_of(x: &Dec50) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_limb_count() {
        assert_eq!(limb_count(0), 5);
        assert_eq!(limb_count(9), 5);
        assert_eq!(limb_count(16), 5);
        assert_eq!(limb_count(17), 6);
        assert_eq!(limb_count(50), 10);
        assert_eq!(limb_count(100), 16);
    }

    #[test]
    fn test_digit_constants() {
        assert_eq!(Dec9::DIGITS10, 9);
        assert_eq!(Dec9::TOTAL_DIGITS10, 40);
        assert_eq!(Dec50::DIGITS10, 50);
        assert_eq!(Dec50::TOTAL_DIGITS10, 80);
        assert_eq!(Dec100::TOTAL_DIGITS10, 128);
    }

    #[test]
    fn test_special_constants() {
        assert!(Dec50::ZERO.is_zero());
        assert!(Dec50::ONE.is_one());
        assert!(Dec50::NAN.is_nan());
        assert!(Dec50::INFINITY.is_infinite());
        assert!(Dec50::NEG_INFINITY.is_negative());
        assert_eq!(Dec50::HALF.limbs()[0], 50_000_000);
        assert_eq!(Dec50::HALF.exponent(), -8);
        assert_eq!(Dec50::MAX.exponent(), MAX_EXP10);
        assert_eq!(Dec50::MIN.exponent(), MIN_EXP10);
        assert!(!Dec50::MIN.is_zero());
    }

    #[test]
    fn test_epsilon_is_power_of_ten() {
        // 10^-49 = 10 * 10^-56
        assert_eq!(Dec50::EPSILON.exponent(), -56);
        assert_eq!(Dec50::EPSILON.limbs()[0], 10_000_000);
        assert_eq!(Dec50::EPSILON.order(), -49);
        assert_eq!(Dec9::EPSILON.order(), -8);
    }

    #[test]
    fn test_from_u64_layout() {
        let x = Dec50::from_u64(12_345_678_901_234_567_890);
        assert_eq!(&x.limbs()[..3], &[1234, 56_789_012, 34_567_890]);
        assert_eq!(x.exponent(), 16);
        assert_eq!(x.order(), 19);

        let small = Dec50::from_u64(7);
        assert_eq!(small.limbs()[0], 7);
        assert_eq!(small.exponent(), 0);
        assert!(Dec50::from_u64(0).is_zero());
    }

    #[test]
    fn test_from_i64() {
        let x = Dec50::from_i64(-42);
        assert!(x.is_negative());
        assert_eq!(x.limbs()[0], 42);
        assert_eq!(Dec50::from_i64(i64::MIN), Dec50::I64_MIN);
    }

    #[test]
    fn test_from_parts_validation() {
        let mut limbs = [0u32; 10];
        limbs[0] = 3;
        assert!(Dec50::from_parts(limbs, 8, false).is_some());
        assert!(Dec50::from_parts(limbs, 7, false).is_none());
        limbs[1] = LIMB_BASE;
        assert!(Dec50::from_parts(limbs, 0, false).is_none());
        assert_eq!(Dec50::from_parts([0; 10], 0, true), Some(Dec50::ZERO));
    }

    #[test]
    fn test_from_parts_rejects_out_of_range() {
        let mut limbs = [0u32; 10];
        limbs[0] = 1;
        assert_eq!(Dec50::from_parts(limbs, MAX_EXP10, false), Some(Dec50::MAX));
        assert_eq!(Dec50::from_parts(limbs, MIN_EXP10, true), Some(-Dec50::MIN));
        assert!(Dec50::from_parts(limbs, MAX_EXP10 + 8, false).is_none());
        assert!(Dec50::from_parts(limbs, MIN_EXP10 - 8, false).is_none());

        limbs[9] = 1;
        assert!(Dec50::from_parts(limbs, MAX_EXP10, false).is_none());
        assert!(Dec50::from_parts(limbs, MAX_EXP10, true).is_none());
    }

    #[test]
    fn test_is_one_variants() {
        assert!(Dec50::ONE.is_one());
        assert!(!Dec50::TWO.is_one());
        assert!(!Dec50::from_i64(-1).is_one());

        let nines = Dec50::from_parts([LIMB_BASE - 1; 10], -8, false);
        assert!(nines.is_some_and(|x| x.is_one()));

        let mut limbs = [0u32; 10];
        limbs[0] = 1;
        limbs[9] = 1;
        assert!(Dec50::from_parts(limbs, 0, false).is_some_and(|x| !x.is_one()));
    }

    #[test]
    fn test_is_integer() {
        assert!(Dec50::ZERO.is_integer());
        assert!(Dec50::from_u64(123_456_789_012).is_integer());
        assert!(!Dec50::HALF.is_integer());
        assert!(!Dec50::NAN.is_integer());
        assert!(!Dec50::INFINITY.is_integer());
        assert!(Dec50::MAX.is_integer());

        let mut limbs = [0u32; 10];
        limbs[0] = 1;
        limbs[1] = 5;
        let one_and_bit = Dec50::from_parts(limbs, 0, false);
        assert!(one_and_bit.is_some_and(|x| !x.is_integer()));
    }

    #[test]
    fn test_negate_keeps_zero_and_nan_unsigned() {
        let mut z = Dec50::ZERO;
        z.negate();
        assert!(!z.is_negative());

        let mut one = Dec50::ONE;
        one.negate();
        assert!(one.is_negative());
        assert!(!one.abs().is_negative());

        let mut nan = Dec50::NAN;
        nan.negate();
        assert!(nan.is_nan());
        assert!(!nan.is_negative());
        assert_eq!((-Dec50::NAN).sign(), 1);
    }

    #[test]
    fn test_set_precision() {
        let mut x = Dec50::ONE;
        x.set_precision(44);
        assert_eq!(x.active_limbs(), 7);
        x.set_precision(1);
        assert_eq!(x.active_limbs(), 2);
        x.set_precision(79);
        assert_eq!(x.active_limbs(), 10);
        x.set_precision(80);
        assert_eq!(x.active_limbs(), 10);
        x.set_precision(12);
        assert_eq!(x.with_full_precision().active_limbs(), 10);
    }

    #[test]
    fn test_compare_finite() {
        let one = Dec50::ONE;
        let two = Dec50::TWO;
        let minus_one = Dec50::from_i64(-1);
        let minus_two = Dec50::from_i64(-2);

        assert_eq!(one.compare(&two), Ordering::Less);
        assert_eq!(two.compare(&one), Ordering::Greater);
        assert_eq!(minus_one.compare(&minus_two), Ordering::Greater);
        assert_eq!(minus_two.compare(&one), Ordering::Less);
        assert_eq!(Dec50::ZERO.compare(&minus_one), Ordering::Greater);
        assert_eq!(Dec50::ZERO.compare(&Dec50::ZERO), Ordering::Equal);
        assert_eq!(
            Dec50::from_u64(100_000_000).compare(&Dec50::from_u64(99_999_999)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_special() {
        assert_eq!(Dec50::INFINITY.compare(&Dec50::INFINITY), Ordering::Equal);
        assert_eq!(
            Dec50::NEG_INFINITY.compare(&Dec50::INFINITY),
            Ordering::Less
        );
        assert_eq!(Dec50::INFINITY.compare(&Dec50::MAX), Ordering::Greater);
        assert_eq!(Dec50::MAX.compare(&Dec50::NEG_INFINITY), Ordering::Greater);
        assert_eq!(Dec50::NAN.compare(&Dec50::ONE), Ordering::Greater);
        assert_eq!(Dec50::ONE.compare(&Dec50::NAN), Ordering::Less);
    }

    #[test]
    fn test_nan_is_unordered() {
        assert_ne!(Dec50::NAN, Dec50::NAN);
        assert_eq!(Dec50::NAN.partial_cmp(&Dec50::ONE), None);
        assert!(!(Dec50::NAN < Dec50::ONE));
        assert!(!(Dec50::NAN > Dec50::ONE));
        assert_eq!(Dec50::NAN.min(Dec50::ONE), Dec50::ONE);
        assert_eq!(Dec50::ONE.max(Dec50::NAN), Dec50::ONE);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let a = Dec50::from_u64(5);
        let b = Dec50::from_i64(5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut reduced = a;
        reduced.set_precision(10);
        assert_eq!(hash_of(&a), hash_of(&reduced));
        assert_ne!(hash_of(&a), hash_of(&Dec50::from_u64(6)));
    }
}
