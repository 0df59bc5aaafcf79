// ============================================================================
// Core Arithmetic
// Add, subtract, multiply, divide and single-limb scalar fast paths
// ============================================================================
//
// Special values never reach the limb loops: NaN and infinity are resolved
// up front, and overflow/underflow fold the result into infinity or zero.

use super::dec_float::{DecFloat, MAX_EXP10, MIN_EXP10};
use super::limbs::{self, LIMB_BASE, LIMB_DIGITS};
use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl<const D: u32, const L: usize> DecFloat<D, L> {
    /// Operands whose exponents differ by more than this are not combined.
    const MAX_DELTA_EXP: i32 = (L as i32 - 1) * LIMB_DIGITS;

    // ========================================================================
    // Value ⊕ Value
    // ========================================================================

    /// `self += v`.
    ///
    /// If the exponents differ by more than the limb span, the smaller operand
    /// is dropped entirely rather than rounded into the last limb.
    pub fn add_in_place(&mut self, v: &Self) {
        if self.is_nan() {
            return;
        }
        if self.is_infinite() {
            if v.is_infinite() && self.neg != v.neg {
                *self = Self::NAN;
            }
            return;
        }
        if self.is_zero() || !v.is_finite() {
            *self = *v;
            return;
        }

        let ofs_exp = self.exp - v.exp;
        if v.is_zero() || ofs_exp > Self::MAX_DELTA_EXP {
            return;
        }
        if ofs_exp < -Self::MAX_DELTA_EXP {
            *self = *v;
            return;
        }

        let ofs = ofs_exp / LIMB_DIGITS;
        if self.neg == v.neg {
            self.add_magnitudes(v, ofs);
        } else {
            self.sub_magnitudes(v, ofs);
        }

        if self.is_zero() || self.exp < MIN_EXP10 {
            *self = Self::ZERO;
            return;
        }
        self.saturate();
    }

    fn add_magnitudes(&mut self, v: &Self, ofs: i32) {
        let carry = if ofs >= 0 {
            let aligned = limbs::shifted_right(&v.data, ofs as usize);
            limbs::add_loop(&mut self.data, &aligned)
        } else {
            let mut aligned = limbs::shifted_right(&self.data, ofs.unsigned_abs() as usize);
            let carry = limbs::add_loop(&mut aligned, &v.data);
            self.data = aligned;
            self.exp = v.exp;
            carry
        };

        if carry != 0 {
            limbs::shift_right(&mut self.data, 1);
            self.data[0] = carry;
            self.exp += LIMB_DIGITS;
        }
    }

    fn sub_magnitudes(&mut self, v: &Self, ofs: i32) {
        if ofs > 0 || (ofs == 0 && self.compare_limbs(v) == Ordering::Greater) {
            let aligned = limbs::shifted_right(&v.data, ofs as usize);
            limbs::sub_loop(&mut self.data, &aligned);
        } else {
            let aligned = limbs::shifted_right(&self.data, ofs.unsigned_abs() as usize);
            let mut diff = v.data;
            limbs::sub_loop(&mut diff, &aligned);
            self.data = diff;
            self.exp = v.exp;
            self.neg = v.neg;
        }

        match self.data.iter().position(|&l| l != 0) {
            None => {
                self.neg = false;
                self.exp = 0;
            },
            Some(0) => {},
            Some(lead) => {
                limbs::shift_left(&mut self.data, lead);
                self.exp -= lead as i32 * LIMB_DIGITS;
            },
        }
    }

    /// `self -= v`, computed as `-((-self) + v)`.
    #[inline]
    pub fn sub_in_place(&mut self, v: &Self) {
        self.negate();
        self.add_in_place(v);
        self.negate();
    }

    /// `self *= v` over `min(active_limbs)` limbs.
    pub fn mul_in_place(&mut self, v: &Self) {
        let result_neg = self.neg != v.neg;
        self.neg = false;

        let u_inf = self.is_infinite();
        let v_inf = v.is_infinite();
        let u_zero = self.is_zero();
        let v_zero = v.is_zero();

        if self.is_nan() || v.is_nan() || (u_inf && v_zero) || (v_inf && u_zero) {
            *self = Self::NAN;
            return;
        }
        if u_inf || v_inf {
            *self = Self::INFINITY;
            self.neg = result_neg;
            return;
        }
        if u_zero || v_zero {
            *self = Self::ZERO;
            return;
        }

        self.exp += v.exp;

        let p = self.active.min(v.active);
        let carry = limbs::mul_loop_uv(&mut self.data[..p], &v.data[..p]);
        self.data[p..].fill(0);

        if carry != 0 {
            self.exp += LIMB_DIGITS;
            limbs::shift_right(&mut self.data[..p], 1);
            self.data[0] = carry;
        }

        // Bounds are checked on the normalized product, after the carry
        if self.exp < MIN_EXP10 {
            *self = Self::ZERO;
            return;
        }
        self.neg = result_neg;
        self.saturate();
    }

    /// `self /= v`, computed as `self * reciprocal(v)`.
    pub fn div_in_place(&mut self, v: &Self) {
        if self.is_zero() {
            if v.is_nan() {
                *self = *v;
                return;
            }
            if v.is_zero() {
                *self = Self::NAN;
                return;
            }
        }

        let identical = self.is_finite()
            && self.class == v.class
            && self.exp == v.exp
            && self.compare_limbs(v) == Ordering::Equal;
        if identical {
            let neg = self.neg != v.neg;
            *self = Self::ONE;
            self.neg = neg;
            return;
        }

        // Single-limb integer divisors take the exact scalar path
        if v.is_finite() && v.exp == 0 && v.data[0] != 0 && v.data[1..].iter().all(|&l| l == 0) {
            self.div_u64(u64::from(v.data[0]));
            if v.neg {
                self.negate();
            }
            return;
        }

        let inverse = v.reciprocal();
        self.mul_in_place(&inverse);
    }

    // ========================================================================
    // Value ⊕ Scalar
    // ========================================================================

    /// `self *= n`, using the single-limb loop when `n < 10^8`.
    pub fn mul_u64(&mut self, n: u64) {
        let neg = self.neg;
        self.neg = false;

        if self.is_nan() || (self.is_infinite() && n == 0) {
            *self = Self::NAN;
            return;
        }
        if self.is_infinite() {
            self.neg = neg;
            return;
        }
        if self.is_zero() || n == 0 {
            *self = Self::ZERO;
            return;
        }
        if n >= u64::from(LIMB_BASE) {
            self.neg = neg;
            self.mul_in_place(&Self::from_u64(n));
            return;
        }
        if n == 1 {
            self.neg = neg;
            return;
        }

        let p = self.active;
        let carry = limbs::mul_loop_n(&mut self.data[..p], n as u32);
        if carry != 0 {
            self.exp += LIMB_DIGITS;
            limbs::shift_right(&mut self.data[..p], 1);
            self.data[0] = carry;
        }

        self.neg = neg;
        self.saturate();
    }

    /// `self /= n`, using the single-limb loop when `n < 10^8`.
    ///
    /// Division of a non-zero value by zero yields an infinity carrying the
    /// dividend's sign; `0 / 0` is NaN.
    pub fn div_u64(&mut self, n: u64) {
        let neg = self.neg;
        self.neg = false;

        if self.is_nan() {
            return;
        }
        if self.is_infinite() {
            self.neg = neg;
            return;
        }
        if n == 0 {
            if self.is_zero() {
                *self = Self::NAN;
            } else {
                *self = Self::INFINITY;
                self.neg = neg;
            }
            return;
        }
        if self.is_zero() {
            return;
        }
        if n >= u64::from(LIMB_BASE) {
            self.neg = neg;
            self.div_in_place(&Self::from_u64(n));
            return;
        }

        if n > 1 {
            let n = n as u32;
            let p = self.active;
            let remainder = limbs::div_loop_n(&mut self.data[..p], n);

            if self.data[0] == 0 {
                self.exp -= LIMB_DIGITS;
                limbs::shift_left(&mut self.data[..p], 1);
                self.data[p - 1] =
                    ((u64::from(remainder) * u64::from(LIMB_BASE)) / u64::from(n)) as u32;
            }
        }

        if self.exp <= MIN_EXP10 && self.compare(&Self::MIN) == Ordering::Less {
            *self = Self::ZERO;
            return;
        }
        self.neg = neg;
    }

    /// `self += n`.
    #[inline]
    pub fn add_u64(&mut self, n: u64) {
        self.add_in_place(&Self::from_u64(n));
    }

    /// `self -= n`.
    #[inline]
    pub fn sub_u64(&mut self, n: u64) {
        self.sub_in_place(&Self::from_u64(n));
    }

    /// `self += n` for a signed scalar.
    #[inline]
    pub fn add_i64(&mut self, n: i64) {
        if n < 0 {
            self.sub_u64(n.unsigned_abs());
        } else {
            self.add_u64(n as u64);
        }
    }

    /// `self -= n` for a signed scalar.
    #[inline]
    pub fn sub_i64(&mut self, n: i64) {
        if n < 0 {
            self.add_u64(n.unsigned_abs());
        } else {
            self.sub_u64(n as u64);
        }
    }

    /// `self *= n` for a signed scalar.
    #[inline]
    pub fn mul_i64(&mut self, n: i64) {
        self.mul_u64(n.unsigned_abs());
        if n < 0 {
            self.negate();
        }
    }

    /// `self /= n` for a signed scalar.
    #[inline]
    pub fn div_i64(&mut self, n: i64) {
        self.div_u64(n.unsigned_abs());
        if n < 0 {
            self.negate();
        }
    }

    /// `self += 1`.
    #[inline]
    pub fn increment(&mut self) {
        self.add_in_place(&Self::ONE);
    }

    /// `self -= 1`.
    #[inline]
    pub fn decrement(&mut self) {
        self.sub_in_place(&Self::ONE);
    }

    /// Remainder of truncated division, `self - trunc(self / v) * v`.
    pub fn rem_in_place(&mut self, v: &Self) {
        if !self.is_finite() || v.is_nan() || v.is_zero() {
            *self = Self::NAN;
            return;
        }
        if v.is_infinite() {
            return;
        }
        let mut quotient = *self;
        quotient.div_in_place(v);
        let mut whole = quotient.integer_part();
        whole.mul_in_place(v);
        self.sub_in_place(&whole);
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

macro_rules! forward_binop {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $inner:ident) => {
        impl<const D: u32, const L: usize> $assign_op for DecFloat<D, L> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.$inner(&rhs);
            }
        }

        impl<const D: u32, const L: usize> $assign_op<&DecFloat<D, L>> for DecFloat<D, L> {
            #[inline]
            fn $assign_method(&mut self, rhs: &Self) {
                self.$inner(rhs);
            }
        }

        impl<const D: u32, const L: usize> $op for DecFloat<D, L> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$inner(&rhs);
                self
            }
        }

        impl<const D: u32, const L: usize> $op<&DecFloat<D, L>> for DecFloat<D, L> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: &Self) -> Self::Output {
                self.$inner(rhs);
                self
            }
        }

        impl<const D: u32, const L: usize> $op<&DecFloat<D, L>> for &DecFloat<D, L> {
            type Output = DecFloat<D, L>;

            #[inline]
            fn $method(self, rhs: &DecFloat<D, L>) -> Self::Output {
                let mut out = *self;
                out.$inner(rhs);
                out
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_in_place);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_in_place);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_in_place);
forward_binop!(Div, div, DivAssign, div_assign, div_in_place);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem_in_place);

macro_rules! forward_scalar_op {
    ($scalar:ty, $op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $inner:ident) => {
        impl<const D: u32, const L: usize> $assign_op<$scalar> for DecFloat<D, L> {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                self.$inner(rhs);
            }
        }

        impl<const D: u32, const L: usize> $op<$scalar> for DecFloat<D, L> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: $scalar) -> Self::Output {
                self.$inner(rhs);
                self
            }
        }
    };
}

forward_scalar_op!(u64, Add, add, AddAssign, add_assign, add_u64);
forward_scalar_op!(u64, Sub, sub, SubAssign, sub_assign, sub_u64);
forward_scalar_op!(u64, Mul, mul, MulAssign, mul_assign, mul_u64);
forward_scalar_op!(u64, Div, div, DivAssign, div_assign, div_u64);
forward_scalar_op!(i64, Add, add, AddAssign, add_assign, add_i64);
forward_scalar_op!(i64, Sub, sub, SubAssign, sub_assign, sub_i64);
forward_scalar_op!(i64, Mul, mul, MulAssign, mul_assign, mul_i64);
forward_scalar_op!(i64, Div, div, DivAssign, div_assign, div_i64);

impl<const D: u32, const L: usize> Neg for DecFloat<D, L> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl<const D: u32, const L: usize> Neg for &DecFloat<D, L> {
    type Output = DecFloat<D, L>;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<const D: u32, const L: usize> std::iter::Sum for DecFloat<D, L> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<const D: u32, const L: usize> std::iter::Product for DecFloat<D, L> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
