// ============================================================================
// Arithmetic Backend Interface
// In-place hooks for a generic expression layer
// ============================================================================

use crate::numeric::DecFloat;
use std::cmp::Ordering;

/// In-place arithmetic a generic number front end drives.
///
/// Implementations never fail: overflow, underflow and division by zero
/// are reported through the value itself (infinity, zero, NaN).
pub trait ArithmeticBackend: Copy {
    fn eval_add(&mut self, rhs: &Self);
    fn eval_subtract(&mut self, rhs: &Self);
    fn eval_multiply(&mut self, rhs: &Self);
    fn eval_divide(&mut self, rhs: &Self);

    fn eval_add_u64(&mut self, n: u64);
    fn eval_subtract_u64(&mut self, n: u64);
    fn eval_multiply_u64(&mut self, n: u64);
    fn eval_divide_u64(&mut self, n: u64);

    fn eval_add_i64(&mut self, n: i64);
    fn eval_subtract_i64(&mut self, n: i64);
    fn eval_multiply_i64(&mut self, n: i64);
    fn eval_divide_i64(&mut self, n: i64);

    /// Flip the sign. Zero and NaN stay unsigned.
    fn negate(&mut self);

    /// Total order over non-NaN values; see the implementor for NaN.
    fn compare(&self, other: &Self) -> Ordering;

    // Copy forms

    fn added(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.eval_add(rhs);
        out
    }

    fn subtracted(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.eval_subtract(rhs);
        out
    }

    fn multiplied(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.eval_multiply(rhs);
        out
    }

    fn divided(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.eval_divide(rhs);
        out
    }
}

impl<const D: u32, const L: usize> ArithmeticBackend for DecFloat<D, L> {
    #[inline]
    fn eval_add(&mut self, rhs: &Self) {
        self.add_in_place(rhs);
    }

    #[inline]
    fn eval_subtract(&mut self, rhs: &Self) {
        self.sub_in_place(rhs);
    }

    #[inline]
    fn eval_multiply(&mut self, rhs: &Self) {
        self.mul_in_place(rhs);
    }

    #[inline]
    fn eval_divide(&mut self, rhs: &Self) {
        self.div_in_place(rhs);
    }

    #[inline]
    fn eval_add_u64(&mut self, n: u64) {
        self.add_u64(n);
    }

    #[inline]
    fn eval_subtract_u64(&mut self, n: u64) {
        self.sub_u64(n);
    }

    #[inline]
    fn eval_multiply_u64(&mut self, n: u64) {
        self.mul_u64(n);
    }

    #[inline]
    fn eval_divide_u64(&mut self, n: u64) {
        self.div_u64(n);
    }

    #[inline]
    fn eval_add_i64(&mut self, n: i64) {
        self.add_i64(n);
    }

    #[inline]
    fn eval_subtract_i64(&mut self, n: i64) {
        self.sub_i64(n);
    }

    #[inline]
    fn eval_multiply_i64(&mut self, n: i64) {
        self.mul_i64(n);
    }

    #[inline]
    fn eval_divide_i64(&mut self, n: i64) {
        self.div_i64(n);
    }

    #[inline]
    fn negate(&mut self) {
        DecFloat::negate(self);
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        DecFloat::compare(self, other)
    }
}
