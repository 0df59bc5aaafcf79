// ============================================================================
// Limb Kernels
// Carry/borrow loops over big-endian radix-10^8 limb slices
// ============================================================================
//
// Index 0 is the most significant limb. Every loop walks from the least
// significant end towards index 0 so that carries and borrows flow into
// the more significant neighbour.

use std::cmp::Ordering;

/// Radix of one limb.
pub const LIMB_BASE: u32 = 100_000_000;

/// Decimal digits held by one limb.
pub const LIMB_DIGITS: i32 = 8;

/// Upper bound on the limb count: `floor((2^64 - 1) / (10^8 * 10^8))` is 1844,
/// beyond which the triangular multiply accumulator can overflow.
pub const MAX_LIMBS: usize = 1800;

/// Powers of ten that fit in one limb.
pub(crate) const POW10: [u32; 9] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// Number of decimal digits in a single limb value (1 for zero).
#[inline]
pub(crate) const fn digit_count(limb: u32) -> i32 {
    let mut n = 1;
    while n < 9 && limb >= POW10[n as usize] {
        n += 1;
    }
    n
}

/// `u += v` limb by limb; returns the carry out of limb 0.
#[inline]
pub(crate) fn add_loop(u: &mut [u32], v: &[u32]) -> u32 {
    let mut carry = 0u32;
    for (a, &b) in u.iter_mut().zip(v).rev() {
        let t = *a + b + carry;
        carry = t / LIMB_BASE;
        *a = t - carry * LIMB_BASE;
    }
    carry
}

/// `u -= v` limb by limb; requires `u >= v` as magnitudes.
#[inline]
pub(crate) fn sub_loop(u: &mut [u32], v: &[u32]) {
    let mut borrow = 0i64;
    for (a, &b) in u.iter_mut().zip(v).rev() {
        let mut t = i64::from(*a) - i64::from(b) - borrow;
        if t < 0 {
            t += i64::from(LIMB_BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        *a = t as u32;
    }
}

/// Lexicographic comparison of two equally sized limb slices.
#[inline]
pub(crate) fn compare(u: &[u32], v: &[u32]) -> Ordering {
    match u.iter().zip(v).find(|(a, b)| a != b) {
        Some((a, b)) => a.cmp(b),
        None => Ordering::Equal,
    }
}

/// Truncated schoolbook product `u = u * v` over the top `u.len()` limbs.
///
/// Result limb `j` is `Σ u[j-i]·v[i]` for `i ≤ j`; anything below the
/// last limb is dropped. Returns the carry out of limb 0.
pub(crate) fn mul_loop_uv(u: &mut [u32], v: &[u32]) -> u32 {
    debug_assert!(u.len() <= v.len());
    debug_assert!(u.len() < MAX_LIMBS);

    let mut carry = 0u64;
    for j in (0..u.len()).rev() {
        let mut sum = carry;
        for i in 0..=j {
            sum += u64::from(u[j - i]) * u64::from(v[i]);
        }
        u[j] = (sum % u64::from(LIMB_BASE)) as u32;
        carry = sum / u64::from(LIMB_BASE);
    }
    carry as u32
}

/// `u *= n` for a single-limb scalar `n < 10^8`; returns the carry.
pub(crate) fn mul_loop_n(u: &mut [u32], n: u32) -> u32 {
    let mut carry = 0u64;
    for limb in u.iter_mut().rev() {
        let t = carry + u64::from(*limb) * u64::from(n);
        carry = t / u64::from(LIMB_BASE);
        *limb = (t - carry * u64::from(LIMB_BASE)) as u32;
    }
    carry as u32
}

/// `u /= n` for a single-limb scalar `n`; returns the remainder.
pub(crate) fn div_loop_n(u: &mut [u32], n: u32) -> u32 {
    let n = u64::from(n);
    let mut prev = 0u64;
    for limb in u.iter_mut() {
        let t = u64::from(*limb) + prev * u64::from(LIMB_BASE);
        let q = t / n;
        *limb = q as u32;
        prev = t - q * n;
    }
    prev as u32
}

/// Move limbs `n` places towards the least significant end, zero-filling the top.
#[inline]
pub(crate) fn shift_right(u: &mut [u32], n: usize) {
    if n >= u.len() {
        u.fill(0);
        return;
    }
    u.copy_within(..u.len() - n, n);
    u[..n].fill(0);
}

/// Move limbs `n` places towards the most significant end, zero-filling the tail.
#[inline]
pub(crate) fn shift_left(u: &mut [u32], n: usize) {
    if n >= u.len() {
        u.fill(0);
        return;
    }
    u.copy_within(n.., 0);
    let len = u.len();
    u[len - n..].fill(0);
}

/// Copy of `src` shifted `n` limbs towards the least significant end.
#[inline]
pub(crate) fn shifted_right<const L: usize>(src: &[u32; L], n: usize) -> [u32; L] {
    let mut out = *src;
    shift_right(&mut out, n);
    out
}
