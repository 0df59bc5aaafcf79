// ============================================================================
// String Parsing
// Decimal text to limb store
// ============================================================================

use super::dec_float::{DecFloat, MAX_EXP10, MIN_EXP10};
use super::errors::NumericError;
use super::limbs::LIMB_DIGITS;
use smallvec::SmallVec;
use std::str::FromStr;
use tracing::trace;

/// Inline digit capacity before the scratch buffer spills to the heap.
type DigitBuf = SmallVec<[u8; 128]>;

impl<const D: u32, const L: usize> FromStr for DecFloat<D, L> {
    type Err = NumericError;

    /// Parse `[sign] digits [. digits] [(e|E) [sign] digits]`, or one of
    /// `inf`, `infinity` and `nan` in any case.
    ///
    /// Digits beyond the limb capacity are truncated. Exponents above the
    /// range produce a signed infinity, exponents below it produce zero.
    ///
    /// # Examples
    /// - "123.456" -> 123.456
    /// - "-1.5e-3" -> -0.0015
    /// - "-INF" -> -inf
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (neg, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
            return Ok(if neg {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            });
        }
        if body.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("nan")) {
            return Ok(Self::NAN);
        }

        let (mantissa, exp10) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp10 = body[pos + 1..].parse::<i64>().map_err(|_| {
                    trace!(input = s, "rejected exponent suffix");
                    NumericError::InvalidExponent
                })?;
                (&body[..pos], exp10)
            },
            None => (body, 0),
        };

        let mut digits = DigitBuf::new();
        let mut point: Option<usize> = None;
        for b in mantissa.bytes() {
            match b {
                b'0'..=b'9' => digits.push(b - b'0'),
                b'.' if point.is_none() => point = Some(digits.len()),
                _ => {
                    trace!(input = s, "rejected mantissa");
                    return Err(NumericError::InvalidInput);
                },
            }
        }
        if digits.is_empty() {
            trace!(input = s, "mantissa has no digits");
            return Err(NumericError::InvalidInput);
        }

        let Some(first) = digits.iter().position(|&d| d != 0) else {
            return Ok(Self::ZERO);
        };
        let int_digits = point.unwrap_or(digits.len());

        // Decimal exponent of the leading significant digit
        let lead = exp10.saturating_add(int_digits as i64 - first as i64 - 1);
        let limb_digits = i64::from(LIMB_DIGITS);
        let exp = lead.div_euclid(limb_digits) * limb_digits;

        if exp > i64::from(MAX_EXP10) {
            return Ok(if neg {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            });
        }
        if exp < i64::from(MIN_EXP10) {
            return Ok(Self::ZERO);
        }

        let mut out = Self::ZERO;
        out.exp = exp as i32;
        out.neg = neg;
        fill_limbs(&mut out.data, &digits[first..], (lead - exp + 1) as usize);

        if out.exp == MIN_EXP10 && out.data[0] == 1 && out.data[1..].iter().all(|&l| l == 0) {
            return Ok(Self::ZERO);
        }
        out.saturate();
        Ok(out)
    }
}

/// Pack significant digits into limbs: `lead_width` digits into limb 0,
/// eight into every following limb, zero-padding the last partial limb.
fn fill_limbs(data: &mut [u32], significant: &[u8], lead_width: usize) {
    let mut digits = significant.iter().copied();
    let mut remaining = significant.len();
    for (i, limb) in data.iter_mut().enumerate() {
        let width = if i == 0 {
            lead_width
        } else {
            LIMB_DIGITS as usize
        };
        *limb = (0..width).fold(0u32, |acc, _| acc * 10 + u32::from(digits.next().unwrap_or(0)));
        remaining = remaining.saturating_sub(width);
        if remaining == 0 {
            break;
        }
    }
}
