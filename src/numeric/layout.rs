// ============================================================================
// Numeric Layout
// Decimal-point placement and exponent suffix for rounded digit strings
// ============================================================================
//
// Input is a bare string of significant digits (no sign, no point) whose
// first digit sits at decimal position `exp`. Output follows the usual
// iostream conventions for general, fixed and scientific notation.

use crate::domain::{FloatStyle, FormatOptions};

/// Minimum number of digits in a rendered exponent (`e+05`).
const MIN_EXPONENT_DIGITS: usize = 2;

/// Digits shown by general style when no precision is requested and the
/// digit string is shorter.
const DEFAULT_GENERAL_DIGITS: usize = 16;

/// Lay out `digits × 10^(exp - len + 1)` according to `options`.
///
/// `precision` is the caller's requested precision, where zero in general
/// style means "all digits". `is_zero` forces zero rendering even
/// if `digits` is not all zeros.
pub(crate) fn layout(
    mut digits: String,
    negative: bool,
    exp: i64,
    precision: i64,
    is_zero: bool,
    options: &FormatOptions,
) -> String {
    let fixed = options.style == FloatStyle::Fixed;
    let scientific = options.style == FloatStyle::Scientific;
    let show_point = options.show_point;

    let precision = if precision == 0 && options.style == FloatStyle::General {
        digits.len().max(DEFAULT_GENERAL_DIGITS) as i64
    } else {
        precision
    };

    if is_zero || digits.bytes().all(|b| b == b'0') {
        let mut out = String::from("0");
        if scientific || fixed {
            if show_point || precision > 0 {
                out.push('.');
                push_zeros(&mut out, precision);
            }
            if scientific {
                out.push_str("e+00");
            }
        } else if show_point {
            out.push('.');
            push_zeros(&mut out, precision - 1);
        }
        return with_sign(out, negative, options.show_pos);
    }

    if !fixed && !scientific && !show_point {
        let kept = digits.trim_end_matches('0').len();
        digits.truncate(kept);
    } else if !fixed || exp >= 0 {
        let mut pad = precision - digits.len() as i64;
        if scientific {
            pad += 1;
        }
        push_zeros(&mut digits, pad);
    }

    let positional = fixed || (!scientific && exp >= -4 && exp < precision);
    let body = if positional {
        positional_layout(digits, exp, precision, fixed, show_point)
    } else {
        scientific_layout(digits, exp, show_point)
    };
    with_sign(body, negative, options.show_pos)
}

fn positional_layout(
    mut digits: String,
    exp: i64,
    precision: i64,
    fixed: bool,
    show_point: bool,
) -> String {
    let len = digits.len() as i64;
    let want_point = show_point || (fixed && precision > 0);

    if exp + 1 > len {
        push_zeros(&mut digits, exp + 1 - len);
        if want_point {
            digits.push('.');
        }
    } else if exp + 1 < len {
        if exp < 0 {
            let mut out = String::with_capacity(digits.len() + (1 - exp) as usize + 1);
            out.push_str("0.");
            push_zeros(&mut out, -1 - exp);
            out.push_str(&digits);
            digits = out;
        } else {
            digits.insert((exp + 1) as usize, '.');
        }
    } else if want_point {
        digits.push('.');
    }

    if fixed {
        if let Some(point) = digits.find('.') {
            let fraction = (digits.len() - point - 1) as i64;
            push_zeros(&mut digits, precision - fraction);
        }
    }
    digits
}

fn scientific_layout(mut digits: String, exp: i64, show_point: bool) -> String {
    if show_point || digits.len() > 1 {
        digits.insert(1, '.');
    }
    digits.push('e');
    digits.push(if exp < 0 { '-' } else { '+' });
    digits.push_str(&format!(
        "{:0width$}",
        exp.unsigned_abs(),
        width = MIN_EXPONENT_DIGITS
    ));
    digits
}

#[inline]
fn push_zeros(s: &mut String, count: i64) {
    if count > 0 {
        s.extend(std::iter::repeat('0').take(count as usize));
    }
}

fn with_sign(body: String, negative: bool, show_pos: bool) -> String {
    if negative {
        format!("-{body}")
    } else if show_pos {
        format!("+{body}")
    } else {
        body
    }
}
