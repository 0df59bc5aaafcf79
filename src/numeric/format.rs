// ============================================================================
// Text Formatting
// Limb store to rounded digit string, plus std::fmt integration
// ============================================================================

use super::dec_float::DecFloat;
use super::layout::layout;
use super::limbs::LIMB_DIGITS;
use crate::domain::{FloatStyle, FormatOptions};
use smallvec::SmallVec;
use std::fmt;

type DigitBuf = SmallVec<[u8; 256]>;

impl<const D: u32, const L: usize> DecFloat<D, L> {
    /// Render with explicit options.
    ///
    /// Digits beyond the requested count are rounded half-to-even; the tie
    /// check looks at every remaining limb, rendered or not.
    ///
    /// # Example
    /// ```ignore
    /// let x: Dec50 = "2.5".parse()?;
    /// assert_eq!(x.to_string_with(&FormatOptions::general(1)), "2");
    /// assert_eq!(x.to_string_with(&FormatOptions::fixed(3)), "2.500");
    /// ```
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        if self.is_infinite() {
            return if self.neg {
                "-inf".to_string()
            } else if options.show_pos {
                "+inf".to_string()
            } else {
                "inf".to_string()
            };
        }
        if self.is_nan() {
            return "nan".to_string();
        }

        let precision = options.precision as i64;
        if self.is_zero() {
            return layout("0".to_string(), false, 0, precision, true, options);
        }

        let mut my_exp = i64::from(self.order());
        let wanted = match options.style {
            FloatStyle::General if precision == 0 => i64::from(Self::TOTAL_DIGITS10),
            FloatStyle::General => precision,
            FloatStyle::Scientific => precision + 1,
            FloatStyle::Fixed => precision + my_exp + 1,
        };

        if wanted < 0 {
            return layout("0".to_string(), self.neg, 0, precision, true, options);
        }

        let elements = ((wanted / i64::from(LIMB_DIGITS)) as usize + 2).min(L);
        let mut digits = self.render_limbs(elements);

        let mut wanted = wanted as usize;
        if wanted == 0 {
            // Only the rounding of the first digit matters: round at the
            // position just above it.
            digits.insert(0, b'0');
            my_exp += 1;
            wanted = 1;
        }

        if digits.len() > wanted {
            let round = digits[wanted] - b'0';
            let mut round_up = round >= 5;
            if round == 5 && (digits[wanted - 1] - b'0') % 2 == 0 {
                let rest_is_zero = digits[wanted + 1..].iter().all(|&d| d == b'0')
                    && self.data[elements..].iter().all(|&l| l == 0);
                if rest_is_zero {
                    round_up = false;
                }
            }

            digits.truncate(wanted);
            if round_up && increment_digits(&mut digits) {
                my_exp += 1;
            }
        }

        let text = digits.iter().map(|&d| char::from(d)).collect();
        layout(text, self.neg, my_exp, precision, false, options)
    }

    /// Leading limb unpadded, then every following limb as eight digits.
    fn render_limbs(&self, elements: usize) -> DigitBuf {
        const WIDTH: usize = LIMB_DIGITS as usize;
        let mut digits = DigitBuf::new();
        for (i, &limb) in self.data[..elements].iter().enumerate() {
            let mut chunk = [b'0'; WIDTH];
            let mut rest = limb;
            for slot in chunk.iter_mut().rev() {
                *slot = b'0' + (rest % 10) as u8;
                rest /= 10;
            }
            let start = if i == 0 {
                chunk.iter().position(|&d| d != b'0').unwrap_or(WIDTH - 1)
            } else {
                0
            };
            digits.extend_from_slice(&chunk[start..]);
        }
        digits
    }
}

/// Add one unit in the last place. Returns true when every digit was a nine,
/// in which case the buffer now reads `100…0` and the exponent must grow.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    if let Some(first) = digits.first_mut() {
        *first = b'1';
    }
    true
}

// ============================================================================
// std::fmt
// ============================================================================

impl<const D: u32, const L: usize> fmt::Display for DecFloat<D, L> {
    /// `{}` renders `DIGITS10` significant digits in general notation;
    /// `{:.N}` renders `N` digits after the point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.pad("nan");
        }
        let options = match f.precision() {
            Some(p) => FormatOptions::fixed(p),
            None => FormatOptions::general(Self::DIGITS10 as usize),
        };
        let text = self.to_string_with(&options);
        let unsigned = text.strip_prefix('-').unwrap_or(&text);
        f.pad_integral(!text.starts_with('-'), "", unsigned)
    }
}

impl<const D: u32, const L: usize> fmt::LowerExp for DecFloat<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_exp(f, 'e')
    }
}

impl<const D: u32, const L: usize> fmt::UpperExp for DecFloat<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_exp(f, 'E')
    }
}

impl<const D: u32, const L: usize> DecFloat<D, L> {
    /// Rust-style exponent notation (`1.5e3`, `2e-7`).
    ///
    /// Without an explicit precision, trailing mantissa zeros are dropped.
    fn fmt_exp(&self, f: &mut fmt::Formatter<'_>, marker: char) -> fmt::Result {
        if self.is_nan() {
            return f.pad("nan");
        }
        if self.is_infinite() {
            return f.pad_integral(!self.neg, "", "inf");
        }

        let options = FormatOptions::scientific(f.precision().unwrap_or(Self::DIGITS10 as usize - 1));
        let text = self.abs().to_string_with(&options);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "+00"));
        let mantissa = if f.precision().is_none() && mantissa.contains('.') {
            mantissa.trim_end_matches('0').trim_end_matches('.')
        } else {
            mantissa
        };
        let exponent: i64 = exponent.parse().map_err(|_| fmt::Error)?;

        let body = format!("{mantissa}{marker}{exponent}");
        f.pad_integral(!self.neg, "", &body)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::FormatOptions;
    use crate::numeric::{Dec50, MAX_EXP10};

    fn dec(s: &str) -> Dec50 {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_half_even_ties() {
        let one_digit = FormatOptions::general(1);
        assert_eq!(dec("2.5").to_string_with(&one_digit), "2");
        assert_eq!(dec("3.5").to_string_with(&one_digit), "4");
        assert_eq!(dec("2.51").to_string_with(&one_digit), "3");
        assert_eq!(dec("-2.5").to_string_with(&one_digit), "-2");
    }

    #[test]
    fn test_tie_checks_unrendered_limbs() {
        // The non-zero digit sits far beyond the rendered limbs
        let mut text = String::from("2.5");
        text.push_str(&"0".repeat(60));
        text.push('1');
        let x = dec(&text);
        assert_eq!(x.to_string_with(&FormatOptions::general(1)), "3");
    }

    #[test]
    fn test_round_carry_through_nines() {
        let x = dec("9.999");
        assert_eq!(x.to_string_with(&FormatOptions::general(3)), "10");
        assert_eq!(x.to_string_with(&FormatOptions::scientific(2)), "1.00e+01");
        assert_eq!(dec("99999999.5").to_string_with(&FormatOptions::fixed(0)), "100000000");
    }

    #[test]
    fn test_fixed_rendering() {
        assert_eq!(dec("3.14159").to_string_with(&FormatOptions::fixed(2)), "3.14");
        assert_eq!(dec("2.675").to_string_with(&FormatOptions::fixed(2)), "2.68");
        assert_eq!(dec("-0.001").to_string_with(&FormatOptions::fixed(1)), "-0.0");
        assert_eq!(dec("0.5").to_string_with(&FormatOptions::fixed(0)), "0");
        assert_eq!(dec("0.051").to_string_with(&FormatOptions::fixed(1)), "0.1");
        assert_eq!(dec("123").to_string_with(&FormatOptions::fixed(2)), "123.00");
    }

    #[test]
    fn test_scientific_rendering() {
        let sci = FormatOptions::scientific(3);
        assert_eq!(dec("12345").to_string_with(&sci), "1.234e+04");
        assert_eq!(dec("0.00012346").to_string_with(&sci), "1.235e-04");
        assert_eq!(dec(&format!("1e{}", MAX_EXP10)).to_string_with(&sci), "1.000e+67108864");
    }

    #[test]
    fn test_round_trip_rendering() {
        let third = Dec50::ONE / dec("3");
        let text = third.to_string_with(&FormatOptions::round_trip());
        assert_eq!(dec(&text), third);

        let x = dec("-123456789.123456789e-40");
        let text = x.to_string_with(&FormatOptions::round_trip());
        assert_eq!(dec(&text), x);
    }

    #[test]
    fn test_inner_limbs_keep_leading_zeros() {
        let x = dec("100000000.00000001");
        assert_eq!(x.to_string_with(&FormatOptions::round_trip()), "100000000.00000001");
        assert_eq!(dec("7.000000000000005").to_string(), "7.000000000000005");
    }

    #[test]
    fn test_long_rendering_spills_past_inline_buffer() {
        type Dec300 = crate::numeric::DecFloat<300, { crate::numeric::limb_count(300) }>;
        let third = Dec300::ONE / Dec300::from_u64(3);
        let text = third.to_string();
        assert_eq!(text.len(), "0.".len() + 300);
        assert!(text[2..].bytes().all(|d| d == b'3'));
    }

    #[test]
    fn test_special_rendering() {
        let opts = FormatOptions::general(5);
        assert_eq!(Dec50::INFINITY.to_string_with(&opts), "inf");
        assert_eq!(Dec50::NEG_INFINITY.to_string_with(&opts), "-inf");
        assert_eq!(Dec50::INFINITY.to_string_with(&opts.with_show_pos(true)), "+inf");
        assert_eq!(Dec50::NAN.to_string_with(&opts), "nan");
        assert_eq!(Dec50::ZERO.to_string_with(&opts), "0");
        assert_eq!(Dec50::ZERO.to_string_with(&FormatOptions::fixed(2)), "0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("1.5").to_string(), "1.5");
        assert_eq!(dec("-42").to_string(), "-42");
        assert_eq!(format!("{:.3}", dec("2.0005")), "2.000");
        assert_eq!(format!("{:.3}", dec("2.0015")), "2.002");
        assert_eq!(format!("{:>8}", dec("1.5")), "     1.5");
        assert_eq!(format!("{:+}", dec("1.5")), "+1.5");
        assert_eq!(format!("{}", Dec50::NAN), "nan");
        assert_eq!(format!("{}", Dec50::NEG_INFINITY), "-inf");
        assert_eq!(
            (Dec50::ONE / dec("3")).to_string(),
            "0.33333333333333333333333333333333333333333333333333"
        );
    }

    #[test]
    fn test_exp_notation() {
        assert_eq!(format!("{:e}", dec("1500")), "1.5e3");
        assert_eq!(format!("{:e}", dec("-0.0002")), "-2e-4");
        assert_eq!(format!("{:.2e}", dec("1234")), "1.23e3");
        assert_eq!(format!("{:E}", dec("1500")), "1.5E3");
        assert_eq!(format!("{:e}", Dec50::ONE), "1e0");
        assert_eq!(format!("{:e}", Dec50::ZERO), "0e0");
        assert_eq!(format!("{:e}", Dec50::INFINITY), "inf");
    }

    #[test]
    fn test_debug_shows_layout() {
        let text = format!("{:?}", Dec50::from_u64(7));
        assert!(text.starts_with("DecFloat<50>(7, exp=0, limbs=[7, 0"));
    }
}
