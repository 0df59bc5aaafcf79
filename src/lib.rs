// ============================================================================
// Decimal Floating-Point Library
// Arbitrary-precision radix-10 floating point with compile-time digit count
// ============================================================================

//! # dec-float
//!
//! A fixed-capacity decimal floating-point backend. Each value stores its
//! significand as radix-10^8 limbs, a decimal exponent, a sign and a class
//! tag (finite, infinite, NaN).
//!
//! ## Features
//!
//! - **Compile-time precision** via const generics (`Dec50`, `Dec100`, …)
//! - **Copy values, no allocation** on any arithmetic path
//! - **Newton iteration** for reciprocal and square root with a
//!   precision-doubling schedule
//! - **Round-half-even text rendering** in general, fixed and scientific styles
//! - **Lazily built special values** shared across threads per precision
//! - **Interop** with `num-traits`, `rust_decimal` and (optionally) `serde`
//!
//! ## Example
//!
//! ```rust
//! use dec_float::prelude::*;
//!
//! let third = Dec50::ONE / Dec50::from(3u64);
//! assert_eq!(
//!     third.to_string_with(&FormatOptions::fixed(10)),
//!     "0.3333333333"
//! );
//!
//! let root2 = Dec100::TWO.sqrt();
//! assert_eq!(format!("{:.20}", root2), "1.41421356237309504880");
//!
//! let big: Dec50 = "1.5e1000".parse().unwrap();
//! assert_eq!(format!("{:e}", big), "1.5e1000");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FloatStyle, FormatOptions, FpClass};
    pub use crate::interfaces::{ArithmeticBackend, FloatHooks, NumericLimits};
    pub use crate::numeric::{limb_count, Dec100, Dec50, DecFloat, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    type Dec30 = DecFloat<30, { limb_count(30) }>;

    #[test]
    fn test_end_to_end_compound_interest() {
        // 1000 * (1 + 0.05/12)^(12*10), computed with scalar and value ops
        let principal: Dec50 = "1000".parse().unwrap();
        let mut monthly = Dec50::ONE + "0.05".parse::<Dec50>().unwrap() / 12u64;
        let mut growth = Dec50::ONE;
        let mut n = 120u32;
        while n > 0 {
            if n & 1 == 1 {
                growth *= monthly;
            }
            monthly = monthly * monthly;
            n >>= 1;
        }
        let total = principal * growth;
        assert_eq!(total.to_string_with(&FormatOptions::fixed(6)), "1647.009498");
    }

    #[test]
    fn test_precision_is_part_of_the_type() {
        let a = Dec30::ONE / Dec30::from(7u64);
        let b = Dec100::ONE / Dec100::from(7u64);
        assert_eq!(a.to_string().len(), "0.".len() + 30);
        assert_eq!(b.to_string().len(), "0.".len() + 100);
        assert!(a.to_string().starts_with("0.142857142857"));
    }

    #[test]
    fn test_special_value_flow() {
        let zero = Dec50::ZERO;
        let inf = Dec50::ONE / zero;
        assert!(inf.is_infinite());
        assert!((inf - inf).is_nan());
        assert!((zero / zero).is_nan());
        assert_eq!(inf.class(), FpClass::Infinite);
        assert_eq!(Dec50::NAN.partial_cmp(&Dec50::ONE), None);
    }

    #[test]
    fn test_text_round_trip_through_all_styles() {
        let x: Dec50 = "-314.159265358979".parse().unwrap();
        assert_eq!(x.to_string_with(&FormatOptions::general(6)), "-314.159");
        assert_eq!(x.to_string_with(&FormatOptions::fixed(3)), "-314.159");
        assert_eq!(x.to_string_with(&FormatOptions::scientific(4)), "-3.1416e+02");
        let back: Dec50 = x.to_string_with(&FormatOptions::round_trip()).parse().unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_limits_and_hooks_together() {
        let eps = <Dec50 as NumericLimits>::epsilon();
        let one_plus = Dec50::ONE + eps;
        assert!(one_plus > Dec50::ONE);
        assert_eq!(FloatHooks::floor(&one_plus), Dec50::ONE);
        assert_eq!(one_plus.ilogb(), 0);
    }
}
