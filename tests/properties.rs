//! Arithmetic and text properties of `DecFloat`, checked with proptest.
//!
//! Operands are built from an integer mantissa and a small decimal exponent
//! so that sums and products stay well inside the limb capacity and the
//! exact answer is known.

use dec_float::domain::FormatOptions;
use dec_float::numeric::{Dec100, Dec50};
use proptest::prelude::*;
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_decimal_text() -> impl Strategy<Value = String> {
    (any::<i64>(), -20i32..20).prop_map(|(m, e)| format!("{m}e{e}"))
}

fn arb_dec50() -> impl Strategy<Value = Dec50> {
    arb_decimal_text().prop_map(|s| s.parse().unwrap())
}

fn arb_dec100() -> impl Strategy<Value = Dec100> {
    arb_decimal_text().prop_map(|s| s.parse().unwrap())
}

/// Narrower mantissas so a triple product still fits the limb store exactly.
fn arb_small_dec100() -> impl Strategy<Value = Dec100> {
    (any::<i32>(), -20i32..20).prop_map(|(m, e)| format!("{m}e{e}").parse().unwrap())
}

fn tolerance(exp: i32) -> Dec50 {
    format!("1e{exp}").parse().unwrap()
}

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_integer_addition_is_exact(a in -1_000_000_000_000_000i64..1_000_000_000_000_000,
                                      b in -1_000_000_000_000_000i64..1_000_000_000_000_000) {
        prop_assert_eq!(Dec50::from_i64(a) + Dec50::from_i64(b), Dec50::from_i64(a + b));
        prop_assert_eq!(Dec50::from_i64(a) - Dec50::from_i64(b), Dec50::from_i64(a - b));
    }

    #[test]
    fn prop_integer_multiplication_is_exact(a in -3_000_000_000i64..3_000_000_000,
                                            b in -3_000_000_000i64..3_000_000_000) {
        prop_assert_eq!(Dec50::from_i64(a) * Dec50::from_i64(b), Dec50::from_i64(a * b));
    }

    #[test]
    fn prop_addition_commutes(a in arb_dec100(), b in arb_dec100()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_multiplication_commutes(a in arb_dec100(), b in arb_dec100()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn prop_addition_associates(a in arb_dec100(), b in arb_dec100(), c in arb_dec100()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn prop_multiplication_associates(a in arb_small_dec100(),
                                      b in arb_small_dec100(),
                                      c in arb_small_dec100()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn prop_neutral_elements(x in arb_dec50()) {
        prop_assert_eq!(x + Dec50::ZERO, x);
        prop_assert_eq!(x * Dec50::ONE, x);
        prop_assert!((x - x).is_zero());
    }

    #[test]
    fn prop_self_division_is_one(x in arb_dec50()) {
        prop_assume!(!x.is_zero());
        prop_assert_eq!(x / x, Dec50::ONE);
    }

    #[test]
    fn prop_negation_is_involutive(x in arb_dec50()) {
        prop_assert_eq!(-(-x), x);
        prop_assert_eq!((-x).abs(), x.abs());
    }
}

// ---------------------------------------------------------------------------
// Newton iterations
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_reciprocal_converges(n in 1u64..1_000_000_000_000) {
        let x = Dec50::from_u64(n);
        let error = (x.reciprocal() * x - Dec50::ONE).abs();
        prop_assert!(error < tolerance(-45), "1/{} error {}", n, error);
    }

    #[test]
    fn prop_division_by_non_integer(a in arb_dec50(), b in arb_dec50()) {
        prop_assume!(!b.is_zero());
        let q = a / b;
        let back = q * b;
        let error = (back - a).abs();
        let scale = a.abs().max(Dec50::MIN);
        prop_assert!(error <= scale * tolerance(-45));
    }

    #[test]
    fn prop_sqrt_squares_back(n in 1u64..1_000_000_000_000) {
        let x = Dec50::from_u64(n);
        let root = x.sqrt();
        let relative = (root * root - x).abs() / x;
        prop_assert!(relative < tolerance(-45));
    }

    #[test]
    fn prop_sqrt_of_perfect_square(n in 1u64..4_000_000_000) {
        let square = Dec50::from_u64(n * n);
        let root = square.sqrt();
        let error = (root - Dec50::from_u64(n)).abs();
        prop_assert!(error < tolerance(-40));
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_compare_matches_integers(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Dec50::from_i64(a).compare(&Dec50::from_i64(b)), a.cmp(&b));
    }

    #[test]
    fn prop_compare_is_antisymmetric(a in arb_dec50(), b in arb_dec50()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_floor_brackets_value(x in arb_dec50()) {
        let floor = x.floor();
        prop_assert!(floor.is_integer());
        prop_assert!(floor <= x);
        prop_assert!(x < floor + Dec50::ONE);
        prop_assert!(x.ceil() >= x);
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_round_trip_text(x in arb_dec50()) {
        let text = x.to_string_with(&FormatOptions::round_trip());
        let back: Dec50 = text.parse().unwrap();
        prop_assert_eq!(back, x);
    }

    #[test]
    fn prop_integer_display_matches_i64(n in any::<i64>()) {
        prop_assert_eq!(Dec50::from_i64(n).to_string(), n.to_string());
    }

    #[test]
    fn prop_scientific_has_requested_digits(x in arb_dec50(), digits in 0usize..30) {
        prop_assume!(!x.is_zero());
        let text = x.to_string_with(&FormatOptions::scientific(digits));
        let unsigned = text.trim_start_matches('-');
        let (mantissa, _) = unsigned.split_once('e').unwrap();
        let significant = mantissa.chars().filter(char::is_ascii_digit).count();
        prop_assert_eq!(significant, digits + 1);
    }

    #[test]
    fn prop_parse_rejects_garbage(s in "[a-df-mo-z]{1,8}") {
        prop_assert!(s.parse::<Dec50>().is_err());
    }
}
