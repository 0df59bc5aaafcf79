//! Conversion properties between `DecFloat` and native / `Decimal` types.

use dec_float::numeric::{Dec50, DecFloat};
use quickcheck::{quickcheck, TestResult};
use rust_decimal::Decimal;

type Dec20 = DecFloat<20, { dec_float::numeric::limb_count(20) }>;

quickcheck! {
    fn qc_i64_round_trip(n: i64) -> bool {
        Dec50::from_i64(n).to_i64() == n
    }

    fn qc_u64_round_trip(n: u64) -> bool {
        Dec50::from_u64(n).to_u64() == n
    }

    fn qc_i128_display(n: i128) -> bool {
        Dec50::from_i128(n).to_string() == n.to_string()
    }

    fn qc_f64_round_trip(x: f64) -> TestResult {
        if !x.is_normal() || x.abs() < 1e-300 || x.abs() > 1e300 {
            return TestResult::discard();
        }
        TestResult::from_bool(Dec50::from_f64(x).to_f64() == x)
    }

    fn qc_f32_round_trip(x: f32) -> TestResult {
        if !x.is_normal() || x.abs() < 1e-30 || x.abs() > 1e30 {
            return TestResult::discard();
        }
        TestResult::from_bool(Dec20::from_f32(x).to_f32() == x)
    }

    fn qc_f64_order_preserved(a: f64, b: f64) -> TestResult {
        if !a.is_finite() || !b.is_finite() {
            return TestResult::discard();
        }
        let ours = Dec50::from_f64(a).partial_cmp(&Dec50::from_f64(b));
        TestResult::from_bool(ours == a.partial_cmp(&b))
    }

    fn qc_truncation_matches_native(n: i32, frac: u16) -> bool {
        let text = format!("{n}.{frac:05}");
        let x: Dec50 = text.parse().unwrap();
        x.to_i64() == i64::from(n)
    }

    fn qc_decimal_round_trip(mantissa: i64, scale: u8) -> bool {
        let d = Decimal::new(mantissa, u32::from(scale % 19));
        Dec50::from_decimal(d).to_decimal() == Ok(d)
    }
}
