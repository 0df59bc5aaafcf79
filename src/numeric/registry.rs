// ============================================================================
// Special-Value Registry
// Computed constants, built once per precision and shared as &'static
// ============================================================================
//
// Statics cannot be generic, so one process-wide map keyed by TypeId holds a
// leaked table per DecFloat instantiation. Lookups take the read lock; a miss
// re-checks and builds under the write lock, so concurrent first access still
// builds exactly one table.

use super::dec_float::DecFloat;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Largest `|p|` served from the power-of-two table.
pub const POW2_TABLE_LIMIT: i64 = 127;

type Entry = &'static (dyn Any + Send + Sync);

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Entry>>> = OnceLock::new();

/// Constants that are computed rather than written as literals.
pub struct SpecialValues<const D: u32, const L: usize> {
    /// `2^p` for `p` in `-127..=127`, indexed by `p + 127`
    pow2: Vec<DecFloat<D, L>>,

    /// `f64::MIN_POSITIVE` (2^-1022)
    pub f64_min_positive: DecFloat<D, L>,

    /// `f64::MAX` ((2^53 - 1) · 2^971)
    pub f64_max: DecFloat<D, L>,

    /// `f32::MIN_POSITIVE` (2^-126)
    pub f32_min_positive: DecFloat<D, L>,

    /// `f32::MAX` ((2^24 - 1) · 2^104)
    pub f32_max: DecFloat<D, L>,
}

impl<const D: u32, const L: usize> SpecialValues<D, L> {
    fn build() -> Self {
        let size = (2 * POW2_TABLE_LIMIT + 1) as usize;
        let center = POW2_TABLE_LIMIT as usize;
        let mut pow2 = vec![DecFloat::<D, L>::ONE; size];

        // Doubling is exact; halving truncates only past the limb capacity
        for i in 1..=center {
            let mut up = pow2[center + i - 1];
            up.mul_u64(2);
            pow2[center + i] = up;

            let mut down = pow2[center - i + 1];
            down.div_u64(2);
            pow2[center - i] = down;
        }

        let table = |p: i64| pow2[(p + POW2_TABLE_LIMIT) as usize];
        let scaled = |mantissa: u64, mut e: i64| {
            let mut value = DecFloat::<D, L>::from_u64(mantissa);
            while e != 0 {
                let step = e.clamp(-POW2_TABLE_LIMIT, POW2_TABLE_LIMIT);
                value.mul_in_place(&table(step));
                e -= step;
            }
            value
        };

        let f64_min_positive = scaled(1, -1022);
        let f64_max = scaled((1 << 53) - 1, 971);
        let f32_min_positive = table(-126);
        let f32_max = scaled((1 << 24) - 1, 104);

        Self {
            pow2,
            f64_min_positive,
            f64_max,
            f32_min_positive,
            f32_max,
        }
    }

    /// `2^p` if `p` is inside the table.
    #[inline]
    pub fn pow2(&self, p: i64) -> Option<DecFloat<D, L>> {
        if (-POW2_TABLE_LIMIT..=POW2_TABLE_LIMIT).contains(&p) {
            Some(self.pow2[(p + POW2_TABLE_LIMIT) as usize])
        } else {
            None
        }
    }
}

/// Shared special values for `DecFloat<D, L>`, built on first use.
pub fn special_values<const D: u32, const L: usize>() -> &'static SpecialValues<D, L> {
    let registry = REGISTRY.get_or_init(|| RwLock::new(HashMap::new()));
    let key = TypeId::of::<SpecialValues<D, L>>();

    let entry = registry.read().get(&key).copied();
    let entry = match entry {
        Some(entry) => entry,
        None => *registry.write().entry(key).or_insert_with(|| {
            debug!(
                digits10 = DecFloat::<D, L>::DIGITS10,
                limbs = L,
                "building special-value table"
            );
            let table: Entry = Box::leak(Box::new(SpecialValues::<D, L>::build()));
            table
        }),
    };

    match entry.downcast_ref::<SpecialValues<D, L>>() {
        Some(values) => values,
        None => unreachable!("registry entries are keyed by their own TypeId"),
    }
}
