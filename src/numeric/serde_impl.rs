// ============================================================================
// Serde Support
// Values travel as round-trip strings; numbers are accepted on input
// ============================================================================

use super::dec_float::DecFloat;
use crate::domain::FormatOptions;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<const D: u32, const L: usize> Serialize for DecFloat<D, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_with(&FormatOptions::round_trip()))
    }
}

struct DecFloatVisitor<const D: u32, const L: usize>(PhantomData<DecFloat<D, L>>);

impl<'de, const D: u32, const L: usize> Visitor<'de> for DecFloatVisitor<D, L> {
    type Value = DecFloat<D, L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|err| E::custom(format!("invalid decimal '{v}': {err}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DecFloat::from_u64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DecFloat::from_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DecFloat::from_f64(v))
    }
}

impl<'de, const D: u32, const L: usize> Deserialize<'de> for DecFloat<D, L> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_any(DecFloatVisitor(PhantomData))
    }
}
