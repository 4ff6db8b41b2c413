//! Serde helper that writes rupee amounts as plain JSON numbers.
//!
//! `rust_decimal`'s default serializer emits strings; the submission
//! endpoints expect numbers, and whole-rupee amounts must come out as
//! integers (`10000`, not `10000.0`).

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Serializer, ser::Error};

pub fn serialize<S>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(S::Error::custom(format!(
            "amount {value} cannot be represented as a JSON number"
        ))),
    }
}
