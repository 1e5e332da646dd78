//! Structural hash code over the field chain.

use chrono::Datelike;

use fieldwise_core::{IntrospectResult, Reflected, Value, layers};

use crate::config::HashSeed;
use crate::exclusions::equality_exclusions;

/// Hash `object` field by field, skipping `excluded` names.
///
/// Fields are folded derived-type first, in declaration order. An absent object
/// hashes to the seed's initial value.
pub fn reflection_hash_code(
    object: Option<&dyn Reflected>,
    excluded: &[&str],
    seed: HashSeed,
) -> IntrospectResult<i32> {
    let seed = seed.validate()?;
    let Some(object) = object else {
        return Ok(seed.initial);
    };

    let mut builder = HashCodeBuilder::new(seed);
    for layer in layers(object) {
        for slot in layer.declared_fields() {
            if excluded.contains(&slot.name()) {
                continue;
            }
            builder.append(slot.value()?)?;
        }
    }
    Ok(builder.finish())
}

/// Running accumulator: `total = total * multiplier + hash(value)`.
#[derive(Debug, Clone, Copy)]
pub struct HashCodeBuilder {
    seed: HashSeed,
    total: i32,
}

impl HashCodeBuilder {
    pub fn new(seed: HashSeed) -> Self {
        Self {
            seed,
            total: seed.initial,
        }
    }

    /// Fold one field value. Sequences fold every element in turn.
    pub fn append(&mut self, value: &Value<'_>) -> IntrospectResult<&mut Self> {
        match value {
            Value::List(items) => {
                for item in items {
                    self.append(item)?;
                }
            }
            other => {
                let hash = value_hash(other, self.seed)?;
                self.total = self.total.wrapping_mul(self.seed.multiplier).wrapping_add(hash);
            }
        }
        Ok(self)
    }

    pub fn finish(&self) -> i32 {
        self.total
    }
}

/// Hash of a single value, independent of any accumulator.
pub fn value_hash(value: &Value<'_>, seed: HashSeed) -> IntrospectResult<i32> {
    let hash = match value {
        Value::Null => 0,
        Value::Bool(v) => {
            if *v {
                0
            } else {
                1
            }
        }
        Value::Char(v) => *v as i32,
        Value::Int(v) => *v,
        Value::Long(v) => long_hash(*v),
        Value::Wide(v) => wide_hash(*v),
        Value::Double(v) => long_hash(double_bits(*v) as i64),
        Value::Text(v) => text_hash(v),
        Value::Decimal(v) => wide_hash(v.unscaled())
            .wrapping_mul(31)
            .wrapping_add(v.scale() as i32),
        Value::Date(v) => v.num_days_from_ce(),
        Value::DateTime(v) => long_hash(v.timestamp_millis()),
        Value::Timestamp(v) => long_hash(v.and_utc().timestamp_millis()),
        Value::Variant { name, .. } => text_hash(name),
        Value::Object(object) => {
            let excluded = equality_exclusions(Some(*object));
            reflection_hash_code(Some(*object), &excluded, seed)?
        }
        Value::List(items) => {
            let mut hash: i32 = 1;
            for item in items {
                hash = hash.wrapping_mul(31).wrapping_add(value_hash(item, seed)?);
            }
            hash
        }
        Value::Map(entries) => {
            let mut hash: i32 = 0;
            for (key, value) in entries {
                hash = hash.wrapping_add(value_hash(key, seed)? ^ value_hash(value, seed)?);
            }
            hash
        }
    };
    Ok(hash)
}

/// Bit pattern of a double with every NaN collapsed to one canonical value.
pub(crate) fn double_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn long_hash(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

fn wide_hash(value: i128) -> i32 {
    long_hash(((value >> 64) as i64) ^ (value as i64))
}

/// `31 * h + unit` over UTF-16 code units.
fn text_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
