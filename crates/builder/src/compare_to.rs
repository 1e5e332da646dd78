//! Structural three-way ordering over the field chain.

use core::cmp::Ordering;

use fieldwise_core::{IntrospectError, IntrospectResult, Reflected, Value, layers};

use crate::exclusions::equality_exclusions;
use crate::hash_code::double_bits;

/// Order two objects lexicographically by their fields, skipping `excluded`
/// names. The first unequal field decides.
///
/// Both objects must share a runtime type.
pub fn reflection_compare(
    lhs: &dyn Reflected,
    rhs: &dyn Reflected,
    excluded: &[&str],
) -> IntrospectResult<Ordering> {
    if lhs.type_key() != rhs.type_key() {
        return Err(IntrospectError::type_mismatch(lhs.type_name(), rhs.type_name()));
    }
    if core::ptr::addr_eq(lhs, rhs) {
        return Ok(Ordering::Equal);
    }

    for (lhs_layer, rhs_layer) in layers(lhs).zip(layers(rhs)) {
        let rhs_fields = rhs_layer.declared_fields();
        for (lhs_slot, rhs_slot) in lhs_layer.declared_fields().iter().zip(&rhs_fields) {
            if excluded.contains(&lhs_slot.name()) {
                continue;
            }
            let ordering = compare_values(lhs_slot.name(), lhs_slot.value()?, rhs_slot.value()?)?;
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
    }
    Ok(Ordering::Equal)
}

/// Ordering of two values of `field`.
///
/// Null sorts first. Maps have no ordering; values of different shapes cannot be
/// related.
pub fn compare_values(
    field: &'static str,
    lhs: &Value<'_>,
    rhs: &Value<'_>,
) -> IntrospectResult<Ordering> {
    let ordering = match (lhs, rhs) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Map(_), _) | (_, Value::Map(_)) => {
            return Err(IntrospectError::unsupported_field_type(field, "map"));
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Char(a), Value::Char(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Long(a), Value::Long(b)) => a.cmp(b),
        (Value::Wide(a), Value::Wide(b)) => a.cmp(b),
        (Value::Double(a), Value::Double(b)) => {
            f64::from_bits(double_bits(*a)).total_cmp(&f64::from_bits(double_bits(*b)))
        }
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Decimal(a), Value::Decimal(b)) => a.cmp_numeric(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Variant { ordinal: a, .. }, Value::Variant { ordinal: b, .. }) => a.cmp(b),
        (Value::Object(a), Value::Object(b)) => {
            let excluded = equality_exclusions(Some(*a));
            return reflection_compare(*a, *b, &excluded);
        }
        (Value::List(a), Value::List(b)) => {
            if a.len() != b.len() {
                return Ok(a.len().cmp(&b.len()));
            }
            for (x, y) in a.iter().zip(b) {
                let ordering = compare_values(field, x, y)?;
                if ordering != Ordering::Equal {
                    return Ok(ordering);
                }
            }
            Ordering::Equal
        }
        (a, b) => return Err(IntrospectError::type_mismatch(a.label(), b.label())),
    };
    Ok(ordering)
}
