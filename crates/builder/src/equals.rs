//! Structural equality over the field chain.

use fieldwise_core::{IntrospectResult, Reflected, Value, layers};

use crate::exclusions::equality_exclusions;
use crate::hash_code::double_bits;

/// Compare two objects field by field, skipping `excluded` names.
///
/// Two absent objects are equal, an absent and a present one are not. Objects of
/// different runtime types are never equal. The same object compared with
/// itself is equal without reading any field.
pub fn reflection_equals(
    lhs: Option<&dyn Reflected>,
    rhs: Option<&dyn Reflected>,
    excluded: &[&str],
) -> IntrospectResult<bool> {
    let (lhs, rhs) = match (lhs, rhs) {
        (None, None) => return Ok(true),
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => return Ok(false),
    };
    if lhs.type_key() != rhs.type_key() {
        return Ok(false);
    }
    if core::ptr::addr_eq(lhs, rhs) {
        return Ok(true);
    }

    for (lhs_layer, rhs_layer) in layers(lhs).zip(layers(rhs)) {
        let rhs_fields = rhs_layer.declared_fields();
        for (lhs_slot, rhs_slot) in lhs_layer.declared_fields().iter().zip(&rhs_fields) {
            if excluded.contains(&lhs_slot.name()) {
                continue;
            }
            if !values_equal(lhs_slot.value()?, rhs_slot.value()?)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Equality of two field values. Nested objects apply their own exclusions.
pub fn values_equal(lhs: &Value<'_>, rhs: &Value<'_>) -> IntrospectResult<bool> {
    let equal = match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Long(a), Value::Long(b)) => a == b,
        (Value::Wide(a), Value::Wide(b)) => a == b,
        (Value::Double(a), Value::Double(b)) => double_bits(*a) == double_bits(*b),
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Decimal(a), Value::Decimal(b)) => a == b,
        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::DateTime(a), Value::DateTime(b)) => a == b,
        (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
        (
            Value::Variant {
                name: a_name,
                ordinal: a_ordinal,
            },
            Value::Variant {
                name: b_name,
                ordinal: b_ordinal,
            },
        ) => a_name == b_name && a_ordinal == b_ordinal,
        (Value::Object(a), Value::Object(b)) => {
            let excluded = equality_exclusions(Some(*a));
            return reflection_equals(Some(*a), Some(*b), &excluded);
        }
        (Value::List(a), Value::List(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b) {
                if !values_equal(x, y)? {
                    return Ok(false);
                }
            }
            true
        }
        (Value::Map(a), Value::Map(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for ((ak, av), (bk, bv)) in a.iter().zip(b) {
                if !values_equal(ak, bk)? || !values_equal(av, bv)? {
                    return Ok(false);
                }
            }
            true
        }
        _ => false,
    };
    Ok(equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldwise_core::Decimal;

    fn eq(a: Value<'_>, b: Value<'_>) -> bool {
        values_equal(&a, &b).unwrap()
    }

    #[test]
    fn nulls_are_equal_only_to_each_other() {
        assert!(eq(Value::Null, Value::Null));
        assert!(!eq(Value::Null, Value::Int(0)));
        assert!(!eq(Value::Text(""), Value::Null));
    }

    #[test]
    fn doubles_compare_by_canonical_bits() {
        assert!(eq(Value::Double(f64::NAN), Value::Double(f64::NAN)));
        assert!(!eq(Value::Double(0.0), Value::Double(-0.0)));
        assert!(eq(Value::Double(1.5), Value::Double(1.5)));
    }

    #[test]
    fn decimals_compare_by_representation() {
        let two = Value::Decimal(Decimal::new(20, 1));
        let two_again = Value::Decimal(Decimal::new(200, 2));
        assert!(!eq(two.clone(), two_again));
        assert!(eq(two.clone(), two));
    }

    #[test]
    fn sequences_and_maps_compare_element_wise() {
        let list = |items: &[i32]| Value::List(items.iter().map(|v| Value::Int(*v)).collect());
        assert!(eq(list(&[1, 2]), list(&[1, 2])));
        assert!(!eq(list(&[1, 2]), list(&[2, 1])));
        assert!(!eq(list(&[1]), list(&[1, 1])));

        let map = Value::Map(vec![(Value::Text("k"), Value::Long(1))]);
        assert!(eq(map.clone(), map.clone()));
        assert!(!eq(map, Value::Map(vec![(Value::Text("k"), Value::Long(2))])));
    }

    #[test]
    fn different_shapes_are_unequal() {
        assert!(!eq(Value::Int(1), Value::Long(1)));
        assert!(!eq(Value::Text("1"), Value::Int(1)));
    }

    #[test]
    fn absent_operands() {
        assert_eq!(reflection_equals(None, None, &[]), Ok(true));
    }
}
