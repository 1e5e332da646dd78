//! Marker policy: which field names the generic builders must skip.

use fieldwise_core::{FieldKind, Marker, Markers, Reflected, layers};

/// Names of the fields declared on `object`'s own type that carry
/// [`Marker::ExcludeFromEquality`].
///
/// Only the most-derived type is consulted; the names are then skipped in every
/// layer of the chain. An absent object has no exclusions.
pub fn equality_exclusions(object: Option<&dyn Reflected>) -> Vec<&'static str> {
    object
        .map(|object| {
            object
                .declared_fields()
                .iter()
                .filter(|slot| slot.has(Marker::ExcludeFromEquality))
                .map(|slot| slot.name())
                .collect()
        })
        .unwrap_or_default()
}

/// Names of the fields, over the whole chain, that are left out of the
/// rendering (see [`is_string_excluded`]).
pub fn string_exclusions(object: Option<&dyn Reflected>) -> Vec<&'static str> {
    let Some(object) = object else {
        return Vec::new();
    };

    layers(object)
        .flat_map(|layer| layer.declared_fields())
        .filter(|slot| is_string_excluded(slot.kind(), slot.markers()))
        .map(|slot| slot.name())
        .collect()
}

/// Exclusion is checked before inclusion, so a field carrying both is excluded.
/// Unmarked fields are kept only when their kind is default-includable.
pub fn is_string_excluded(kind: FieldKind, markers: Markers) -> bool {
    if markers.has(Marker::ExcludeFromString) {
        return true;
    }
    if markers.has(Marker::IncludeInString) {
        return false;
    }
    !kind.is_default_includable()
}
