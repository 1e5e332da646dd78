//! Declared field kinds and the default-includable type set.

use serde::{Deserialize, Serialize};

/// Simple value types whose fields are rendered by default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleType {
    Text,
    Integer,
    Double,
    Long,
    Decimal,
    Date,
    DateTime,
    Timestamp,
}

impl SimpleType {
    /// The full default-includable set.
    pub const ALL: [SimpleType; 8] = [
        SimpleType::Text,
        SimpleType::Integer,
        SimpleType::Double,
        SimpleType::Long,
        SimpleType::Decimal,
        SimpleType::Date,
        SimpleType::DateTime,
        SimpleType::Timestamp,
    ];
}

/// Declared type class of a field, independent of its current value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `bool`, `char` and the numeric primitives outside the simple set.
    Primitive,
    /// A fieldless enum.
    Enumeration,
    /// A member of the default-includable set.
    Simple(SimpleType),
    /// A custom value type that stands in for a member of the simple set.
    Implements(SimpleType),
    /// A nested introspectable object.
    Object,
    /// `Vec`, slices and arrays.
    Sequence,
    Map,
}

impl FieldKind {
    /// Whether a field of this kind is rendered when it carries no marker.
    pub fn is_default_includable(self) -> bool {
        match self {
            FieldKind::Primitive
            | FieldKind::Enumeration
            | FieldKind::Simple(_)
            | FieldKind::Implements(_) => true,
            FieldKind::Object | FieldKind::Sequence | FieldKind::Map => false,
        }
    }
}
