//! `fieldwise-builder` — structural equality, hashing, ordering and rendering.
//!
//! The generic builders (`reflection_*`) walk a [`Reflected`] object's field
//! chain and skip a given list of field names. [`StructuralBuilder`] (and the
//! free functions re-exported here) layer the marker policy on top:
//!
//! - fields marked `exclude_from_equality` are skipped by [`equals`],
//!   [`hash_code`] and [`compare`];
//! - [`to_string`] keeps primitives, enumerations and the simple value types,
//!   drops everything else, and lets `exclude_from_string` /
//!   `include_in_string` override that per field.

pub mod compare_to;
pub mod config;
pub mod equals;
pub mod exclusions;
pub mod hash_code;
pub mod structural;
pub mod to_string;

mod traits;

pub use compare_to::reflection_compare;
pub use config::{BuilderConfig, HashSeed, ToStringStyle};
pub use equals::reflection_equals;
pub use exclusions::{equality_exclusions, is_string_excluded, string_exclusions};
pub use hash_code::reflection_hash_code;
pub use structural::{
    StructuralBuilder, compare, equals, hash_code, hash_code_with_seed, to_string,
    to_string_with_style,
};
pub use to_string::reflection_to_string;

pub use fieldwise_core::{
    Decimal, Descriptor, FieldKind, Introspect, IntrospectError, IntrospectResult, Marker,
    Reflect, Reflected, SimpleType, Value, introspect, reflect_enum, reflect_object,
};
