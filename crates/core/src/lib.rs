//! `fieldwise-core` — introspection model for structural operations.
//!
//! Types declare a static field table ([`Descriptor`]) instead of being
//! inspected at runtime. Each field carries its declared [`FieldKind`] and a set
//! of [`Markers`]; base types are linked by reference and walked with [`layers`].

pub mod decimal;
pub mod descriptor;
pub mod error;
pub mod introspect;
pub mod kind;
pub mod reflect;
pub mod value;

mod macros;

pub use decimal::Decimal;
pub use descriptor::{Descriptor, DescriptorBuilder, FieldInfo, FieldSlot, Marker, Markers};
pub use error::{IntrospectError, IntrospectResult};
pub use introspect::{Introspect, Reflected, layers};
pub use kind::{FieldKind, SimpleType};
pub use reflect::Reflect;
pub use value::Value;
