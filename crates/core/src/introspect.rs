//! Introspection seams: typed descriptors and their object-safe view.

use core::any::TypeId;

use crate::descriptor::{Descriptor, FieldSlot};

/// A type with a static field descriptor.
///
/// The descriptor is declared once per type (usually through
/// [`introspect!`](crate::introspect)) and cached for the life of the process.
///
/// ```ignore
/// struct Person {
///     name: String,
///     age: i32,
///     cache: Vec<u8>,
/// }
///
/// fieldwise_core::introspect! {
///     Person {
///         name,
///         age,
///         #[exclude_from_equality]
///         #[exclude_from_string]
///         cache,
///     }
/// }
/// ```
pub trait Introspect: Sized + 'static {
    fn descriptor() -> &'static Descriptor<Self>;
}

/// Type-erased view of an introspectable object.
///
/// Each object exposes only the fields its own type declares; inherited fields
/// are reached by following [`Reflected::parent`] (see [`layers`]).
pub trait Reflected {
    fn type_name(&self) -> &'static str;

    /// Identity of the runtime type; two objects are only ever related
    /// field-by-field when their keys match.
    fn type_key(&self) -> TypeId;

    /// Own declared fields with their current values, in declaration order.
    fn declared_fields(&self) -> Vec<FieldSlot<'_>>;

    /// The embedded base object, if the type extends one.
    fn parent(&self) -> Option<&dyn Reflected>;
}

impl<T: Introspect> Reflected for T {
    fn type_name(&self) -> &'static str {
        T::descriptor().type_name()
    }

    fn type_key(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn declared_fields(&self) -> Vec<FieldSlot<'_>> {
        T::descriptor().slots(self)
    }

    fn parent(&self) -> Option<&dyn Reflected> {
        T::descriptor().base_of(self)
    }
}

/// The object itself, then its base, then its base's base, and so on.
pub fn layers<'a>(target: &'a dyn Reflected) -> impl Iterator<Item = &'a dyn Reflected> + 'a {
    std::iter::successors(Some(target), |layer| layer.parent())
}
