//! Declarative registration of introspectable types.

/// Implements [`Reflect`](crate::Reflect) for an [`Introspect`](crate::Introspect)
/// type so it can be nested as a field of another introspectable type.
#[macro_export]
macro_rules! reflect_object {
    ($ty:ty) => {
        impl $crate::Reflect for $ty {
            fn field_kind() -> $crate::FieldKind {
                $crate::FieldKind::Object
            }

            fn reflect(&self) -> $crate::Value<'_> {
                $crate::Value::Object(self)
            }
        }
    };
}

/// Implements [`Reflect`](crate::Reflect) for a fieldless enum. Every variant
/// must be listed; the discriminant (declaration position for enums without
/// explicit discriminants) is the ordinal.
///
/// ```ignore
/// enum Status { Active, Suspended }
/// fieldwise_core::reflect_enum!(Status { Active, Suspended });
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn field_kind() -> $crate::FieldKind {
                $crate::FieldKind::Enumeration
            }

            fn reflect(&self) -> $crate::Value<'_> {
                match *self {
                    $($ty::$variant => $crate::Value::Variant {
                        name: stringify!($variant),
                        ordinal: $ty::$variant as u32,
                    },)+
                }
            }
        }
    };
}

/// Declares the descriptor of a struct and makes it nestable.
///
/// Fields are listed in declaration order. Markers are written as attributes
/// named after the builder methods (`exclude_from_equality`,
/// `exclude_from_string`, `include_in_string`). `extends <field>` links the
/// embedded base object.
///
/// ```ignore
/// fieldwise_core::introspect! {
///     Employee extends person {
///         salary,
///         #[exclude_from_equality]
///         last_login,
///     }
/// }
/// ```
#[macro_export]
macro_rules! introspect {
    (
        $ty:ident $(extends $base:ident)? {
            $( $(#[$marker:ident])* $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::Introspect for $ty {
            fn descriptor() -> &'static $crate::Descriptor<Self> {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::Descriptor<$ty>> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    let builder = $crate::Descriptor::<$ty>::describe(stringify!($ty));
                    $( let builder = builder.extends(|target| &target.$base); )?
                    $(
                        let builder = builder.field(stringify!($field), |target| &target.$field);
                        $( let builder = builder.$marker(stringify!($field)); )*
                    )*
                    builder.build()
                })
            }
        }

        $crate::reflect_object!($ty);
    };
}
