//! Std trait glue for introspectable types.

/// Implements `PartialEq`, `Hash`, `PartialOrd` and `Display` for an
/// [`Introspect`](fieldwise_core::Introspect) type by delegating to the
/// structural operations.
///
/// Failures degrade to the trait's neutral answer: unequal, no ordering,
/// hash `0`, and `fmt::Error` when rendering.
#[macro_export]
macro_rules! impl_structural_traits {
    ($ty:ty) => {
        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                matches!($crate::equals(Some(self), Some(other)), Ok(true))
            }
        }

        impl ::core::hash::Hash for $ty {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::hash_code(Some(self)).unwrap_or_default());
            }
        }

        impl ::core::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                $crate::compare(self, other).ok()
            }
        }

        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let rendered = $crate::to_string(Some(self)).map_err(|_| ::core::fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    };
}
