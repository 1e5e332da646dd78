//! `Reflect`: how a Rust type appears when used as a field.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::decimal::Decimal;
use crate::kind::{FieldKind, SimpleType};
use crate::value::Value;

/// A type that can be stored in an introspected field.
///
/// `field_kind` is the declared type class (it drives the default rendering
/// policy), `reflect` reads the current value.
///
/// Introspectable structs get this through [`reflect_object!`](crate::reflect_object)
/// (or [`introspect!`](crate::introspect)), fieldless enums through
/// [`reflect_enum!`](crate::reflect_enum). Custom value types implement it by hand,
/// usually with [`FieldKind::Implements`].
pub trait Reflect {
    fn field_kind() -> FieldKind;

    fn reflect(&self) -> Value<'_>;
}

macro_rules! impl_reflect_scalar {
    ($t:ty, $kind:expr, |$v:ident| $value:expr) => {
        impl Reflect for $t {
            fn field_kind() -> FieldKind {
                $kind
            }

            fn reflect(&self) -> Value<'_> {
                let $v = *self;
                $value
            }
        }
    };
}

impl_reflect_scalar!(bool, FieldKind::Primitive, |v| Value::Bool(v));
impl_reflect_scalar!(char, FieldKind::Primitive, |v| Value::Char(v));
impl_reflect_scalar!(i8, FieldKind::Primitive, |v| Value::Int(i32::from(v)));
impl_reflect_scalar!(i16, FieldKind::Primitive, |v| Value::Int(i32::from(v)));
impl_reflect_scalar!(u8, FieldKind::Primitive, |v| Value::Int(i32::from(v)));
impl_reflect_scalar!(u16, FieldKind::Primitive, |v| Value::Int(i32::from(v)));
impl_reflect_scalar!(i32, FieldKind::Simple(SimpleType::Integer), |v| Value::Int(v));
impl_reflect_scalar!(u32, FieldKind::Primitive, |v| Value::Long(i64::from(v)));
impl_reflect_scalar!(i64, FieldKind::Simple(SimpleType::Long), |v| Value::Long(v));
impl_reflect_scalar!(u64, FieldKind::Primitive, |v| Value::Wide(i128::from(v)));
impl_reflect_scalar!(i128, FieldKind::Primitive, |v| Value::Wide(v));
impl_reflect_scalar!(isize, FieldKind::Primitive, |v| Value::Wide(v as i128));
impl_reflect_scalar!(usize, FieldKind::Primitive, |v| Value::Wide(v as i128));
impl_reflect_scalar!(f32, FieldKind::Primitive, |v| Value::Double(f64::from(v)));
impl_reflect_scalar!(f64, FieldKind::Simple(SimpleType::Double), |v| Value::Double(v));
impl_reflect_scalar!(Decimal, FieldKind::Simple(SimpleType::Decimal), |v| Value::Decimal(v));
impl_reflect_scalar!(NaiveDate, FieldKind::Simple(SimpleType::Date), |v| Value::Date(v));
impl_reflect_scalar!(DateTime<Utc>, FieldKind::Simple(SimpleType::DateTime), |v| {
    Value::DateTime(v)
});
impl_reflect_scalar!(NaiveDateTime, FieldKind::Simple(SimpleType::Timestamp), |v| {
    Value::Timestamp(v)
});

impl Reflect for str {
    fn field_kind() -> FieldKind {
        FieldKind::Simple(SimpleType::Text)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Reflect for &str {
    fn field_kind() -> FieldKind {
        FieldKind::Simple(SimpleType::Text)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Reflect for String {
    fn field_kind() -> FieldKind {
        FieldKind::Simple(SimpleType::Text)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Text(self.as_str())
    }
}

/// An absent value reads as [`Value::Null`]; the declared kind is the inner one.
impl<T: Reflect> Reflect for Option<T> {
    fn field_kind() -> FieldKind {
        T::field_kind()
    }

    fn reflect(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.reflect(),
            None => Value::Null,
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn field_kind() -> FieldKind {
        T::field_kind()
    }

    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect> Reflect for [T] {
    fn field_kind() -> FieldKind {
        FieldKind::Sequence
    }

    fn reflect(&self) -> Value<'_> {
        Value::List(self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn field_kind() -> FieldKind {
        FieldKind::Sequence
    }

    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn field_kind() -> FieldKind {
        FieldKind::Sequence
    }

    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn field_kind() -> FieldKind {
        FieldKind::Map
    }

    fn reflect(&self) -> Value<'_> {
        Value::Map(self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect())
    }
}
