//! Field read-outs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::decimal::Decimal;
use crate::introspect::Reflected;

/// The current value of one field, borrowed from the target object.
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Char(char),
    Int(i32),
    Long(i64),
    /// Integers wider than (or unsigned beyond) `i64`.
    Wide(i128),
    Double(f64),
    Text(&'a str),
    Decimal(Decimal),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Timestamp(NaiveDateTime),
    /// A fieldless enum variant.
    Variant { name: &'static str, ordinal: u32 },
    Object(&'a dyn Reflected),
    List(Vec<Value<'a>>),
    /// Entries in iteration order of an ordered map.
    Map(Vec<(Value<'a>, Value<'a>)>),
}

impl Value<'_> {
    /// Short label of the value's shape, used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Wide(_) => "wide integer",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Decimal(_) => "decimal",
            Value::Date(_) => "date",
            Value::DateTime(_) => "date-time",
            Value::Timestamp(_) => "timestamp",
            Value::Variant { .. } => "enumeration",
            Value::Object(_) => "object",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl core::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Long(v) => f.debug_tuple("Long").field(v).finish(),
            Value::Wide(v) => f.debug_tuple("Wide").field(v).finish(),
            Value::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Decimal(v) => f.debug_tuple("Decimal").field(v).finish(),
            Value::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Value::DateTime(v) => f.debug_tuple("DateTime").field(v).finish(),
            Value::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            Value::Variant { name, ordinal } => f
                .debug_struct("Variant")
                .field("name", name)
                .field("ordinal", ordinal)
                .finish(),
            Value::Object(object) => f.debug_tuple("Object").field(&object.type_name()).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}
