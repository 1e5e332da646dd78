//! Introspection error model.

use thiserror::Error;

/// Result type used by every introspection operation.
pub type IntrospectResult<T> = Result<T, IntrospectError>;

/// Failure raised while reading or relating field values.
///
/// Nothing is recovered internally: whatever the descriptor layer cannot do is
/// reported to the caller as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntrospectError {
    /// A restricted field had to be read.
    #[error("access denied: field `{field}` of `{type_name}` cannot be read")]
    AccessDenied {
        type_name: &'static str,
        field: &'static str,
    },

    /// Two operands (or two field values) do not share a comparable shape.
    #[error("type mismatch: cannot compare `{lhs}` with `{rhs}`")]
    TypeMismatch { lhs: String, rhs: String },

    /// A field value has no defined ordering.
    #[error("unsupported field type: field `{field}` holds a {value_type}, which has no ordering")]
    UnsupportedFieldType {
        field: &'static str,
        value_type: &'static str,
    },

    /// Hash seeds must be odd numbers.
    #[error("invalid hash seed: {name} must be odd (got {value})")]
    InvalidHashSeed { name: &'static str, value: i32 },

    /// A decimal literal failed to parse.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
}

impl IntrospectError {
    pub fn access_denied(type_name: &'static str, field: &'static str) -> Self {
        Self::AccessDenied { type_name, field }
    }

    pub fn type_mismatch(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::TypeMismatch {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn unsupported_field_type(field: &'static str, value_type: &'static str) -> Self {
        Self::UnsupportedFieldType { field, value_type }
    }

    pub fn invalid_hash_seed(name: &'static str, value: i32) -> Self {
        Self::InvalidHashSeed { name, value }
    }

    pub fn invalid_decimal(msg: impl Into<String>) -> Self {
        Self::InvalidDecimal(msg.into())
    }
}
