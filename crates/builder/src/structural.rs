//! The structural introspector: marker policy on top of the generic builders.

use core::cmp::Ordering;

use fieldwise_core::{IntrospectResult, Reflected};

use crate::compare_to::reflection_compare;
use crate::config::{BuilderConfig, HashSeed, ToStringStyle};
use crate::equals::reflection_equals;
use crate::exclusions::{equality_exclusions, string_exclusions};
use crate::hash_code::reflection_hash_code;
use crate::to_string::reflection_to_string;

/// Structural `equals` / `hash_code` / `compare` / `to_string` with a fixed
/// configuration.
///
/// Every call re-derives its exclusion set from the target's descriptors; the
/// builder itself holds no state beyond its configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StructuralBuilder {
    config: BuilderConfig,
}

impl StructuralBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Exclusions are taken from `lhs`; an absent `lhs` excludes nothing.
    pub fn equals(
        &self,
        lhs: Option<&dyn Reflected>,
        rhs: Option<&dyn Reflected>,
    ) -> IntrospectResult<bool> {
        let excluded = equality_exclusions(lhs);
        tracing::trace!(
            lhs = lhs.map(|o| o.type_name()),
            rhs = rhs.map(|o| o.type_name()),
            excluded = ?excluded,
            "structural equals"
        );
        reflection_equals(lhs, rhs, &excluded)
    }

    pub fn hash_code(&self, object: Option<&dyn Reflected>) -> IntrospectResult<i32> {
        let excluded = equality_exclusions(object);
        tracing::trace!(
            object = object.map(|o| o.type_name()),
            excluded = ?excluded,
            "structural hash code"
        );
        reflection_hash_code(object, &excluded, self.config.hash_seed)
    }

    /// Exclusions are taken from `lhs`.
    pub fn compare(&self, lhs: &dyn Reflected, rhs: &dyn Reflected) -> IntrospectResult<Ordering> {
        let excluded = equality_exclusions(Some(lhs));
        tracing::trace!(
            lhs = lhs.type_name(),
            rhs = rhs.type_name(),
            excluded = ?excluded,
            "structural compare"
        );
        reflection_compare(lhs, rhs, &excluded)
    }

    pub fn to_string(&self, object: Option<&dyn Reflected>) -> IntrospectResult<String> {
        let excluded = string_exclusions(object);
        tracing::trace!(
            object = object.map(|o| o.type_name()),
            excluded = ?excluded,
            style = ?self.config.style,
            "structural to_string"
        );
        reflection_to_string(object, &excluded, self.config.style)
    }
}

/// Structural equality with the default configuration.
pub fn equals(lhs: Option<&dyn Reflected>, rhs: Option<&dyn Reflected>) -> IntrospectResult<bool> {
    StructuralBuilder::default().equals(lhs, rhs)
}

/// Structural hash code with the default seeds (17, 37).
pub fn hash_code(object: Option<&dyn Reflected>) -> IntrospectResult<i32> {
    StructuralBuilder::default().hash_code(object)
}

/// Structural hash code with custom (odd) seeds.
pub fn hash_code_with_seed(
    object: Option<&dyn Reflected>,
    seed: HashSeed,
) -> IntrospectResult<i32> {
    StructuralBuilder::new(BuilderConfig {
        hash_seed: seed,
        ..BuilderConfig::default()
    })
    .hash_code(object)
}

/// Structural ordering.
pub fn compare(lhs: &dyn Reflected, rhs: &dyn Reflected) -> IntrospectResult<Ordering> {
    StructuralBuilder::default().compare(lhs, rhs)
}

/// Multi-line structural rendering.
pub fn to_string(object: Option<&dyn Reflected>) -> IntrospectResult<String> {
    StructuralBuilder::default().to_string(object)
}

pub fn to_string_with_style(
    object: Option<&dyn Reflected>,
    style: ToStringStyle,
) -> IntrospectResult<String> {
    StructuralBuilder::new(BuilderConfig {
        style,
        ..BuilderConfig::default()
    })
    .to_string(object)
}
