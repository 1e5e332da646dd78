//! Builder configuration: hash seeds and rendering style.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

use fieldwise_core::{IntrospectError, IntrospectResult};

/// Environment variable selecting the rendering style (e.g. `single_line`).
pub const STYLE_ENV: &str = "FIELDWISE_TO_STRING_STYLE";
/// Environment variable overriding the initial hash accumulator.
pub const HASH_INITIAL_ENV: &str = "FIELDWISE_HASH_INITIAL";
/// Environment variable overriding the hash multiplier.
pub const HASH_MULTIPLIER_ENV: &str = "FIELDWISE_HASH_MULTIPLIER";

/// Seeds of the running hash accumulator (`acc = acc * multiplier + h`).
///
/// Both numbers must be odd.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashSeed {
    pub initial: i32,
    pub multiplier: i32,
}

impl HashSeed {
    pub fn new(initial: i32, multiplier: i32) -> IntrospectResult<Self> {
        Self {
            initial,
            multiplier,
        }
        .validate()
    }

    pub fn validate(self) -> IntrospectResult<Self> {
        if self.initial % 2 == 0 {
            return Err(IntrospectError::invalid_hash_seed("initial", self.initial));
        }
        if self.multiplier % 2 == 0 {
            return Err(IntrospectError::invalid_hash_seed(
                "multiplier",
                self.multiplier,
            ));
        }
        Ok(self)
    }
}

impl Default for HashSeed {
    fn default() -> Self {
        Self {
            initial: 17,
            multiplier: 37,
        }
    }
}

/// Layout of a rendered object.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToStringStyle {
    /// `Person[` / `  name=Ann` / `]`, one field per line.
    #[default]
    MultiLine,
    /// `Person[name=Ann,age=30]`
    SingleLine,
    /// `Person[Ann,30]`
    NoFieldNames,
    /// `Ann,30`
    Simple,
    /// `{"name":"Ann","age":30}`
    Json,
}

impl ToStringStyle {
    pub fn parse(raw: &str) -> Result<Self, String> {
        Self::deserialize(raw.trim().into_deserializer())
            .map_err(|e: serde::de::value::Error| e.to_string())
    }
}

/// Configuration carried by a [`StructuralBuilder`](crate::StructuralBuilder).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub hash_seed: HashSeed,
    pub style: ToStringStyle,
}

impl BuilderConfig {
    /// Read overrides from the process environment.
    ///
    /// Invalid values are reported with a warning and replaced by defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BuilderConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let style = read(&lookup, STYLE_ENV, defaults.style, ToStringStyle::parse);
        let initial = read(&lookup, HASH_INITIAL_ENV, defaults.hash_seed.initial, parse_i32);
        let multiplier = read(
            &lookup,
            HASH_MULTIPLIER_ENV,
            defaults.hash_seed.multiplier,
            parse_i32,
        );

        let hash_seed = HashSeed::new(initial, multiplier).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid hash seed; using defaults");
            defaults.hash_seed
        });

        Self { hash_seed, style }
    }
}

fn parse_i32(raw: &str) -> Result<i32, String> {
    raw.trim().parse::<i32>().map_err(|e| e.to_string())
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> T {
    match lookup(key) {
        Some(raw) => parse(&raw).unwrap_or_else(|reason| {
            tracing::warn!(key, %reason, "invalid configuration value; using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_classic_seeds() {
        let config = BuilderConfig::default();
        assert_eq!(config.hash_seed, HashSeed::new(17, 37).unwrap());
        assert_eq!(config.style, ToStringStyle::MultiLine);
    }

    #[test]
    fn even_seeds_are_rejected() {
        assert_eq!(
            HashSeed::new(16, 37).unwrap_err(),
            IntrospectError::invalid_hash_seed("initial", 16)
        );
        assert_eq!(
            HashSeed::new(17, -4).unwrap_err(),
            IntrospectError::invalid_hash_seed("multiplier", -4)
        );
        assert!(HashSeed::new(-3, 31).is_ok());
    }

    #[test]
    fn style_parses_snake_case_names() {
        assert_eq!(ToStringStyle::parse("single_line"), Ok(ToStringStyle::SingleLine));
        assert_eq!(ToStringStyle::parse(" json "), Ok(ToStringStyle::Json));
        assert!(ToStringStyle::parse("fancy").is_err());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = BuilderConfig::from_lookup(lookup_from(&[
            (STYLE_ENV, "no_field_names"),
            (HASH_INITIAL_ENV, "31"),
            (HASH_MULTIPLIER_ENV, "41"),
        ]));
        assert_eq!(config.style, ToStringStyle::NoFieldNames);
        assert_eq!(config.hash_seed, HashSeed::new(31, 41).unwrap());
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        let config = BuilderConfig::from_lookup(lookup_from(&[
            (STYLE_ENV, "sparkly"),
            (HASH_INITIAL_ENV, "18"),
        ]));
        assert_eq!(config, BuilderConfig::default());

        let config = BuilderConfig::from_lookup(lookup_from(&[(HASH_MULTIPLIER_ENV, "abc")]));
        assert_eq!(config.hash_seed, HashSeed::default());
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let config: BuilderConfig = serde_json::from_str(r#"{"style":"simple"}"#).unwrap();
        assert_eq!(config.style, ToStringStyle::Simple);
        assert_eq!(config.hash_seed, HashSeed::default());
    }
}
