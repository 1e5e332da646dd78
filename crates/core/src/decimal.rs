//! Fixed-point decimal value (unscaled integer + scale).

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntrospectError;

/// Decimal number represented as `unscaled * 10^-scale`.
///
/// Equality is representational: `2.0` and `2.00` are different values, while
/// [`Decimal::cmp_numeric`] orders them as equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    unscaled: i128,
    scale: u32,
}

impl Decimal {
    pub const fn new(unscaled: i128, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Numeric comparison, ignoring representation scale.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.unscaled.cmp(&other.unscaled),
            Ordering::Less => match rescale(self.unscaled, other.scale - self.scale) {
                Some(lhs) => lhs.cmp(&other.unscaled),
                None => overflow_sign(self.unscaled),
            },
            Ordering::Greater => match rescale(other.unscaled, self.scale - other.scale) {
                Some(rhs) => self.unscaled.cmp(&rhs),
                None => overflow_sign(other.unscaled).reverse(),
            },
        }
    }
}

fn rescale(unscaled: i128, by: u32) -> Option<i128> {
    if unscaled == 0 {
        return Some(0);
    }
    10i128.checked_pow(by)?.checked_mul(unscaled)
}

// A rescale only overflows when its magnitude exceeds every representable
// unscaled value, so the sign alone decides.
fn overflow_sign(unscaled: i128) -> Ordering {
    if unscaled < 0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.unscaled.unsigned_abs().to_string();
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl FromStr for Decimal {
    type Err = IntrospectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(IntrospectError::invalid_decimal(format!("`{s}` has no digits")));
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return Err(IntrospectError::invalid_decimal(format!(
                "`{s}` contains non-digit characters"
            )));
        }

        let digits = format!("{int_part}{frac_part}");
        let magnitude = i128::from_str(&digits)
            .map_err(|e| IntrospectError::invalid_decimal(format!("`{s}`: {e}")))?;
        let scale = u32::try_from(frac_part.len())
            .map_err(|e| IntrospectError::invalid_decimal(format!("`{s}`: {e}")))?;

        Ok(Self::new(if negative { -magnitude } else { magnitude }, scale))
    }
}
