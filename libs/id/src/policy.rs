//! Parsing policy.
//!
//! The number format changed over time: older issuers still place an `8` in
//! the decommissioned race digit, newer ones do not guarantee it. The policy
//! decides whether that digit is enforced, and fixes the minimum age used to
//! pick the century of a two-digit birth year.

use serde::{Deserialize, Serialize};

/// Default minimum age for holding an identity number.
pub const DEFAULT_MINIMUM_AGE: u16 = 16;

/// Value the decommissioned digit must hold when it is enforced.
pub const DECOMMISSIONED_DIGIT: u8 = 8;

/// Rules applied while parsing an identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsePolicy {
    /// Reject numbers whose decommissioned digit (index 11) is not `8`.
    pub enforce_decommissioned_field: bool,

    /// Youngest age at which a number can be held, in years.
    pub minimum_age: u16,
}

impl ParsePolicy {
    /// Policy that also enforces the decommissioned digit.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enforce_decommissioned_field: true,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }

    /// Returns a copy with the given minimum age.
    #[must_use]
    pub const fn with_minimum_age(mut self, minimum_age: u16) -> Self {
        self.minimum_age = minimum_age;
        self
    }
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            enforce_decommissioned_field: false,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}
