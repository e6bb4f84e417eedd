//! # Core Type Definitions
//!
//! This module contains the foundation types for the Fluxmon domain:
//! - Object identifiers (`ObjectId`)
//! - The bounded stability score (`Stability`)
//! - Error types (`FluxmonError`)
//!
//! ## Invariant
//!
//! A `Stability` value is always finite and within `[0, 100]`. The only way
//! to obtain one is through the validating constructor, so every holder of a
//! `Stability` can rely on the bound without re-checking it.

use crate::primitives::{DEFAULT_STABILITY, STABILITY_MAX, STABILITY_MIN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// OBJECT IDENTIFIER
// =============================================================================

/// Identifier for a tracked containment object.
///
/// Unique by convention only; the registry does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub String);

impl ObjectId {
    /// Create a new identifier from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// STABILITY
// =============================================================================

/// Bounded stability score of a containment object.
///
/// Invariant: `0 <= value <= 100`, always finite. Construction outside the
/// range fails with [`FluxmonError::InvalidStability`]; an existing value is
/// therefore never clobbered by a rejected update.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Stability(f64);

impl Stability {
    /// Create a stability score, validating the range.
    pub fn new(value: f64) -> Result<Self, FluxmonError> {
        if value.is_finite() && (STABILITY_MIN..=STABILITY_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FluxmonError::InvalidStability { value })
        }
    }

    /// Get the raw score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Raise the score by `increment`, clamped at the ceiling.
    ///
    /// Idempotent at 100: boosting a maxed-out score is a no-op.
    #[must_use]
    pub fn boost(self, increment: f64) -> Self {
        Self((self.0 + increment).min(STABILITY_MAX))
    }
}

impl Default for Stability {
    /// The stability every object starts with.
    fn default() -> Self {
        Self(DEFAULT_STABILITY)
    }
}

impl TryFrom<f64> for Stability {
    type Error = FluxmonError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stability> for f64 {
    fn from(stability: Stability) -> Self {
        stability.0
    }
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Fluxmon system.
///
/// - No silent failures
/// - Use `Result<T, FluxmonError>` for fallible operations
/// - The core should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum FluxmonError {
    /// A stability score outside `[0, 100]` (or non-finite) was supplied.
    #[error("stability must be between 0 and 100, got {value}")]
    InvalidStability {
        /// The offending score.
        value: f64,
    },

    /// An I/O error occurred at the console boundary.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FluxmonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stability_accepts_bounds() {
        assert_eq!(Stability::new(0.0).map(Stability::value).ok(), Some(0.0));
        assert_eq!(
            Stability::new(100.0).map(Stability::value).ok(),
            Some(100.0)
        );
    }

    #[test]
    fn stability_rejects_out_of_range() {
        assert!(Stability::new(-0.001).is_err());
        assert!(Stability::new(100.001).is_err());
        assert!(Stability::new(f64::NAN).is_err());
        assert!(Stability::new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_stability_is_fifty() {
        assert_eq!(Stability::default().value(), 50.0);
    }

    #[test]
    fn boost_clamps_at_ceiling() {
        let near_max = Stability::new(95.0).expect("in range");
        assert_eq!(near_max.boost(20.0).value(), 100.0);

        let maxed = Stability::new(100.0).expect("in range");
        assert_eq!(maxed.boost(20.0).value(), 100.0);
    }

    #[test]
    fn invalid_stability_names_offending_value() {
        let err = Stability::new(150.0).expect_err("out of range");
        assert_eq!(
            err.to_string(),
            "stability must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn stability_deserialization_validates() {
        let ok: Result<Stability, _> = serde_json::from_str("42.5");
        assert_eq!(ok.expect("in range").value(), 42.5);

        let bad: Result<Stability, _> = serde_json::from_str("120.0");
        assert!(bad.is_err());
    }
}
