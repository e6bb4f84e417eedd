//! # Object Registry
//!
//! The single in-process collection of tracked objects, plus the aggregate
//! system report computed over it.
//!
//! Insertion order is preserved and there is no deletion operation; objects
//! live until process exit.

use crate::object::FluxObject;
use crate::primitives::{REPORT_CRITICAL_THRESHOLD, REPORT_SAFE_THRESHOLD};
use serde::{Deserialize, Serialize};

// =============================================================================
// REGISTRY
// =============================================================================

/// Insertion-ordered collection of [`FluxObject`]s.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    objects: Vec<FluxObject>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object. Identifiers are not checked for uniqueness.
    pub fn add(&mut self, object: impl Into<FluxObject>) {
        self.objects.push(object.into());
    }

    /// Number of tracked objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FluxObject> {
        self.objects.iter()
    }

    /// Iterate objects mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FluxObject> {
        self.objects.iter_mut()
    }

    /// Run an emergency cooldown on every object that supports it.
    ///
    /// Returns the notice lines in insertion order; empty when no object
    /// qualifies (including the empty registry).
    pub fn emergency_cooldown_all(&mut self) -> Vec<String> {
        self.objects
            .iter_mut()
            .filter_map(|object| object.as_stabilizable_mut())
            .map(|stabilizable| stabilizable.emergency_cooldown())
            .collect()
    }

    /// Compute the aggregate system report.
    #[must_use]
    pub fn report(&self) -> SystemReport {
        SystemReport::over(self.objects.iter())
    }
}

// =============================================================================
// SYSTEM REPORT
// =============================================================================

/// Aggregate stability counts with fixed global bands.
///
/// Critical: stability `< 30`. Safe: `>= 60`. Moderate: the remainder.
/// Unlike the per-kind danger bands, these thresholds do not vary by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemReport {
    /// Total number of tracked objects.
    pub total: usize,
    /// Objects below the critical threshold.
    pub critical: usize,
    /// Objects at or above the safe threshold.
    pub safe: usize,
    /// Everything in between.
    pub moderate: usize,
}

impl SystemReport {
    /// Count bands over a sequence of objects.
    pub fn over<'a>(objects: impl Iterator<Item = &'a FluxObject>) -> Self {
        let mut report = Self::default();
        for object in objects {
            report.total += 1;
            let value = object.stability().value();
            if value < REPORT_CRITICAL_THRESHOLD {
                report.critical += 1;
            } else if value >= REPORT_SAFE_THRESHOLD {
                report.safe += 1;
            } else {
                report.moderate += 1;
            }
        }
        report
    }
}

// =============================================================================
// TESTS
// =============================================================================
