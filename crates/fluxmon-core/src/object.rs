//! # Containment Objects
//!
//! The closed set of tracked object kinds and their threshold logic.
//!
//! ## Design
//!
//! The object kinds form a fixed, closed set, so they are modeled as an enum
//! with payload variants rather than a trait-object hierarchy. Each behavior
//! (status report, danger report, band classification) is a single dispatch
//! function on [`FluxObject`].
//!
//! ## Danger Bands
//!
//! | Kind   | Critical | Middle band        | Safe band |
//! |--------|----------|--------------------|-----------|
//! | Depot  | `< 30`   | `< 60` (moderate)  | `>= 60`   |
//! | Method | `< 20`   | `< 50` (unstable)  | `>= 50`   |
//!
//! The thresholds differ per kind; the aggregate report in
//! [`crate::registry`] uses its own global bands.

use crate::primitives::{
    DEPOT_CRITICAL_THRESHOLD, DEPOT_MODERATE_THRESHOLD, METHOD_CRITICAL_THRESHOLD,
    METHOD_UNSTABLE_THRESHOLD,
};
use crate::types::{FluxmonError, ObjectId, Stability};
use serde::{Deserialize, Serialize};

// =============================================================================
// DANGER BAND
// =============================================================================

/// Threshold-based classification of a single object's stability.
///
/// Ordered from worst to best, so bands compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DangerBand {
    /// Below the kind's critical threshold.
    Critical,
    /// Between the critical threshold and the safe threshold.
    Elevated,
    /// At or above the kind's safe threshold.
    Safe,
}

impl DangerBand {
    /// Classify a score against a pair of thresholds.
    fn classify(stability: Stability, critical_below: f64, safe_from: f64) -> Self {
        let value = stability.value();
        if value < critical_below {
            DangerBand::Critical
        } else if value < safe_from {
            DangerBand::Elevated
        } else {
            DangerBand::Safe
        }
    }
}

// =============================================================================
// DEPOT
// =============================================================================

/// A containment depot with an assigned shift supervisor.
///
/// Depots are the only object kind that supports emergency cooldown
/// (see [`crate::stabilize::Stabilizable`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    id: ObjectId,
    stability: Stability,
    shift_supervisor: String,
}

impl Depot {
    /// Create a depot with the default stability.
    #[must_use]
    pub fn new(id: impl Into<String>, shift_supervisor: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(id),
            stability: Stability::default(),
            shift_supervisor: shift_supervisor.into(),
        }
    }

    /// Get the identifier.
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Replace the identifier. No validation.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = ObjectId::new(id);
    }

    /// Get the stability score.
    #[must_use]
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Set the stability score, enforcing the `[0, 100]` bound.
    ///
    /// On rejection the prior value is left unchanged.
    pub fn set_stability(&mut self, value: f64) -> Result<(), FluxmonError> {
        self.stability = Stability::new(value)?;
        Ok(())
    }

    /// Assign an already-validated stability score. Infallible companion to
    /// [`Depot::set_stability`].
    pub fn apply_stability(&mut self, stability: Stability) {
        self.stability = stability;
    }

    /// Get the shift supervisor's name.
    #[must_use]
    pub fn shift_supervisor(&self) -> &str {
        &self.shift_supervisor
    }

    /// Replace the shift supervisor. No validation.
    pub fn set_shift_supervisor(&mut self, supervisor: impl Into<String>) {
        self.shift_supervisor = supervisor.into();
    }

    /// Classify this depot's stability.
    #[must_use]
    pub fn danger_band(&self) -> DangerBand {
        DangerBand::classify(
            self.stability,
            DEPOT_CRITICAL_THRESHOLD,
            DEPOT_MODERATE_THRESHOLD,
        )
    }

    /// Human-readable danger assessment.
    #[must_use]
    pub fn danger_report(&self) -> String {
        match self.danger_band() {
            DangerBand::Critical => format!(
                "WARNING: depot {} at critical level! Stability: {}%",
                self.id, self.stability
            ),
            DangerBand::Elevated => format!(
                "CAUTION: depot {} at moderate risk. Stability: {}%",
                self.id, self.stability
            ),
            DangerBand::Safe => format!(
                "SAFE: depot {} at safe level. Stability: {}%",
                self.id, self.stability
            ),
        }
    }

    /// Status report: the base line extended with depot fields.
    #[must_use]
    pub fn status_report(&self) -> String {
        format!(
            "{}\nShift Supervisor: {}",
            base_status_line(&self.id, self.stability),
            self.shift_supervisor
        )
    }
}

// =============================================================================
// METHOD
// =============================================================================

/// An analysis method under stability tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    id: ObjectId,
    stability: Stability,
    analysis_type: String,
    status_active: bool,
}

impl Method {
    /// Create a method with the default stability. Status reporting starts
    /// active.
    #[must_use]
    pub fn new(id: impl Into<String>, analysis_type: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(id),
            stability: Stability::default(),
            analysis_type: analysis_type.into(),
            status_active: true,
        }
    }

    /// Get the identifier.
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Replace the identifier. No validation.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = ObjectId::new(id);
    }

    /// Get the stability score.
    #[must_use]
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Set the stability score, enforcing the `[0, 100]` bound.
    ///
    /// On rejection the prior value is left unchanged.
    pub fn set_stability(&mut self, value: f64) -> Result<(), FluxmonError> {
        self.stability = Stability::new(value)?;
        Ok(())
    }

    /// Assign an already-validated stability score. Infallible companion to
    /// [`Method::set_stability`].
    pub fn apply_stability(&mut self, stability: Stability) {
        self.stability = stability;
    }

    /// Get the analysis type.
    #[must_use]
    pub fn analysis_type(&self) -> &str {
        &self.analysis_type
    }

    /// Replace the analysis type. No validation.
    pub fn set_analysis_type(&mut self, analysis_type: impl Into<String>) {
        self.analysis_type = analysis_type.into();
    }

    /// Whether status reporting is active.
    #[must_use]
    pub fn status_active(&self) -> bool {
        self.status_active
    }

    /// Toggle status reporting.
    pub fn set_status_active(&mut self, active: bool) {
        self.status_active = active;
    }

    /// Classify this method's stability.
    #[must_use]
    pub fn danger_band(&self) -> DangerBand {
        DangerBand::classify(
            self.stability,
            METHOD_CRITICAL_THRESHOLD,
            METHOD_UNSTABLE_THRESHOLD,
        )
    }

    /// Human-readable danger assessment.
    #[must_use]
    pub fn danger_report(&self) -> String {
        match self.danger_band() {
            DangerBand::Critical => format!(
                "CRITICAL: method {} at crash risk! Stability: {}%",
                self.id, self.stability
            ),
            DangerBand::Elevated => format!(
                "WARNING: method {} unstable. Stability: {}%",
                self.id, self.stability
            ),
            DangerBand::Safe => format!(
                "STABLE: method {} operating normally. Stability: {}%",
                self.id, self.stability
            ),
        }
    }

    /// Status report: the base line extended with method fields.
    #[must_use]
    pub fn status_report(&self) -> String {
        format!(
            "{}\nAnalysis Type: {}, Status Active: {}",
            base_status_line(&self.id, self.stability),
            self.analysis_type,
            self.status_active
        )
    }
}

/// The base status line shared by every object kind.
///
/// Variants extend this line; they never replace it.
fn base_status_line(id: &ObjectId, stability: Stability) -> String {
    format!("Object ID: {}, Stability: {}%", id, stability)
}

// =============================================================================
// FLUX OBJECT (closed union)
// =============================================================================

/// A tracked object: one of the closed set of kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FluxObject {
    /// Containment depot.
    Depot(Depot),
    /// Analysis method.
    Method(Method),
}

impl FluxObject {
    /// Get the identifier.
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        match self {
            FluxObject::Depot(depot) => depot.id(),
            FluxObject::Method(method) => method.id(),
        }
    }

    /// Replace the identifier. No validation.
    pub fn set_id(&mut self, id: impl Into<String>) {
        match self {
            FluxObject::Depot(depot) => depot.set_id(id),
            FluxObject::Method(method) => method.set_id(id),
        }
    }

    /// Get the stability score.
    #[must_use]
    pub fn stability(&self) -> Stability {
        match self {
            FluxObject::Depot(depot) => depot.stability(),
            FluxObject::Method(method) => method.stability(),
        }
    }

    /// Set the stability score, enforcing the `[0, 100]` bound.
    pub fn set_stability(&mut self, value: f64) -> Result<(), FluxmonError> {
        match self {
            FluxObject::Depot(depot) => depot.set_stability(value),
            FluxObject::Method(method) => method.set_stability(value),
        }
    }

    /// Assign an already-validated stability score.
    pub fn apply_stability(&mut self, stability: Stability) {
        match self {
            FluxObject::Depot(depot) => depot.apply_stability(stability),
            FluxObject::Method(method) => method.apply_stability(stability),
        }
    }

    /// Human-readable kind name.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            FluxObject::Depot(_) => "Depot",
            FluxObject::Method(_) => "Method",
        }
    }

    /// Classify this object's stability with its kind-specific bands.
    #[must_use]
    pub fn danger_band(&self) -> DangerBand {
        match self {
            FluxObject::Depot(depot) => depot.danger_band(),
            FluxObject::Method(method) => method.danger_band(),
        }
    }

    /// Human-readable danger assessment.
    #[must_use]
    pub fn danger_report(&self) -> String {
        match self {
            FluxObject::Depot(depot) => depot.danger_report(),
            FluxObject::Method(method) => method.danger_report(),
        }
    }

    /// Multi-line status report.
    #[must_use]
    pub fn status_report(&self) -> String {
        match self {
            FluxObject::Depot(depot) => depot.status_report(),
            FluxObject::Method(method) => method.status_report(),
        }
    }
}

impl From<Depot> for FluxObject {
    fn from(depot: Depot) -> Self {
        FluxObject::Depot(depot)
    }
}

impl From<Method> for FluxObject {
    fn from(method: Method) -> Self {
        FluxObject::Method(method)
    }
}

// =============================================================================
// TESTS
// =============================================================================
