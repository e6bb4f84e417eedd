//! # Domain Constants
//!
//! Hardcoded thresholds and primitives for the Fluxmon core.
//!
//! Fluxmon starts with an empty registry but fixed classification logic.
//! These constants are compiled into the binary and are immutable at runtime.

/// Lower bound of the stability scale (inclusive).
pub const STABILITY_MIN: f64 = 0.0;

/// Upper bound of the stability scale (inclusive).
///
/// Cooldown boosts clamp here; they never overshoot.
pub const STABILITY_MAX: f64 = 100.0;

/// Stability assigned to every object at construction.
pub const DEFAULT_STABILITY: f64 = 50.0;

/// Fixed increment applied by an emergency cooldown.
///
/// The boost is clamped at [`STABILITY_MAX`], so repeated cooldowns at the
/// ceiling are no-ops.
pub const COOLDOWN_INCREMENT: f64 = 20.0;

// =============================================================================
// DEPOT DANGER BANDS
// =============================================================================

/// Depots below this stability are critical.
pub const DEPOT_CRITICAL_THRESHOLD: f64 = 30.0;

/// Depots below this stability (and at or above the critical threshold)
/// are at moderate risk. At or above it they are safe.
pub const DEPOT_MODERATE_THRESHOLD: f64 = 60.0;

// =============================================================================
// METHOD DANGER BANDS
// =============================================================================

/// Methods below this stability are critical (crash risk).
pub const METHOD_CRITICAL_THRESHOLD: f64 = 20.0;

/// Methods below this stability (and at or above the critical threshold)
/// carry an unstable warning. At or above it they are stable.
pub const METHOD_UNSTABLE_THRESHOLD: f64 = 50.0;

// =============================================================================
// AGGREGATE REPORT BANDS
// =============================================================================

/// Objects below this stability count as critical in the system report.
///
/// The aggregate bands are global: they do not vary per object kind.
pub const REPORT_CRITICAL_THRESHOLD: f64 = 30.0;

/// Objects at or above this stability count as safe in the system report.
/// Everything between the two report thresholds counts as moderate.
pub const REPORT_SAFE_THRESHOLD: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stability_scale_is_zero_to_hundred() {
        assert_eq!(STABILITY_MIN, 0.0);
        assert_eq!(STABILITY_MAX, 100.0);
    }

    #[test]
    fn default_stability_is_midpoint() {
        assert_eq!(DEFAULT_STABILITY, 50.0);
    }

    #[test]
    fn band_thresholds_are_ordered() {
        assert!(DEPOT_CRITICAL_THRESHOLD < DEPOT_MODERATE_THRESHOLD);
        assert!(METHOD_CRITICAL_THRESHOLD < METHOD_UNSTABLE_THRESHOLD);
        assert!(REPORT_CRITICAL_THRESHOLD < REPORT_SAFE_THRESHOLD);
    }
}
