//! # Stabilization Capability
//!
//! Emergency cooldown is a capability, not a universal operation: only the
//! object kinds that implement [`Stabilizable`] can be cooled. Callers query
//! the capability through [`FluxObject::as_stabilizable_mut`] rather than
//! inspecting kinds, so the supporting set can change without touching the
//! control loop.
//!
//! Currently only depots are stabilizable. The restriction is deliberate and
//! preserved from the domain model.

use crate::object::FluxObject;
use crate::primitives::COOLDOWN_INCREMENT;

/// Objects that support an emergency cooldown.
///
/// A cooldown raises stability by [`COOLDOWN_INCREMENT`], clamped at 100.
/// There is no failure mode; at the ceiling the operation is a no-op.
pub trait Stabilizable {
    /// Perform the cooldown and return the notice line to display.
    ///
    /// The core never prints; the caller decides where the notice goes.
    fn emergency_cooldown(&mut self) -> String;
}

impl Stabilizable for crate::object::Depot {
    fn emergency_cooldown(&mut self) -> String {
        let notice = format!("Emergency cooldown initiated for depot {}!", self.id());
        self.apply_stability(self.stability().boost(COOLDOWN_INCREMENT));
        notice
    }
}

impl FluxObject {
    /// Type-safe capability query: the cooldown handle, if this object
    /// supports it.
    #[must_use]
    pub fn as_stabilizable_mut(&mut self) -> Option<&mut dyn Stabilizable> {
        match self {
            FluxObject::Depot(depot) => Some(depot),
            FluxObject::Method(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
