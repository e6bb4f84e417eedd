//! # fluxmon-core
//!
//! The pure domain model for Fluxmon - THE LOGIC.
//!
//! Fluxmon tracks a small set of named containment objects, each carrying a
//! bounded stability score, classifies them into threshold-based danger
//! bands, and supports a capability-gated emergency cooldown.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Is the ONLY place where domain state exists (the [`Registry`])
//! - Performs no I/O; reports are returned as strings for the binary to print
//! - Is synchronous: one control thread mutates one in-process registry
//! - Never panics; fallible operations return `Result<T, FluxmonError>`

// =============================================================================
// MODULES
// =============================================================================

pub mod object;
pub mod primitives;
pub mod registry;
pub mod stabilize;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{FluxmonError, ObjectId, Stability};

// =============================================================================
// RE-EXPORTS: Object Model
// =============================================================================

pub use object::{DangerBand, Depot, FluxObject, Method};
pub use stabilize::Stabilizable;

// =============================================================================
// RE-EXPORTS: Registry
// =============================================================================

pub use registry::{Registry, SystemReport};
