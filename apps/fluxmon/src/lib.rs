//! # Fluxmon application library
//!
//! Exposes the CLI and console modules so integration tests can drive the
//! menu loop with scripted input.

pub mod cli;
pub mod console;
