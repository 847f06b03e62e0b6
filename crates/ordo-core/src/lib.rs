//! # ordo-core
//!
//! Core types and error definitions for ordo.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error hierarchy with its validation
//! macros, and small text utilities for parsing date keys and formatting
//! ordinals.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Parsing and formatting utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
