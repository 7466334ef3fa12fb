//! # feriae-core
//!
//! Error definitions shared across all crates in the workspace.
//!
//! Every fallible operation in `feriae` returns [`Result`], and every failure
//! is one of the [`Error`] variants defined here.  The `ensure!` and `fail!`
//! macros are the usual way to produce them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A Gregorian calendar year.
pub type Year = u16;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
