//! # shrun Common
//!
//! Shared types for the shrun command runner.
//!
//! This crate provides the foundational pieces the other shrun crates build
//! upon: the error taxonomy, the validated argument vector type, and the
//! terminal-state report a reaped child leaves behind.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{RunError, RunResult};
pub use types::{Invocation, RunOutcome};
