//! # shrun Process
//!
//! Low-level process execution for the shrun command runner.
//!
//! This crate provides the synchronous run primitive:
//! - Process duplication (fork), behind a small seam for fault injection
//! - Program replacement (execvp) in the child, inheriting the environment
//! - A blocking reaping loop in the parent that returns only once the
//!   child has reached a terminal state
//!
//! Unix only: the contract is fork/exec/waitpid.

pub mod run;
pub mod spawn;

// Re-export main entry points
pub use run::{run, run_with, EXEC_FAILURE_STATUS};
pub use spawn::{OsSpawner, ProcessSpawner};
