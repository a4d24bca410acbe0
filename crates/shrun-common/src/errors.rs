//! Error types for the shrun command runner.
//!
//! A command that runs and exits non-zero is not a runner error; only
//! failures to create, validate, or reap a child surface here. Exec
//! failures inside the child are reported through the child's own exit
//! status and never cross back into this type.

use nix::errno::Errno;
use thiserror::Error;

/// Result type alias for runner operations.
pub type RunResult<T> = std::result::Result<T, RunError>;

/// Errors the command runner itself can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The argument vector was unusable before any process was created.
    #[error("invalid invocation: {reason}")]
    InvalidInvocation { reason: String },

    /// Process duplication failed; no child exists and nothing was reaped.
    #[error("spawn failed for {program}: {source}")]
    SpawnFailed { program: String, source: Errno },

    /// The reaping call failed with something other than EINTR.
    #[error("wait failed for pid {pid}: {source}")]
    WaitFailed { pid: i32, source: Errno },
}

impl RunError {
    pub fn invalid_invocation(reason: impl Into<String>) -> Self {
        Self::InvalidInvocation {
            reason: reason.into(),
        }
    }

    pub fn spawn_failed(program: impl Into<String>, source: Errno) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            source,
        }
    }

    pub fn wait_failed(pid: i32, source: Errno) -> Self {
        Self::WaitFailed { pid, source }
    }

    /// The underlying OS error code, when one is attached.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::InvalidInvocation { .. } => None,
            Self::SpawnFailed { source, .. } | Self::WaitFailed { source, .. } => Some(*source),
        }
    }
}
