//! Core domain types for the shrun command runner.

use std::ffi::CString;
use std::fmt;

use crate::errors::{RunError, RunResult};

/// A single command to hand to the runner: an executable name plus its
/// full argument vector.
///
/// The vector is validated and converted to NUL-terminated strings at
/// construction time, so the exec boundary always receives a well-formed,
/// sentinel-terminated argv.
///
/// # Example
/// ```
/// use shrun_common::Invocation;
///
/// let invocation = Invocation::from_argv(&["ls", "-l"]).unwrap();
/// assert_eq!(invocation.program(), "ls");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    argv: Vec<CString>,
}

impl Invocation {
    /// Builds an invocation from a tokenized argument vector.
    ///
    /// `argv[0]` names the executable (resolved via the search path unless
    /// it contains a slash); the whole vector is passed to the child
    /// verbatim. The vector must be non-empty and no element may contain an
    /// interior NUL byte.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> RunResult<Self> {
        let program = argv
            .first()
            .map(|s| s.as_ref().to_string())
            .ok_or_else(|| RunError::invalid_invocation("argument vector is empty"))?;

        if program.is_empty() {
            return Err(RunError::invalid_invocation("program name is empty"));
        }

        let argv = argv
            .iter()
            .map(|arg| {
                CString::new(arg.as_ref()).map_err(|_| {
                    RunError::invalid_invocation(format!(
                        "argument {:?} contains a NUL byte",
                        arg.as_ref()
                    ))
                })
            })
            .collect::<RunResult<Vec<_>>>()?;

        Ok(Self { program, argv })
    }

    /// Returns the executable name (`argv[0]`).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the NUL-terminated argument vector, ready for exec.
    /// Non-empty by construction.
    pub fn argv(&self) -> &[CString] {
        &self.argv
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Terminal state of a child the runner spawned and reaped.
///
/// Distinguishes "the program ran and exited" from "the program was killed
/// by a signal"; a non-zero exit code is reported here, not as a runner
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Child exited normally with the given status code.
    Exited { code: i32 },
    /// Child was terminated by a signal.
    Signaled { signal: i32, core_dumped: bool },
}

impl RunOutcome {
    /// True when the child exited normally with status zero.
    pub fn success(&self) -> bool {
        matches!(self, RunOutcome::Exited { code: 0 })
    }

    /// The exit code, when the child exited normally.
    pub fn code(&self) -> Option<i32> {
        match self {
            RunOutcome::Exited { code } => Some(*code),
            RunOutcome::Signaled { .. } => None,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Exited { code } => write!(f, "exited with code {}", code),
            RunOutcome::Signaled {
                signal,
                core_dumped: true,
            } => write!(f, "killed by signal {} (core dumped)", signal),
            RunOutcome::Signaled {
                signal,
                core_dumped: false,
            } => write!(f, "killed by signal {}", signal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_from_argv() {
        let invocation = Invocation::from_argv(&["echo", "hello", "world"]).unwrap();
        assert_eq!(invocation.program(), "echo");
        assert_eq!(invocation.argv().len(), 3);
        assert_eq!(invocation.argv()[0].to_str().unwrap(), "echo");
        assert_eq!(invocation.argv()[2].to_str().unwrap(), "world");
    }

    #[test]
    fn test_empty_argv_rejected() {
        let err = Invocation::from_argv::<&str>(&[]).unwrap_err();
        assert!(matches!(err, RunError::InvalidInvocation { .. }));
    }

    #[test]
    fn test_empty_program_rejected() {
        let err = Invocation::from_argv(&["", "arg"]).unwrap_err();
        assert!(matches!(err, RunError::InvalidInvocation { .. }));
    }

    #[test]
    fn test_nul_byte_rejected() {
        let err = Invocation::from_argv(&["echo", "bad\0arg"]).unwrap_err();
        assert!(matches!(err, RunError::InvalidInvocation { .. }));
    }

    #[test]
    fn test_outcome_success() {
        assert!(RunOutcome::Exited { code: 0 }.success());
        assert!(!RunOutcome::Exited { code: 1 }.success());
        assert!(!RunOutcome::Signaled {
            signal: 15,
            core_dumped: false
        }
        .success());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RunOutcome::Exited { code: 2 }.to_string(), "exited with code 2");
        assert_eq!(
            RunOutcome::Signaled {
                signal: 9,
                core_dumped: false
            }
            .to_string(),
            "killed by signal 9"
        );
    }
}
