//! Process duplication seam.
//!
//! Fork failure is hard to provoke in a test without exhausting the
//! machine, so the runner takes its fork through this trait and tests
//! substitute an implementation that fails with a chosen errno.

use nix::errno::Errno;
use nix::unistd::{self, ForkResult};

/// Process duplication, abstracted over the underlying fork call.
pub trait ProcessSpawner {
    /// Duplicate the calling process.
    ///
    /// Returns which side of the fork the caller is on, or the OS error
    /// when no child could be created.
    fn fork(&self) -> Result<ForkResult, Errno>;
}

/// The production spawner: performs a real fork.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSpawner;

impl ProcessSpawner for OsSpawner {
    fn fork(&self) -> Result<ForkResult, Errno> {
        // Safety: the child branch execs immediately; before that it only
        // writes a diagnostic and exits.
        unsafe { unistd::fork() }
    }
}
