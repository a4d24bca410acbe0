//! The command runner: one fork, one exec, one reaping loop.
//!
//! A call to [`run`] creates exactly one child process and does not return
//! until that child has reached a terminal state (exited or killed by a
//! signal). The child is always reaped by the same call that spawned it;
//! no zombie outlives an invocation.

use std::process;

use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};
use tracing::{debug, warn};

use shrun_common::{Invocation, RunError, RunOutcome, RunResult};

use crate::spawn::{OsSpawner, ProcessSpawner};

/// Exit status the child reports when its program image could not be
/// loaded (command not found / not executable).
pub const EXEC_FAILURE_STATUS: i32 = 127;

/// Run one command and block until it terminates.
///
/// `Ok` means the child reached a terminal state and was reaped; the
/// [`RunOutcome`] says how it ended. A non-zero exit of the requested
/// command is not a runner error. `Err` is reserved for failures of the
/// runner itself: an unusable argument vector, a failed fork (no child
/// exists in that case), or a failed wait.
///
/// The wait has no timeout. A child that merely stops (job-control style)
/// does not satisfy the exit condition and the wait is repeated.
pub fn run(invocation: &Invocation) -> RunResult<RunOutcome> {
    run_with(&OsSpawner, invocation)
}

/// Like [`run`], with an explicit process spawner.
pub fn run_with(
    spawner: &dyn ProcessSpawner,
    invocation: &Invocation,
) -> RunResult<RunOutcome> {
    match spawner.fork() {
        Ok(ForkResult::Child) => exec_child(invocation),
        Ok(ForkResult::Parent { child }) => {
            debug!(
                pid = child.as_raw(),
                program = invocation.program(),
                "spawned child"
            );
            wait_for_exit(child)
        }
        Err(errno) => {
            warn!(program = invocation.program(), %errno, "fork failed");
            Err(RunError::spawn_failed(invocation.program(), errno))
        }
    }
}

/// Child branch: replace this process with the requested program.
///
/// On success this never returns; the child becomes the program. On
/// failure it writes a diagnostic and exits with [`EXEC_FAILURE_STATUS`],
/// which the parent observes only as a generic termination.
fn exec_child(invocation: &Invocation) -> ! {
    let argv = invocation.argv(); // non-empty by construction
    let errno = match unistd::execvp(&argv[0], argv) {
        Err(errno) => errno,
        Ok(never) => match never {},
    };
    eprintln!("shrun: exec {}: {}", invocation.program(), errno.desc());
    process::exit(EXEC_FAILURE_STATUS);
}

/// Parent branch: block until the child reaches a terminal state, then
/// report it. Stopped/continued reports are not terminal and the wait is
/// repeated; EINTR retries.
fn wait_for_exit(child: Pid) -> RunResult<RunOutcome> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                debug!(pid = pid.as_raw(), code, "child exited");
                return Ok(RunOutcome::Exited { code });
            }
            Ok(WaitStatus::Signaled(pid, signal, core_dumped)) => {
                debug!(pid = pid.as_raw(), %signal, core_dumped, "child killed by signal");
                return Ok(RunOutcome::Signaled {
                    signal: signal as i32,
                    core_dumped,
                });
            }
            Ok(status) => {
                // Stopped or otherwise non-terminal; keep waiting.
                debug!(pid = child.as_raw(), ?status, "non-terminal child status");
            }
            Err(Errno::EINTR) => continue,
            Err(errno) => {
                warn!(pid = child.as_raw(), %errno, "waitpid failed");
                return Err(RunError::wait_failed(child.as_raw(), errno));
            }
        }
    }
}
