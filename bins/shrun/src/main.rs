use anyhow::Result;
use clap::Parser;
use tracing::debug;

use shrun_common::{Invocation, RunOutcome};

/// shrun - run a single command and wait for it to finish
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.debug)?;

    let invocation = Invocation::from_argv(&args.command)?;
    debug!(command = %invocation, "running command");

    let outcome = shrun_process::run(&invocation)?;
    debug!(%outcome, "command finished");

    std::process::exit(exit_status(&outcome));
}

/// Map the child's terminal state onto this process's exit status: the
/// exit code verbatim, or 128 + signal number when killed by a signal.
fn exit_status(outcome: &RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Exited { code } => *code,
        RunOutcome::Signaled { signal, .. } => 128 + signal,
    }
}

fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "warn" };

    // Logs go to stderr so the child's stdout stays untouched.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(exit_status(&RunOutcome::Exited { code: 0 }), 0);
        assert_eq!(exit_status(&RunOutcome::Exited { code: 7 }), 7);
        assert_eq!(
            exit_status(&RunOutcome::Signaled {
                signal: 15,
                core_dumped: false
            }),
            143
        );
    }
}
