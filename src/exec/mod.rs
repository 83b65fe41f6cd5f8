//! External command execution
//!
//! Every build, VCS and publish action is a single shell command line run
//! through a [CommandRunner]:
//!
//! - [shell::ShellRunner]: runs the command with `sh -c` in the project root
//! - [dry_run::DryRunRunner]: reports the command without running it
//! - [recording::RecordingRunner]: records commands and fails on demand, for tests

pub mod dry_run;
pub mod recording;
pub mod shell;

pub use dry_run::DryRunRunner;
pub use recording::RecordingRunner;
pub use shell::ShellRunner;

use crate::error::Result;

/// Runs one command line to completion.
///
/// A spawn error or a non-zero exit status is reported as
/// [crate::error::DeployError::CommandFailed].
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<()>;
}
