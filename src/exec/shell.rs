use crate::error::{DeployError, Result};
use crate::exec::CommandRunner;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs commands through the platform shell with inherited stdio
pub struct ShellRunner {
    root: PathBuf,
}

impl ShellRunner {
    /// Create a runner executing commands in `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        ShellRunner {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn shell_command(command: &str) -> Command {
        let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
        let mut cmd = Command::new(shell);
        cmd.arg(flag).arg(command);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<()> {
        let status = Self::shell_command(command)
            .current_dir(&self.root)
            .status()
            .map_err(|e| DeployError::command_failed(command, format!("failed to spawn: {}", e)))?;

        if !status.success() {
            return Err(DeployError::command_failed(
                command,
                match status.code() {
                    Some(code) => format!("exited with code {}", code),
                    None => "terminated by signal".to_string(),
                },
            ));
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_successful_command() {
        let dir = TempDir::new().unwrap();
        let runner = ShellRunner::new(dir.path());

        runner.run("touch built && test -f built").unwrap();
        assert!(dir.path().join("built").exists());
    }

    #[test]
    fn test_failing_command_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let runner = ShellRunner::new(dir.path());

        let err = runner.run("exit 3").unwrap_err();
        match err {
            DeployError::CommandFailed { command, reason } => {
                assert_eq!(command, "exit 3");
                assert!(reason.contains("code 3"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_root_fails_to_spawn() {
        let runner = ShellRunner::new("/nonexistent/project/root");

        let err = runner.run("true").unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }
}
