use crate::error::{DeployError, Result};
use crate::exec::CommandRunner;
use std::cell::RefCell;

/// Records every command it is asked to run
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner failing the first command containing `needle`
    pub fn failing_on(needle: impl Into<String>) -> Self {
        RecordingRunner {
            commands: RefCell::new(Vec::new()),
            fail_on: Some(needle.into()),
        }
    }

    /// Commands run so far, in order, including the failing one
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<()> {
        self.commands.borrow_mut().push(command.to_string());
        match &self.fail_on {
            Some(needle) if command.contains(needle.as_str()) => Err(
                DeployError::command_failed(command, "exited with code 1"),
            ),
            _ => Ok(()),
        }
    }
}
