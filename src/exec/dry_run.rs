use crate::error::Result;
use crate::exec::CommandRunner;
use crate::ui;

/// Reports commands without running them
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &str) -> Result<()> {
        log::info!("dry run, not executing: {}", command);
        ui::display_status("Dry run: command not executed");
        Ok(())
    }
}
