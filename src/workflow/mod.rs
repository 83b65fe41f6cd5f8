//! Release workflow orchestration
//!
//! Reads the current version, asks for a bump kind, then offers each [Step]
//! in order. Every step is gated by its own confirmation (default no) and a
//! declined step is simply skipped. The first failing step ends the run; work
//! done by earlier steps is left in place.

pub mod steps;

pub use steps::Step;

use crate::config::{render_command, Config};
use crate::domain::{BumpKind, Version};
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::files::{self, FileStore, VersionMarker};
use crate::ui::{self, Prompter};
use crate::warning::DeployWarning;

/// Question asked before anything else
pub const BUMP_PROMPT: &str = "Which version part do you want to update?";

/// State threaded through the steps of one run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseContext {
    pub current: Version,
    pub next: Version,
    /// Steps that were confirmed and ran to completion, in order
    pub completed: Vec<Step>,
    pub warnings: Vec<DeployWarning>,
}

impl ReleaseContext {
    pub fn new(current: Version, next: Version) -> Self {
        ReleaseContext {
            current,
            next,
            completed: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn complete(mut self, step: Step) -> Self {
        self.completed.push(step);
        self
    }

    fn warn(mut self, warning: DeployWarning) -> Self {
        ui::display_warning(&warning);
        self.warnings.push(warning);
        self
    }

    pub fn has_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }
}

/// Outcome of a run that reached the end
pub type WorkflowResult = ReleaseContext;

/// Workflow bound to its collaborators
pub struct Release<'a> {
    config: &'a Config,
    prompter: &'a dyn Prompter,
    store: &'a dyn FileStore,
    runner: &'a dyn CommandRunner,
}

impl<'a> Release<'a> {
    pub fn new(
        config: &'a Config,
        prompter: &'a dyn Prompter,
        store: &'a dyn FileStore,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Release {
            config,
            prompter,
            store,
            runner,
        }
    }

    /// Run every step in order
    pub fn run(&self) -> Result<WorkflowResult> {
        let mut context = self.start()?;
        for step in Step::ALL {
            context = self.run_step(step, context)?;
        }
        Ok(context)
    }

    /// Read the current version and compute the next one.
    ///
    /// Nothing is written before this returns, so an invalid bump kind
    /// leaves every file untouched.
    pub fn start(&self) -> Result<ReleaseContext> {
        let current =
            files::read_manifest_version(self.store, &self.config.files.package_manifest)?;
        ui::display_current_version(&current);

        let choices: Vec<&str> = BumpKind::ALL.iter().map(BumpKind::name).collect();
        let default = BumpKind::ALL
            .iter()
            .position(|kind| *kind == BumpKind::default())
            .unwrap_or(0);

        let kind: BumpKind = self.prompter.select(BUMP_PROMPT, &choices, default)?.parse()?;
        let next = current.bump(kind)?;
        log::info!("{} bump: {} -> {}", kind, current, next);

        Ok(ReleaseContext::new(current, next))
    }

    /// Offer one step and run it if confirmed
    pub fn run_step(&self, step: Step, context: ReleaseContext) -> Result<ReleaseContext> {
        if !self.prompter.confirm(&step.prompt(&context.next), false)? {
            log::debug!("step {} declined", step);
            return Ok(context);
        }

        let context = match step {
            Step::UpdateFiles => self.update_files(context)?,
            _ => self.run_command(step, context)?,
        };

        if let Some(message) = step.success_message() {
            ui::display_success(message);
        }
        Ok(context.complete(step))
    }

    fn update_files(&self, mut context: ReleaseContext) -> Result<ReleaseContext> {
        let paths = &self.config.files;
        let next = context.next;

        files::update_manifest_version(self.store, &paths.package_manifest, &next)?;
        updated(&paths.package_manifest);

        let previous =
            files::update_manifest_version(self.store, &paths.secondary_manifest, &next)?;
        updated(&paths.secondary_manifest);
        let expected = context.current.to_string();
        if previous.as_deref() != Some(expected.as_str()) {
            context = context.warn(DeployWarning::ManifestVersionMismatch {
                file: paths.secondary_manifest.clone(),
                found: previous,
                expected,
            });
        }

        files::update_docs_version(self.store, &paths.docs_config, &paths.docs_version_key, &next)?;
        updated(&paths.docs_config);

        let markers = [
            (&paths.library_source, VersionMarker::library()?),
            (&paths.test_source, VersionMarker::test_client()?),
        ];
        for (path, marker) in markers {
            let count = files::replace_version_markers(self.store, path, &marker, &next)?;
            updated(path);
            if count == 0 {
                context = context.warn(DeployWarning::NoVersionMarker {
                    file: path.clone(),
                    pattern: marker.pattern().to_string(),
                });
            }
        }

        Ok(context)
    }

    fn run_command(&self, step: Step, context: ReleaseContext) -> Result<ReleaseContext> {
        let Some(template) = step.command(&self.config.commands) else {
            return Ok(context);
        };

        let command = render_command(template, &context.next.to_string());
        ui::display_command(&command);
        log::debug!("running {} step: {}", step, command);
        self.runner.run(&command)?;
        Ok(context)
    }
}

fn updated(path: &std::path::Path) {
    ui::display_success(&format!("{} updated", path.display()));
}

/// Run the whole workflow against the given collaborators
pub fn run_release(
    config: &Config,
    prompter: &dyn Prompter,
    store: &dyn FileStore,
    runner: &dyn CommandRunner,
) -> Result<WorkflowResult> {
    Release::new(config, prompter, store, runner).run()
}

/// Process exit status for a workflow outcome: 0 on success, 1 on any error
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
