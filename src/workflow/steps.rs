use std::fmt;

use crate::config::CommandsConfig;
use crate::domain::Version;

/// A confirmable release step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    UpdateFiles,
    Build,
    Commit,
    Tag,
    Push,
    PublishCdn,
    PublishRegistry,
}

impl Step {
    /// The fixed order steps are offered in
    pub const ALL: [Step; 7] = [
        Step::UpdateFiles,
        Step::Build,
        Step::Commit,
        Step::Tag,
        Step::Push,
        Step::PublishCdn,
        Step::PublishRegistry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::UpdateFiles => "update-files",
            Step::Build => "build",
            Step::Commit => "commit",
            Step::Tag => "tag",
            Step::Push => "push",
            Step::PublishCdn => "publish-cdn",
            Step::PublishRegistry => "publish-registry",
        }
    }

    /// Confirmation question for this step
    pub fn prompt(&self, next: &Version) -> String {
        match self {
            Step::UpdateFiles => format!("Do you want to update all files to version {}?", next),
            Step::Build => "Do you want to run the build process?".to_string(),
            Step::Commit => "Do you want to commit the changes?".to_string(),
            Step::Tag => "Do you want to create a tag?".to_string(),
            Step::Push => "Do you want to push the changes?".to_string(),
            Step::PublishCdn => "Do you want to publish on CDN?".to_string(),
            Step::PublishRegistry => "Do you want to publish on registry?".to_string(),
        }
    }

    /// Line printed once the step's command succeeded.
    /// File updates report each file instead.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Step::UpdateFiles => None,
            Step::Build => Some("Build process completed"),
            Step::Commit => Some("Changes committed"),
            Step::Tag => Some("Tag created"),
            Step::Push => Some("Changes pushed"),
            Step::PublishCdn => Some("Published on CDN"),
            Step::PublishRegistry => Some("Published on registry"),
        }
    }

    /// Command template run by this step, if it runs one
    pub fn command<'a>(&self, commands: &'a CommandsConfig) -> Option<&'a str> {
        match self {
            Step::UpdateFiles => None,
            Step::Build => Some(&commands.build),
            Step::Commit => Some(&commands.commit),
            Step::Tag => Some(&commands.tag),
            Step::Push => Some(&commands.push),
            Step::PublishCdn => Some(&commands.publish_cdn),
            Step::PublishRegistry => Some(&commands.publish_registry),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_update_files_has_no_command() {
        let commands = CommandsConfig::default();
        for step in Step::ALL {
            assert_eq!(
                step.command(&commands).is_none(),
                step == Step::UpdateFiles,
                "{}",
                step
            );
            assert_eq!(step.success_message().is_none(), step == Step::UpdateFiles);
        }
    }

    #[test]
    fn test_update_files_prompt_names_version() {
        assert_eq!(
            Step::UpdateFiles.prompt(&Version::new(2, 5, 0)),
            "Do you want to update all files to version 2.5.0?"
        );
    }

    #[test]
    fn test_step_commands_map_to_config() {
        let commands = CommandsConfig::default();
        assert_eq!(Step::Build.command(&commands), Some("grunt dist"));
        assert_eq!(Step::Push.command(&commands), Some("git push --follow-tags"));
        assert_eq!(Step::PublishCdn.command(&commands), Some("grunt publish"));
        assert_eq!(Step::PublishRegistry.command(&commands), Some("npm publish"));
    }
}
