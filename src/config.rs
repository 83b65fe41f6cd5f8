use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "deploy.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".deploy.toml";

/// Represents the complete configuration for raven-deploy.
///
/// Contains the files rewritten on release, the commands run for each step and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_project_name() -> String {
    "Raven.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_name: default_project_name(),
            files: FilesConfig::default(),
            commands: CommandsConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Paths of the files carrying the release version, relative to the project root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    pub package_manifest: PathBuf,
    pub secondary_manifest: PathBuf,
    pub docs_config: PathBuf,
    /// Key inside the docs config `vars` table holding the version
    pub docs_version_key: String,
    pub library_source: PathBuf,
    pub test_source: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            package_manifest: PathBuf::from("package.json"),
            secondary_manifest: PathBuf::from("bower.json"),
            docs_config: PathBuf::from("docs/sentry-doc-config.json"),
            docs_version_key: "RAVEN_VERSION".to_string(),
            library_source: PathBuf::from("src/raven.js"),
            test_source: PathBuf::from("test/raven.test.js"),
        }
    }
}

/// Shell commands run by the workflow.
///
/// `{version}` is replaced with the next version before a command runs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommandsConfig {
    pub build: String,
    pub commit: String,
    pub tag: String,
    pub push: String,
    pub publish_cdn: String,
    pub publish_registry: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            build: "grunt dist".to_string(),
            commit: r#"git add -A && git commit -am "{version}""#.to_string(),
            tag: r#"git tag -a {version} -m "Version {version}""#.to_string(),
            push: "git push --follow-tags".to_string(),
            publish_cdn: "grunt publish".to_string(),
            publish_registry: "npm publish".to_string(),
        }
    }
}

/// Runtime behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Print commands instead of running them
    #[serde(default)]
    pub dry_run: bool,
}

/// Substitutes `{version}` in a command template.
pub fn render_command(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `deploy.toml` in current directory
/// 3. `.deploy.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            fs::read_to_string(user_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from a TOML string, filling in defaults.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}
