use std::fmt;
use std::path::PathBuf;

/// Warnings raised while updating release files.
/// These are non-fatal issues that should be reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployWarning {
    /// A source file contained no version marker to rewrite
    NoVersionMarker { file: PathBuf, pattern: String },
    /// A manifest disagreed with the primary manifest before the update
    ManifestVersionMismatch {
        file: PathBuf,
        found: Option<String>,
        expected: String,
    },
}

impl fmt::Display for DeployWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployWarning::NoVersionMarker { file, pattern } => {
                write!(
                    f,
                    "No version marker matching '{}' found in {}",
                    pattern,
                    file.display()
                )
            }
            DeployWarning::ManifestVersionMismatch {
                file,
                found,
                expected,
            } => {
                let found = found.as_deref().unwrap_or("no version");
                write!(
                    f,
                    "{} had {} (expected {})",
                    file.display(),
                    found,
                    expected
                )
            }
        }
    }
}
