use crate::error::{DeployError, Result};
use std::fmt;
use std::str::FromStr;

/// Release version as read from the primary manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted `X.Y.Z` string (e.g., "3.26.4" -> Version(3,26,4))
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(DeployError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                input
            )));
        }

        let component = |name: &str, raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| DeployError::version(format!("Invalid {} version: {}", name, raw)))
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Increment the component selected by `kind`.
    ///
    /// Lower components are carried over unchanged, so a major bump of
    /// 1.2.3 yields 2.2.3 rather than 2.0.0.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let next = |value: u32| {
            value.checked_add(1).ok_or_else(|| {
                DeployError::version(format!("Cannot bump {} version of {}", kind, self))
            })
        };

        let bumped = match kind {
            BumpKind::Major => Version {
                major: next(self.major)?,
                ..*self
            },
            BumpKind::Minor => Version {
                minor: next(self.minor)?,
                ..*self
            },
            BumpKind::Patch => Version {
                patch: next(self.patch)?,
                ..*self
            },
        };
        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    /// Choices in the order they are offered to the operator
    pub const ALL: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BumpKind {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(DeployError::InvalidBumpKind(other.to_string())),
        }
    }
}
