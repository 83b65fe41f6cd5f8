//! Domain logic - pure release rules independent of files, prompts and commands

pub mod version;

pub use version::{BumpKind, Version};
