pub mod config;
pub mod domain;
pub mod error;
pub mod exec;
pub mod files;
pub mod ui;
pub mod warning;
pub mod workflow;

pub use error::{DeployError, Result};
