//! Pipeline-layer errors.
//!
//! These represent orchestration failures — filesystem, templates,
//! subprocesses. User-input problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Tier;

/// Errors that occur while the generation pipeline is executing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// Output directory already exists. Checked before any step runs.
    #[error("output directory already exists: {path}")]
    Conflict { path: PathBuf },

    /// Directory/file creation or copy failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The embedded skeleton for a tier could not be found or read.
    #[error("template skeleton for tier '{tier}' is missing or unreadable")]
    TemplateMissing { tier: Tier },

    /// An external command exited nonzero or could not be spawned.
    #[error("command failed: {command}")]
    Subprocess { command: String, details: String },
}

impl PipelineError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Conflict { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "The partially generated directory was left in place; delete it before retrying"
                    .into(),
            ],
            Self::TemplateMissing { tier } => vec![
                format!("No skeleton is embedded for the '{tier}' tier"),
                "This is a bug in slipway, please report it".into(),
            ],
            Self::Subprocess { command, details } => vec![
                format!("Command '{command}' failed: {details}"),
                "Ensure the command is installed and on your PATH".into(),
            ],
        }
    }
}
