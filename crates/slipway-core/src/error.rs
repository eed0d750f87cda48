//! Unified error handling for Slipway Core.
//!
//! Wraps the domain (validation) and pipeline (orchestration) error types
//! behind one enum so callers get a single surface with suggestions and a
//! category for exit-code mapping.

use thiserror::Error;

use crate::domain::DomainError;
use crate::pipeline::error::PipelineError;

/// Root error type for slipway-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlipwayError {
    /// Validation failures from resolving raw answers.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures from the generation pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl SlipwayError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Pipeline(e) => e.suggestions(),
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Pipeline(e) => match e {
                PipelineError::Conflict { .. } => ErrorCategory::Conflict,
                PipelineError::Filesystem { .. } | PipelineError::TemplateMissing { .. } => {
                    ErrorCategory::Filesystem
                }
                PipelineError::Subprocess { .. } => ErrorCategory::Subprocess,
            },
        }
    }
}

/// Error categories, matching the failure taxonomy of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name or missing required answer.
    Validation,
    /// Output directory already exists.
    Conflict,
    /// Directory/file creation or copy failure.
    Filesystem,
    /// Install or VCS command exited nonzero.
    Subprocess,
}

/// Convenient result type alias.
pub type SlipwayResult<T> = Result<T, SlipwayError>;
