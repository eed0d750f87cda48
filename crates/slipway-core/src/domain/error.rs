//! Domain-layer errors: answer validation failures.
//!
//! Everything here is a user-input problem. Orchestration failures
//! (filesystem, subprocess) live in `crate::pipeline::error`.

use thiserror::Error;

/// Validation errors raised while resolving raw answers.
///
/// All variants are:
/// - Cloneable (cheap, string-based)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("required answer missing: {field}")]
    MissingAnswer { field: &'static str },

    #[error("unknown template tier '{value}'")]
    UnknownTier { value: String },

    #[error("unknown package manager '{value}'")]
    UnknownPackageManager { value: String },

    #[error("unknown CI provider '{value}'")]
    UnknownCiProvider { value: String },

    #[error("unknown feature token '{token}'")]
    UnknownFeatureToken { token: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{name}' is invalid: {reason}"),
                "Use lowercase letters, digits, hyphens, and underscores".into(),
                "Examples: my-service, my_api_2, webhooks".into(),
            ],
            Self::MissingAnswer { field } => vec![
                format!("The '{field}' answer was not provided"),
                "Pass it as an argument or run without flags for the interactive prompts".into(),
            ],
            Self::UnknownTier { .. } => vec![
                "Supported tiers: minimal, api, full".into(),
                "Try: slipway list".into(),
            ],
            Self::UnknownPackageManager { .. } => {
                vec!["Supported package managers: npm, pnpm, yarn, bun".into()]
            }
            Self::UnknownCiProvider { .. } => {
                vec!["Supported CI providers: github, gitlab, none".into()]
            }
            Self::UnknownFeatureToken { token } => vec![
                format!("'{token}' is not a recognised feature"),
                "Supported features: docker, docker-compose, ci-github, ci-gitlab, openapi, auth, observability"
                    .into(),
            ],
        }
    }
}
