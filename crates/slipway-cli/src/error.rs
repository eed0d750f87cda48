//! Error handling for the Slipway CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use slipway_core::error::{ErrorCategory as CoreCategory, SlipwayError};
use slipway_core::pipeline::PipelineFailure;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `slipway-core` (validation or pipeline).
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error(transparent)]
    Core(#[from] SlipwayError),

    /// A pipeline abort, carrying the failing step's name.
    #[error("generation failed at step '{}'", .0.step)]
    Pipeline(#[from] PipelineFailure),

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Interactive prompts requested without a terminal (or without the
    /// `interactive` feature compiled in).
    #[error("interactive prompts are not available: {reason}")]
    InteractiveUnavailable { reason: &'static str },

    /// A prompt failed (terminal I/O).
    #[error("prompt failed: {message}")]
    Prompt { message: String },

    /// Operation cancelled by user.
    #[error("operation cancelled")]
    Cancelled,

    /// An I/O operation failed outside the pipeline.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::Pipeline(failure) => {
                let mut suggestions = failure.error.suggestions();
                if !failure.completed.steps.is_empty() {
                    suggestions.push(format!(
                        "Steps completed before the failure: {}",
                        failure.completed.executed().join(", ")
                    ));
                }
                suggestions
            }
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file (slipway --config <FILE>)".into(),
            ],
            Self::InteractiveUnavailable { .. } => vec![
                "Pass a project name and --template to run non-interactively".into(),
                "Example: slipway new my-api --template api --pm npm".into(),
            ],
            Self::Prompt { .. } => vec!["Re-run in an interactive terminal".into()],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category                  | Code |
    /// |---------------------------|------|
    /// | Validation / conflict     |  2   |
    /// | Configuration / no TTY    |  4   |
    /// | Filesystem / subprocess   |  1   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(core) => category_code(core.category()),
            Self::Pipeline(failure) => {
                category_code(SlipwayError::from(failure.error.clone()).category())
            }
            Self::Config { .. } | Self::InteractiveUnavailable { .. } => 4,
            Self::Cancelled => 2,
            Self::Prompt { .. } | Self::Io { .. } => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing, at a severity matching its kind.
    pub fn log(&self) {
        match self.exit_code() {
            2 | 4 => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }
        if let Some(source) = self.source() {
            tracing::debug!("caused by: {}", source);
        }
    }
}

fn category_code(category: CoreCategory) -> u8 {
    match category {
        CoreCategory::Validation | CoreCategory::Conflict => 2,
        CoreCategory::Filesystem | CoreCategory::Subprocess => 1,
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
