//! Subprocess adapter for the install and version-control steps.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use slipway_core::pipeline::error::PipelineError;
use slipway_core::ports::CommandRunner;

/// Runs external commands synchronously via `std::process::Command`.
///
/// stdout/stderr are captured rather than inherited so pipeline progress
/// output is not interleaved with package-manager noise; stderr is folded
/// into the error on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), PipelineError> {
        debug!(program, ?args, cwd = %cwd.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| PipelineError::Subprocess {
                command: format!("{program} {}", args.join(" ")),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(PipelineError::Subprocess {
                command: format!("{program} {}", args.join(" ")),
                details: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}
