//! Ports (traits) for external dependencies.
//!
//! The pipeline defines the interfaces it needs from the outside world;
//! `slipway-adapters` provides the implementations. Keeping these as traits
//! lets the pipeline and its steps run against in-memory fakes in tests.

use std::path::Path;

use crate::domain::Tier;
use crate::pipeline::error::PipelineError;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slipway_adapters::filesystem::LocalFilesystem` (production)
/// - `slipway_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), PipelineError>;

    /// Write content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), PipelineError>;

    /// Mark a file as executable (no-op on platforms without a mode bit).
    fn set_executable(&self, path: &Path) -> Result<(), PipelineError>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external commands (package manager, version control).
///
/// One blocking, synchronous invocation; success iff the process exits zero.
/// The pipeline treats each invocation as atomic — partial output of a
/// failed command is neither inspected nor cleaned up.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), PipelineError>;
}

/// Port for the per-tier template skeletons.
///
/// A skeleton is a static file tree (`src/`, `tests/`) copied byte-for-byte
/// into the project directory. The core never parses or transforms skeleton
/// contents.
pub trait TemplateSource: Send + Sync {
    fn copy_tier(
        &self,
        tier: Tier,
        dest: &Path,
        fs: &dyn Filesystem,
    ) -> Result<(), PipelineError>;
}
