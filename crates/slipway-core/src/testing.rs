//! In-memory port fakes shared by the unit tests.
//!
//! Mirrors the shape of the production adapters closely enough that step
//! tests exercise real control flow: the recording filesystem stores writes,
//! the recording runner captures invocations, and both can be told to fail.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::Tier;
use crate::pipeline::error::PipelineError;
use crate::ports::{CommandRunner, Filesystem, TemplateSource};

// ── Filesystem fakes ──────────────────────────────────────────────────────────

#[derive(Default)]
struct FsState {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

/// In-memory filesystem that records every operation.
#[derive(Default)]
pub struct RecordingFilesystem {
    state: Mutex<FsState>,
}

impl RecordingFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().directories.contains(path)
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.state.lock().unwrap().executables.contains(path)
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.state.lock().unwrap().files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), PipelineError> {
        self.state
            .lock()
            .unwrap()
            .directories
            .insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), PipelineError> {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> Result<(), PipelineError> {
        self.state
            .lock()
            .unwrap()
            .executables
            .insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.directories.contains(path) || state.files.contains_key(path)
    }
}

/// Filesystem that rejects every mutation, for abort-path tests.
pub struct FailingFilesystem;

impl FailingFilesystem {
    fn refuse(path: &Path) -> PipelineError {
        PipelineError::Filesystem {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
    }
}

impl Filesystem for FailingFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), PipelineError> {
        Err(Self::refuse(path))
    }

    fn write_file(&self, path: &Path, _content: &str) -> Result<(), PipelineError> {
        Err(Self::refuse(path))
    }

    fn set_executable(&self, path: &Path) -> Result<(), PipelineError> {
        Err(Self::refuse(path))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

// ── Command runner fakes ──────────────────────────────────────────────────────

/// Runner that records invocations and optionally fails chosen programs.
#[derive(Default)]
pub struct RecordingRunner {
    invocations: Mutex<Vec<(String, Vec<String>, PathBuf)>>,
    fail_programs: Mutex<HashSet<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail with a subprocess error.
    pub fn fail_program(&self, program: &str) {
        self.fail_programs.lock().unwrap().insert(program.into());
    }

    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|(p, a, _)| (p.clone(), a.clone()))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), PipelineError> {
        self.invocations.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
            cwd.to_path_buf(),
        ));

        if self.fail_programs.lock().unwrap().contains(program) {
            return Err(PipelineError::Subprocess {
                command: format!("{program} {}", args.join(" ")),
                details: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}

/// Runner that succeeds silently.
pub struct NullRunner;

impl CommandRunner for NullRunner {
    fn run(&self, _program: &str, _args: &[&str], _cwd: &Path) -> Result<(), PipelineError> {
        Ok(())
    }
}

// ── Template fakes ────────────────────────────────────────────────────────────

/// Template source that writes a single marker file per tier.
pub struct NullTemplates;

impl TemplateSource for NullTemplates {
    fn copy_tier(
        &self,
        tier: Tier,
        dest: &Path,
        fs: &dyn Filesystem,
    ) -> Result<(), PipelineError> {
        fs.write_file(&dest.join("src/server.ts"), tier.as_str())
    }
}
