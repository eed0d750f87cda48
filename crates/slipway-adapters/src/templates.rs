//! Embedded per-tier template skeletons.
//!
//! The skeletons ship inside the binary via `include_dir`, one directory per
//! tier under `assets/templates/`. Copying is byte-for-byte: no parsing, no
//! variable substitution — the core treats skeleton contents as opaque.

use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};
use tracing::debug;

use slipway_core::domain::Tier;
use slipway_core::pipeline::error::PipelineError;
use slipway_core::ports::{Filesystem, TemplateSource};

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/templates");

/// Template source backed by the compiled-in skeleton trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Project-relative paths of one tier's skeleton files (testing and
    /// dry-run display).
    pub fn tier_paths(tier: Tier) -> Vec<String> {
        let mut paths = Vec::new();
        if let Some(root) = TEMPLATES.get_dir(tier.as_str()) {
            collect_paths(root, tier, &mut paths);
        }
        paths.sort();
        paths
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn copy_tier(
        &self,
        tier: Tier,
        dest: &Path,
        fs: &dyn Filesystem,
    ) -> Result<(), PipelineError> {
        let root = TEMPLATES
            .get_dir(tier.as_str())
            .ok_or(PipelineError::TemplateMissing { tier })?;

        copy_dir(root, tier, dest, fs)?;
        debug!(tier = %tier, dest = %dest.display(), "template skeleton copied");
        Ok(())
    }
}

fn copy_dir(
    dir: &Dir<'_>,
    tier: Tier,
    dest: &Path,
    fs: &dyn Filesystem,
) -> Result<(), PipelineError> {
    for entry in dir.entries() {
        // Entry paths are relative to the include root, e.g.
        // `minimal/src/server.ts`; strip the tier prefix.
        let relative = entry
            .path()
            .strip_prefix(tier.as_str())
            .map_err(|_| PipelineError::TemplateMissing { tier })?;

        match entry {
            DirEntry::Dir(subdir) => {
                fs.create_dir_all(&dest.join(relative))?;
                copy_dir(subdir, tier, dest, fs)?;
            }
            DirEntry::File(file) => {
                let contents = file
                    .contents_utf8()
                    .ok_or(PipelineError::TemplateMissing { tier })?;
                fs.write_file(&dest.join(relative), contents)?;
            }
        }
    }
    Ok(())
}

fn collect_paths(dir: &Dir<'_>, tier: Tier, out: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_paths(subdir, tier, out),
            DirEntry::File(file) => {
                if let Ok(relative) = file.path().strip_prefix(tier.as_str()) {
                    out.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn every_tier_has_a_skeleton() {
        for tier in Tier::ALL {
            let paths = EmbeddedTemplates::tier_paths(tier);
            assert!(!paths.is_empty(), "no skeleton for {tier}");
            assert!(
                paths.iter().any(|p| p == "src/server.ts"),
                "{tier} is missing src/server.ts"
            );
            assert!(
                paths.iter().any(|p| p.starts_with("tests/")),
                "{tier} has no tests"
            );
        }
    }

    #[test]
    fn copy_writes_the_whole_tree() {
        let fs = MemoryFilesystem::new();
        let templates = EmbeddedTemplates::new();
        templates
            .copy_tier(Tier::Minimal, Path::new("/out"), &fs)
            .unwrap();

        let expected = EmbeddedTemplates::tier_paths(Tier::Minimal);
        assert_eq!(fs.file_count(), expected.len());
        for path in expected {
            assert!(
                fs.read_file(&Path::new("/out").join(&path)).is_some(),
                "missing {path}"
            );
        }
    }

    #[test]
    fn copy_is_byte_for_byte() {
        let fs = MemoryFilesystem::new();
        let templates = EmbeddedTemplates::new();
        templates
            .copy_tier(Tier::Minimal, Path::new("/out"), &fs)
            .unwrap();

        let embedded = TEMPLATES
            .get_file("minimal/src/server.ts")
            .unwrap()
            .contents_utf8()
            .unwrap();
        assert_eq!(
            fs.read_file(Path::new("/out/src/server.ts")).unwrap(),
            embedded
        );
    }

    #[test]
    fn api_tier_carries_auth_and_openapi_plugins() {
        let paths = EmbeddedTemplates::tier_paths(Tier::Api);
        assert!(paths.iter().any(|p| p == "src/plugins/auth.ts"));
        assert!(paths.iter().any(|p| p == "src/plugins/openapi.ts"));
    }

    #[test]
    fn full_tier_is_a_superset_of_api() {
        let api = EmbeddedTemplates::tier_paths(Tier::Api);
        let full = EmbeddedTemplates::tier_paths(Tier::Full);
        for path in &api {
            assert!(full.contains(path), "full tier dropped {path}");
        }
        assert!(full.iter().any(|p| p.starts_with("src/telemetry/")));
    }
}
