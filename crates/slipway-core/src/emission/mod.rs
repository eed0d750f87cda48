//! Conditional file emission.
//!
//! Which generated files exist for a given configuration is decided in one
//! place: [`EmissionPlan::for_config`] evaluates every feature-conditional
//! rule exactly once per run and returns a flat list of [`Artifact`]s. The
//! file-writing pipeline steps then consume their slice of the plan without
//! re-checking any flags, which keeps "what exists when" auditable and makes
//! `--dry-run` a plan printout rather than a simulation.

mod ci;
mod containers;
mod docs;
mod manifest;
mod tooling;

use crate::domain::ProjectConfig;

// ── Artifact ──────────────────────────────────────────────────────────────────

/// Which pipeline step a generated file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Dependency manifest (`package.json`).
    Manifest,
    /// Static tooling configuration (tsconfig, lint, hooks, env template).
    Tooling,
    /// Container build file and compose definition.
    Containers,
    /// CI workflow definition.
    Ci,
    /// Human-readable documentation.
    Docs,
}

/// One generated file: a project-relative path and its full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub section: Section,
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    pub contents: String,
    pub executable: bool,
}

impl Artifact {
    fn new(section: Section, path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            section,
            path: path.into(),
            contents: contents.into(),
            executable: false,
        }
    }

    fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

// ── EmissionPlan ──────────────────────────────────────────────────────────────

/// The once-per-run list of conditional file artifacts.
#[derive(Debug, Clone)]
pub struct EmissionPlan {
    artifacts: Vec<Artifact>,
}

impl EmissionPlan {
    /// Evaluate every conditional emission rule against the resolved
    /// configuration.
    pub fn for_config(config: &ProjectConfig) -> Self {
        let mut artifacts = vec![manifest::artifact(config)];
        artifacts.extend(tooling::artifacts(config));
        artifacts.extend(containers::artifacts(config));
        artifacts.extend(ci::artifacts(config));
        artifacts.extend(docs::artifacts(config));
        Self { artifacts }
    }

    /// Artifacts belonging to one pipeline step.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.section == section)
    }

    /// All project-relative paths, in emission order. Used by `--dry-run`.
    pub fn paths(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.path.as_str()).collect()
    }

    /// Look up an artifact by its project-relative path.
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
    use super::test_support::{config_for_tier, config_with};
    use super::*;
    use crate::domain::Tier;

    #[test]
    fn dockerfile_present_iff_docker() {
        let with = EmissionPlan::for_config(&config_with(&["docker"]));
        assert!(with.contains("Dockerfile"));

        let without = EmissionPlan::for_config(&config_with(&[]));
        assert!(!without.contains("Dockerfile"));
    }

    #[test]
    fn compose_file_present_iff_docker_compose() {
        let with = EmissionPlan::for_config(&config_with(&["docker-compose"]));
        assert!(with.contains("docker-compose.yml"));

        let without = EmissionPlan::for_config(&config_with(&["docker"]));
        assert!(!without.contains("docker-compose.yml"));
    }

    #[test]
    fn ci_workflow_present_iff_provider_selected() {
        let github = EmissionPlan::for_config(&config_with(&["ci-github"]));
        assert!(github.contains(".github/workflows/ci.yml"));
        assert!(!github.contains(".gitlab-ci.yml"));

        let gitlab = EmissionPlan::for_config(&config_with(&["ci-gitlab"]));
        assert!(gitlab.contains(".gitlab-ci.yml"));
        assert!(!gitlab.contains(".github/workflows/ci.yml"));

        let none = EmissionPlan::for_config(&config_with(&[]));
        assert!(!none.contains(".github/workflows/ci.yml"));
        assert!(!none.contains(".gitlab-ci.yml"));
    }

    #[test]
    fn unconditional_files_always_present() {
        let plan = EmissionPlan::for_config(&config_with(&[]));
        for path in [
            "package.json",
            "tsconfig.json",
            "eslint.config.js",
            ".prettierrc.json",
            ".gitignore",
            ".env.example",
            ".husky/pre-commit",
            ".husky/commit-msg",
            ".lintstagedrc.json",
            "commitlint.config.cjs",
            "README.md",
            "ARCHITECTURE.md",
        ] {
            assert!(plan.contains(path), "missing {path}");
        }
    }

    #[test]
    fn full_tier_plan_is_superset_of_minimal_plan() {
        let minimal = EmissionPlan::for_config(&config_for_tier(Tier::Minimal));
        let full = EmissionPlan::for_config(&config_for_tier(Tier::Full));
        for path in minimal.paths() {
            assert!(full.contains(path), "full tier dropped {path}");
        }
        assert!(full.len() > minimal.len());
    }

    #[test]
    fn plan_is_deterministic() {
        let config = config_for_tier(Tier::Full);
        let a = EmissionPlan::for_config(&config);
        let b = EmissionPlan::for_config(&config);
        assert_eq!(a.artifacts, b.artifacts);
    }

    #[test]
    fn hooks_are_the_only_executables() {
        let plan = EmissionPlan::for_config(&config_for_tier(Tier::Full));
        let executables: Vec<_> = plan
            .artifacts
            .iter()
            .filter(|a| a.executable)
            .map(|a| a.path.as_str())
            .collect();
        assert_eq!(executables, vec![".husky/pre-commit", ".husky/commit-msg"]);
    }
}
