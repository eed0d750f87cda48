//! Value objects for the scaffolding domain.
//!
//! Small, copyable enums with no behavior beyond parsing and display.
//! Everything here is immutable and comparable; the resolver composes these
//! into a [`super::ProjectConfig`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

// ── Tier ──────────────────────────────────────────────────────────────────────

/// Template tier.
///
/// Ordered: each tier's default feature set is a strict superset of the
/// previous tier's. The ordering is load-bearing for `PartialOrd` comparisons
/// in the resolver tests, not for resolution itself (which is a table lookup).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Bare skeleton: server entry point, health route, tests. No extras.
    #[default]
    Minimal,
    /// Production API: Docker, Compose, GitHub CI, OpenAPI docs, auth.
    Api,
    /// Everything in `api` plus observability (tracing/metrics).
    Full,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Minimal, Tier::Api, Tier::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Api => "api",
            Self::Full => "full",
        }
    }

    /// One-line description for `slipway list` and the interactive prompt.
    pub fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Bare service skeleton; pick features yourself",
            Self::Api => "Production API: Docker, CI, OpenAPI, auth",
            Self::Full => "Everything in api, plus observability",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "api" => Ok(Self::Api),
            "full" => Ok(Self::Full),
            _ => Err(DomainError::UnknownTier { value: s.into() }),
        }
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// Package manager used for the install step and for the command strings
/// embedded in generated docs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Program and arguments for the dependency-install subprocess.
    pub fn install_invocation(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Npm => ("npm", &["install"]),
            Self::Pnpm => ("pnpm", &["install"]),
            Self::Yarn => ("yarn", &["install"]),
            Self::Bun => ("bun", &["install"]),
        }
    }

    /// The full install command as the user would type it.
    pub fn install_display(self) -> String {
        let (program, args) = self.install_invocation();
        if args.is_empty() {
            program.to_string()
        } else {
            format!("{program} {}", args.join(" "))
        }
    }

    /// Command string for running a package script, as embedded in docs.
    ///
    /// npm and bun require the `run` keyword; pnpm and yarn accept the script
    /// name directly.
    pub fn run_script(self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {script}"),
            Self::Pnpm => format!("pnpm {script}"),
            Self::Yarn => format!("yarn {script}"),
            Self::Bun => format!("bun run {script}"),
        }
    }

    /// Prefix for invoking a locally-installed binary (used in git hooks).
    pub fn exec_prefix(self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Pnpm => "pnpm exec",
            Self::Yarn => "yarn",
            Self::Bun => "bunx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            _ => Err(DomainError::UnknownPackageManager { value: s.into() }),
        }
    }
}

// ── CiProvider ────────────────────────────────────────────────────────────────

/// Continuous-integration provider for the generated workflow file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum CiProvider {
    Github,
    Gitlab,
    #[default]
    None,
}

impl CiProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::None => "none",
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "none" => Ok(Self::None),
            _ => Err(DomainError::UnknownCiProvider { value: s.into() }),
        }
    }
}

// ── FeatureToken ──────────────────────────────────────────────────────────────

/// One entry of the "additional features" selection collected for the
/// `minimal` tier.
///
/// Tokens are the wire format between the prompt front-end (or the flag
/// parser) and the resolver. The resolver tests membership of each token;
/// it never mutates the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureToken {
    Docker,
    DockerCompose,
    CiGithub,
    CiGitlab,
    OpenApi,
    Auth,
    Observability,
}

impl FeatureToken {
    pub const ALL: [FeatureToken; 7] = [
        FeatureToken::Docker,
        FeatureToken::DockerCompose,
        FeatureToken::CiGithub,
        FeatureToken::CiGitlab,
        FeatureToken::OpenApi,
        FeatureToken::Auth,
        FeatureToken::Observability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::DockerCompose => "docker-compose",
            Self::CiGithub => "ci-github",
            Self::CiGitlab => "ci-gitlab",
            Self::OpenApi => "openapi",
            Self::Auth => "auth",
            Self::Observability => "observability",
        }
    }

    /// Label shown in the interactive multi-select.
    pub fn label(self) -> &'static str {
        match self {
            Self::Docker => "Dockerfile",
            Self::DockerCompose => "Docker Compose",
            Self::CiGithub => "GitHub Actions CI",
            Self::CiGitlab => "GitLab CI",
            Self::OpenApi => "OpenAPI docs",
            Self::Auth => "Authentication",
            Self::Observability => "Observability (tracing + metrics)",
        }
    }
}

impl fmt::Display for FeatureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docker" => Ok(Self::Docker),
            "docker-compose" => Ok(Self::DockerCompose),
            "ci-github" => Ok(Self::CiGithub),
            "ci-gitlab" => Ok(Self::CiGitlab),
            "openapi" => Ok(Self::OpenApi),
            "auth" => Ok(Self::Auth),
            "observability" => Ok(Self::Observability),
            _ => Err(DomainError::UnknownFeatureToken { token: s.into() }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
