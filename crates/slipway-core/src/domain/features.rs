//! Feature resolution: tier defaults and explicit overrides.
//!
//! The rule is deliberately a table lookup, not sequential field mutation:
//!
//! - `api` and `full` resolve to a **fixed** feature set. The override token
//!   set is structurally ignored for these tiers — it is not merged, it does
//!   not seed initial values, it cannot influence the result.
//! - `minimal` with an override set resolves to a **full replacement** built
//!   from per-token membership tests.
//! - `minimal` without an override set resolves to the zero-value set.

use super::value_objects::{CiProvider, FeatureToken, Tier};

/// The fully-resolved optional-feature flags of a project.
///
/// Produced once by [`FeatureSet::resolve`]; read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureSet {
    pub docker: bool,
    pub docker_compose: bool,
    pub ci: CiProvider,
    pub openapi: bool,
    pub auth: bool,
    pub observability: bool,
}

impl FeatureSet {
    /// The zero-value set: everything off.
    pub const NONE: FeatureSet = FeatureSet {
        docker: false,
        docker_compose: false,
        ci: CiProvider::None,
        openapi: false,
        auth: false,
        observability: false,
    };

    /// The authoritative default set for a tier.
    ///
    /// Each tier is a strict superset of the previous one.
    pub fn tier_defaults(tier: Tier) -> Self {
        match tier {
            Tier::Minimal => Self::NONE,
            Tier::Api => Self {
                docker: true,
                docker_compose: true,
                ci: CiProvider::Github,
                openapi: true,
                auth: true,
                observability: false,
            },
            Tier::Full => Self {
                docker: true,
                docker_compose: true,
                ci: CiProvider::Github,
                openapi: true,
                auth: true,
                observability: true,
            },
        }
    }

    /// Build a set from an explicit token selection by membership test.
    ///
    /// When both CI tokens are present, GitHub wins.
    pub fn from_tokens(tokens: &[FeatureToken]) -> Self {
        let has = |t: FeatureToken| tokens.contains(&t);
        Self {
            docker: has(FeatureToken::Docker),
            docker_compose: has(FeatureToken::DockerCompose),
            ci: if has(FeatureToken::CiGithub) {
                CiProvider::Github
            } else if has(FeatureToken::CiGitlab) {
                CiProvider::Gitlab
            } else {
                CiProvider::None
            },
            openapi: has(FeatureToken::OpenApi),
            auth: has(FeatureToken::Auth),
            observability: has(FeatureToken::Observability),
        }
    }

    /// Resolve the feature set for a tier and an optional override selection.
    ///
    /// This is the single entry point the config resolver uses. Pure: no
    /// I/O, no state, identical input yields identical output.
    pub fn resolve(tier: Tier, overrides: Option<&[FeatureToken]>) -> Self {
        match (tier, overrides) {
            // Full replacement, not a merge: the zero-value defaults are
            // discarded entirely when an override set is supplied.
            (Tier::Minimal, Some(tokens)) => Self::from_tokens(tokens),
            (tier, _) => Self::tier_defaults(tier),
        }
    }

    /// Human-readable labels of the enabled features, for display.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.docker {
            labels.push("docker");
        }
        if self.docker_compose {
            labels.push("docker-compose");
        }
        match self.ci {
            CiProvider::Github => labels.push("ci:github"),
            CiProvider::Gitlab => labels.push("ci:gitlab"),
            CiProvider::None => {}
        }
        if self.openapi {
            labels.push("openapi");
        }
        if self.auth {
            labels.push("auth");
        }
        if self.observability {
            labels.push("observability");
        }
        labels
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
