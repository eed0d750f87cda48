//! Raw answers and the resolved project configuration.
//!
//! [`RawAnswers`] is the opaque record handed over by the prompt front-end
//! or the flag parser. [`ProjectConfig`] is the single canonical record the
//! resolver produces from it — constructed exactly once, read-only
//! thereafter, and passed to every pipeline step.

use tracing::debug;

use super::{
    error::DomainError,
    features::FeatureSet,
    validation::validate_project_name,
    value_objects::{FeatureToken, PackageManager, Tier},
};

// ── RawAnswers ────────────────────────────────────────────────────────────────

/// The sparse set of user selections, as collected.
///
/// The resolver treats this as an opaque record: it validates presence and
/// shape, then derives every [`ProjectConfig`] field from it. `None` fields
/// fall back to the documented defaults during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawAnswers {
    /// Project name. Required; validated against `[a-z0-9-_]+`.
    pub name: Option<String>,

    /// Selected template tier.
    pub template: Tier,

    /// Feature tokens, only ever collected when `template = minimal`.
    ///
    /// `None` means the question was never asked; `Some(vec![])` means it
    /// was asked and nothing was selected. Both resolve to the zero-value
    /// feature set for the minimal tier.
    pub additional_features: Option<Vec<String>>,

    /// Selected package manager.
    pub package_manager: PackageManager,

    /// Whether to initialise version control.
    pub git: bool,

    /// Whether to create an initial commit. Only meaningful when `git` is
    /// true; defaults to true in that case.
    pub git_commit: Option<bool>,

    /// Whether to run dependency installation. The interactive front-end
    /// never asks this question (it is always true there); the flag path
    /// can disable it with `--no-install`.
    pub install: Option<bool>,
}

// ── ProjectConfig ─────────────────────────────────────────────────────────────

/// The fully-resolved, internally-consistent configuration of one run.
///
/// Immutable once produced: fields are private and exposed through
/// accessors only. There is exactly one of these per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    template: Tier,
    features: FeatureSet,
    package_manager: PackageManager,
    git: bool,
    git_commit: bool,
    install: bool,
}

impl ProjectConfig {
    /// Resolve raw answers into a canonical configuration.
    ///
    /// # Resolution rules
    ///
    /// 1. `name` must be present and match the identifier pattern.
    /// 2. `features` comes from [`FeatureSet::resolve`]: a fixed set for
    ///    `api`/`full` (overrides structurally ignored), a membership-test
    ///    replacement for `minimal` with a selection.
    /// 3. `git_commit` is forced to `false` whenever `git` is false.
    /// 4. `install` defaults to `true`.
    ///
    /// Pure and deterministic: no I/O, no randomness — identical answers
    /// always resolve to an identical configuration.
    pub fn resolve(raw: &RawAnswers) -> Result<Self, DomainError> {
        let name = raw
            .name
            .as_deref()
            .ok_or(DomainError::MissingAnswer { field: "name" })?;
        validate_project_name(name)?;

        let overrides = raw
            .additional_features
            .as_ref()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|t| t.parse::<FeatureToken>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let features = FeatureSet::resolve(raw.template, overrides.as_deref());

        let config = Self {
            name: name.to_string(),
            template: raw.template,
            features,
            package_manager: raw.package_manager,
            git: raw.git,
            git_commit: raw.git && raw.git_commit.unwrap_or(true),
            install: raw.install.unwrap_or(true),
        };

        debug!(
            name = %config.name,
            template = %config.template,
            features = ?config.features.enabled_labels(),
            "configuration resolved"
        );

        Ok(config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> Tier {
        self.template
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn git(&self) -> bool {
        self.git
    }

    pub fn git_commit(&self) -> bool {
        self.git_commit
    }

    pub fn install(&self) -> bool {
        self.install
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CiProvider;

    fn answers(name: &str, template: Tier) -> RawAnswers {
        RawAnswers {
            name: Some(name.into()),
            template,
            ..RawAnswers::default()
        }
    }

    #[test]
    fn missing_name_is_rejected() {
        let raw = RawAnswers::default();
        assert_eq!(
            ProjectConfig::resolve(&raw),
            Err(DomainError::MissingAnswer { field: "name" })
        );
    }

    #[test]
    fn invalid_name_is_rejected() {
        for name in ["My App", "my app"] {
            let raw = answers(name, Tier::Minimal);
            assert!(matches!(
                ProjectConfig::resolve(&raw),
                Err(DomainError::InvalidProjectName { .. })
            ));
        }
    }

    #[test]
    fn valid_name_with_underscore_and_digit_is_accepted() {
        let config = ProjectConfig::resolve(&answers("my-api_2", Tier::Minimal)).unwrap();
        assert_eq!(config.name(), "my-api_2");
    }

    #[test]
    fn api_tier_ignores_additional_features() {
        let mut with_extras = answers("svc", Tier::Api);
        with_extras.additional_features = Some(vec!["observability".into()]);
        let mut without = answers("svc", Tier::Api);
        without.additional_features = Some(vec![]);

        let a = ProjectConfig::resolve(&with_extras).unwrap();
        let b = ProjectConfig::resolve(&without).unwrap();
        assert_eq!(a.features(), b.features());
        assert!(!a.features().observability);
    }

    #[test]
    fn minimal_tier_uses_literal_membership() {
        let mut raw = answers("svc", Tier::Minimal);
        raw.additional_features = Some(vec!["docker".into(), "auth".into()]);

        let config = ProjectConfig::resolve(&raw).unwrap();
        let f = config.features();
        assert!(f.docker && f.auth);
        assert!(!f.docker_compose && !f.openapi && !f.observability);
        assert_eq!(f.ci, CiProvider::None);
    }

    #[test]
    fn unknown_feature_token_fails_resolution() {
        let mut raw = answers("svc", Tier::Minimal);
        raw.additional_features = Some(vec!["blockchain".into()]);
        assert!(matches!(
            ProjectConfig::resolve(&raw),
            Err(DomainError::UnknownFeatureToken { .. })
        ));
    }

    #[test]
    fn git_commit_forced_false_without_git() {
        let mut raw = answers("svc", Tier::Minimal);
        raw.git = false;
        raw.git_commit = Some(true);
        let config = ProjectConfig::resolve(&raw).unwrap();
        assert!(!config.git_commit());
    }

    #[test]
    fn git_commit_defaults_true_with_git() {
        let mut raw = answers("svc", Tier::Minimal);
        raw.git = true;
        raw.git_commit = None;
        assert!(ProjectConfig::resolve(&raw).unwrap().git_commit());
    }

    #[test]
    fn install_defaults_to_true() {
        let config = ProjectConfig::resolve(&answers("svc", Tier::Minimal)).unwrap();
        assert!(config.install());

        let mut raw = answers("svc", Tier::Minimal);
        raw.install = Some(false);
        assert!(!ProjectConfig::resolve(&raw).unwrap().install());
    }

    #[test]
    fn resolution_is_deterministic() {
        let mut raw = answers("svc", Tier::Full);
        raw.git = true;
        let a = ProjectConfig::resolve(&raw).unwrap();
        let b = ProjectConfig::resolve(&raw).unwrap();
        assert_eq!(a, b);
    }
}
