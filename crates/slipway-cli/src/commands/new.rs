//! Implementation of the `slipway new` command.
//!
//! Responsibility: turn CLI arguments (or interactive answers) into
//! [`RawAnswers`], hand them to the core resolver, and drive the generation
//! pipeline. No resolution or emission logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use slipway_adapters::{EmbeddedTemplates, LocalFilesystem, ProcessRunner};
use slipway_core::domain::{ProjectConfig, RawAnswers, Tier};
use slipway_core::emission::EmissionPlan;
use slipway_core::pipeline::{PipelineError, generate};

use crate::{
    cli::{CiArg, GlobalArgs, NewArgs, TierArg},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompts,
};

/// Execute the `slipway new` command.
///
/// Dispatch sequence:
/// 1. Conflict check for a name given up front (before any prompting)
/// 2. Collect raw answers — flag-driven when name and `--template` are both
///    present, interactive prompts otherwise
/// 3. Resolve into the one `ProjectConfig` of this run
/// 4. Conflict check again (the name may have come from a prompt)
/// 5. Early-exit if `--dry-run`
/// 6. Confirm with the user unless `--yes` or `--quiet`
/// 7. Run the pipeline and report warnings / next steps
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Fail before prompting when the target is already taken.
    if let Some(name) = &args.name {
        ensure_no_conflict(Path::new(name))?;
    }

    // 2. Raw answers.
    let raw = match (&args.name, args.template) {
        (Some(_), Some(template)) => answers_from_flags(&args, template, &config),
        _ => prompts::collect_answers(&args, &config)?,
    };

    // 3. Resolve.
    let project = ProjectConfig::resolve(&raw).map_err(|e| CliError::Core(e.into()))?;
    debug!(
        name = project.name(),
        template = %project.template(),
        features = ?project.features().enabled_labels(),
        pm = %project.package_manager(),
        "answers resolved"
    );

    // 4. The prompt may have introduced a new name; check again.
    let project_path = PathBuf::from(project.name());
    ensure_no_conflict(&project_path)?;

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        return print_plan(&project, &output);
    }

    // 6. Confirm.
    if !output.is_quiet() && !args.yes {
        show_configuration(&project, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 7. Run the pipeline.
    let fs = LocalFilesystem::new();
    let runner = ProcessRunner::new();
    let templates = EmbeddedTemplates::new();

    output.header(&format!("Creating '{}'...", project.name()))?;
    info!(project = project.name(), "generation started");

    let bar = output.step_progress(0);
    let report = generate(
        &project_path,
        &project,
        &fs,
        &runner,
        &templates,
        |index, total, name| {
            bar.set_length(total as u64);
            bar.set_position(index as u64);
            bar.set_message(name);
        },
    )?;
    bar.finish_and_clear();

    info!(project = project.name(), "generation completed");

    // 8. Degraded steps first, then the success summary.
    for (step, message) in report.warnings() {
        output.warning(&format!("{step}: {message}"))?;
    }

    output.success(&format!("Project '{}' created!", project.name()))?;
    print_next_steps(&project, report.warnings().is_empty(), &output)?;

    Ok(())
}

// ── Answer construction ───────────────────────────────────────────────────────

/// Build raw answers from flag values alone (non-interactive path).
///
/// The feature-token set is only constructed for the minimal tier — for
/// `api`/`full` it stays absent, mirroring the wizard, so the resolver's
/// tier-implication rules apply identically on both paths.
fn answers_from_flags(args: &NewArgs, template: TierArg, config: &AppConfig) -> RawAnswers {
    let template = Tier::from(template);

    let additional_features = (template == Tier::Minimal).then(|| {
        let mut tokens = Vec::new();
        if args.docker {
            tokens.push("docker".to_string());
        }
        if args.docker_compose {
            tokens.push("docker-compose".to_string());
        }
        match args.ci {
            Some(CiArg::Github) => tokens.push("ci-github".to_string()),
            Some(CiArg::Gitlab) => tokens.push("ci-gitlab".to_string()),
            Some(CiArg::None) | None => {}
        }
        tokens
    });

    RawAnswers {
        name: args.name.clone(),
        template,
        additional_features,
        package_manager: args
            .pm
            .map(Into::into)
            .or(config.defaults.package_manager)
            .unwrap_or_default(),
        git: args.git,
        git_commit: args.no_git_commit.then_some(false),
        install: args.no_install.then_some(false),
    }
}

fn ensure_no_conflict(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::Core(
            PipelineError::Conflict {
                path: path.to_path_buf(),
            }
            .into(),
        ));
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn print_plan(project: &ProjectConfig, out: &OutputManager) -> CliResult<()> {
    let plan = EmissionPlan::for_config(project);
    let skeleton = EmbeddedTemplates::tier_paths(project.template());

    out.header(&format!(
        "Dry run: would create '{}/' with {} files",
        project.name(),
        plan.len() + skeleton.len(),
    ))?;
    for path in skeleton {
        out.print(&format!("  {path}"))?;
    }
    for path in plan.paths() {
        out.print(&format!("  {path}"))?;
    }
    if project.install() {
        out.print(&format!(
            "  + run: {}",
            project.package_manager().install_display()
        ))?;
    }
    if project.git() {
        out.print("  + run: git init")?;
    }
    Ok(())
}

fn show_configuration(project: &ProjectConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", project.name()))?;
    out.print(&format!("  Template:  {}", project.template()))?;
    let labels = project.features().enabled_labels();
    let features = if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    };
    out.print(&format!("  Features:  {features}"))?;
    out.print(&format!("  Pkg mgr:   {}", project.package_manager()))?;
    out.print(&format!(
        "  Git:       {}",
        match (project.git(), project.git_commit()) {
            (true, true) => "init + initial commit",
            (true, false) => "init only",
            (false, _) => "no",
        }
    ))?;
    out.print(&format!(
        "  Install:   {}",
        if project.install() { "yes" } else { "no" }
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn print_next_steps(
    project: &ProjectConfig,
    install_ok: bool,
    out: &OutputManager,
) -> CliResult<()> {
    let pm = project.package_manager();
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", project.name()))?;
    if !project.install() || !install_ok {
        out.print(&format!("  {}", pm.install_display()))?;
    }
    out.print(&format!("  {}", pm.run_script("dev")))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PmArg;

    fn new_args(name: &str, template: TierArg) -> NewArgs {
        NewArgs {
            name: Some(name.into()),
            template: Some(template),
            docker: false,
            docker_compose: false,
            ci: None,
            pm: None,
            git: false,
            no_git_commit: false,
            no_install: false,
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn minimal_flags_become_feature_tokens() {
        let mut args = new_args("svc", TierArg::Minimal);
        args.docker = true;
        args.ci = Some(CiArg::Github);

        let raw = answers_from_flags(&args, TierArg::Minimal, &AppConfig::default());
        assert_eq!(
            raw.additional_features,
            Some(vec!["docker".to_string(), "ci-github".to_string()])
        );
    }

    #[test]
    fn api_tier_never_collects_tokens() {
        let mut args = new_args("svc", TierArg::Api);
        args.docker = true;
        args.ci = Some(CiArg::Gitlab);

        let raw = answers_from_flags(&args, TierArg::Api, &AppConfig::default());
        assert_eq!(raw.additional_features, None);
    }

    #[test]
    fn flag_path_matches_resolver_rules() {
        // Same raw shape as the wizard produces, so tier implication holds.
        let args = new_args("svc", TierArg::Api);
        let raw = answers_from_flags(&args, TierArg::Api, &AppConfig::default());
        let project = ProjectConfig::resolve(&raw).unwrap();
        assert!(project.features().docker);
        assert!(project.features().auth);
    }

    #[test]
    fn no_install_flag_disables_install() {
        let mut args = new_args("svc", TierArg::Minimal);
        args.no_install = true;
        let raw = answers_from_flags(&args, TierArg::Minimal, &AppConfig::default());
        let project = ProjectConfig::resolve(&raw).unwrap();
        assert!(!project.install());
    }

    #[test]
    fn no_git_commit_flag_with_git() {
        let mut args = new_args("svc", TierArg::Minimal);
        args.git = true;
        args.no_git_commit = true;
        let raw = answers_from_flags(&args, TierArg::Minimal, &AppConfig::default());
        let project = ProjectConfig::resolve(&raw).unwrap();
        assert!(project.git());
        assert!(!project.git_commit());
    }

    #[test]
    fn config_default_package_manager_applies() {
        let config = AppConfig {
            defaults: crate::config::Defaults {
                package_manager: Some(slipway_core::domain::PackageManager::Bun),
                git: None,
            },
            ..AppConfig::default()
        };
        let args = new_args("svc", TierArg::Minimal);
        let raw = answers_from_flags(&args, TierArg::Minimal, &config);
        assert_eq!(
            raw.package_manager,
            slipway_core::domain::PackageManager::Bun
        );
    }

    #[test]
    fn pm_flag_overrides_config_default() {
        let config = AppConfig {
            defaults: crate::config::Defaults {
                package_manager: Some(slipway_core::domain::PackageManager::Bun),
                git: None,
            },
            ..AppConfig::default()
        };
        let mut args = new_args("svc", TierArg::Minimal);
        args.pm = Some(PmArg::Yarn);
        let raw = answers_from_flags(&args, TierArg::Minimal, &config);
        assert_eq!(
            raw.package_manager,
            slipway_core::domain::PackageManager::Yarn
        );
    }

    #[test]
    fn conflict_check_rejects_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("taken");
        std::fs::create_dir(&existing).unwrap();

        let err = ensure_no_conflict(&existing).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        assert!(ensure_no_conflict(&tmp.path().join("free")).is_ok());
    }
}
