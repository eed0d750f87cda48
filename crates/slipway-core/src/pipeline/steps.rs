//! The standard generation steps, in their fixed order.
//!
//! Each step is independently idempotent on retry but the sequence is not
//! transactional: a failure leaves everything written so far on disk.
//! File-writing steps consume their section of the precomputed emission
//! plan and re-check no feature flags themselves.

use tracing::debug;

use crate::emission::Section;

use super::{GenerationStep, PipelineError, StepContext, StepOutcome};

/// Synthetic step name for failures raised before step one runs
/// (pre-existing output directory).
pub const PREFLIGHT: &str = "preflight";

/// Subdirectories created up front, before the template copy overlays them.
const SKELETON_DIRS: [&str; 2] = ["src", "tests"];

/// The fixed, ordered step sequence of a generation run.
pub fn standard_steps() -> Vec<Box<dyn GenerationStep>> {
    vec![
        Box::new(CreateSkeleton),
        Box::new(CopyTemplate),
        Box::new(WriteManifest),
        Box::new(WriteTooling),
        Box::new(WriteContainers),
        Box::new(WriteCi),
        Box::new(WriteDocs),
        Box::new(InstallDependencies),
        Box::new(InitGit),
    ]
}

/// Write every artifact of one emission-plan section.
fn write_section(ctx: &StepContext<'_>, section: Section) -> Result<usize, PipelineError> {
    let mut written = 0;
    for artifact in ctx.plan.section(section) {
        let path = ctx.project_path.join(&artifact.path);
        ctx.fs.write_file(&path, &artifact.contents)?;
        if artifact.executable {
            ctx.fs.set_executable(&path)?;
        }
        written += 1;
    }
    Ok(written)
}

// ── 1. create-skeleton ────────────────────────────────────────────────────────

/// Create the project directory and its fixed subdirectory set.
struct CreateSkeleton;

impl GenerationStep for CreateSkeleton {
    fn name(&self) -> &'static str {
        "create-skeleton"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        ctx.fs.create_dir_all(ctx.project_path)?;
        for dir in SKELETON_DIRS {
            ctx.fs.create_dir_all(&ctx.project_path.join(dir))?;
        }
        Ok(StepOutcome::Completed)
    }
}

// ── 2. copy-template ──────────────────────────────────────────────────────────

/// Copy the tier's static skeleton into the project, byte-for-byte.
struct CopyTemplate;

impl GenerationStep for CopyTemplate {
    fn name(&self) -> &'static str {
        "copy-template"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        ctx.templates
            .copy_tier(ctx.config.template(), ctx.project_path, ctx.fs)?;
        Ok(StepOutcome::Completed)
    }
}

// ── 3. write-manifest ─────────────────────────────────────────────────────────

struct WriteManifest;

impl GenerationStep for WriteManifest {
    fn name(&self) -> &'static str {
        "write-manifest"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        write_section(ctx, Section::Manifest)?;
        Ok(StepOutcome::Completed)
    }
}

// ── 4. write-tooling ──────────────────────────────────────────────────────────

struct WriteTooling;

impl GenerationStep for WriteTooling {
    fn name(&self) -> &'static str {
        "write-tooling"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        let written = write_section(ctx, Section::Tooling)?;
        debug!(written, "tooling files written");
        Ok(StepOutcome::Completed)
    }
}

// ── 5. write-containers ───────────────────────────────────────────────────────

struct WriteContainers;

impl GenerationStep for WriteContainers {
    fn name(&self) -> &'static str {
        "write-containers"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        if write_section(ctx, Section::Containers)? == 0 {
            return Ok(StepOutcome::Skipped("container files disabled"));
        }
        Ok(StepOutcome::Completed)
    }
}

// ── 6. write-ci ───────────────────────────────────────────────────────────────

struct WriteCi;

impl GenerationStep for WriteCi {
    fn name(&self) -> &'static str {
        "write-ci"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        if write_section(ctx, Section::Ci)? == 0 {
            return Ok(StepOutcome::Skipped("no CI provider selected"));
        }
        Ok(StepOutcome::Completed)
    }
}

// ── 7. write-docs ─────────────────────────────────────────────────────────────

struct WriteDocs;

impl GenerationStep for WriteDocs {
    fn name(&self) -> &'static str {
        "write-docs"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        write_section(ctx, Section::Docs)?;
        Ok(StepOutcome::Completed)
    }
}

// ── 8. install-dependencies ───────────────────────────────────────────────────

/// Run the package manager's install command.
///
/// A subprocess failure here is downgraded to a warning with the manual
/// command to run: a scaffolded-but-uninstalled project is still usable,
/// so aborting the remaining steps would help nobody.
struct InstallDependencies;

impl GenerationStep for InstallDependencies {
    fn name(&self) -> &'static str {
        "install-dependencies"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        if !ctx.config.install() {
            return Ok(StepOutcome::Skipped("install disabled"));
        }

        let pm = ctx.config.package_manager();
        let (program, args) = pm.install_invocation();
        match ctx.runner.run(program, args, ctx.project_path) {
            Ok(()) => Ok(StepOutcome::Completed),
            Err(PipelineError::Subprocess { details, .. }) => Ok(StepOutcome::Warned(format!(
                "dependency install failed ({details}); run `cd {} && {}` manually",
                ctx.config.name(),
                pm.install_display(),
            ))),
            Err(other) => Err(other),
        }
    }
}

// ── 9. init-git ───────────────────────────────────────────────────────────────

/// Initialise version control and optionally create the initial commit.
struct InitGit;

impl GenerationStep for InitGit {
    fn name(&self) -> &'static str {
        "init-git"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError> {
        if !ctx.config.git() {
            return Ok(StepOutcome::Skipped("git disabled"));
        }

        ctx.runner.run("git", &["init"], ctx.project_path)?;

        if ctx.config.git_commit() {
            ctx.runner.run("git", &["add", "."], ctx.project_path)?;
            ctx.runner.run(
                "git",
                &["commit", "-m", "chore: initial scaffold"],
                ctx.project_path,
            )?;
        }

        Ok(StepOutcome::Completed)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::{ProjectConfig, RawAnswers, Tier};
    use crate::emission::EmissionPlan;
    use crate::pipeline::run_steps;
    use crate::testing::{FailingFilesystem, NullTemplates, RecordingFilesystem, RecordingRunner};

    fn config(raw: RawAnswers) -> ProjectConfig {
        ProjectConfig::resolve(&raw).unwrap()
    }

    fn answers(template: Tier) -> RawAnswers {
        RawAnswers {
            name: Some("demo".into()),
            template,
            ..RawAnswers::default()
        }
    }

    fn run_standard(
        config: &ProjectConfig,
        fs: &RecordingFilesystem,
        runner: &RecordingRunner,
    ) -> crate::pipeline::PipelineReport {
        let plan = EmissionPlan::for_config(config);
        let ctx = StepContext {
            project_path: Path::new("/work/demo"),
            config,
            plan: &plan,
            fs,
            runner,
            templates: &NullTemplates,
        };
        run_steps(&standard_steps(), &ctx, |_, _, _| {}).unwrap()
    }

    #[test]
    fn standard_step_order_is_fixed() {
        let names: Vec<_> = standard_steps().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "create-skeleton",
                "copy-template",
                "write-manifest",
                "write-tooling",
                "write-containers",
                "write-ci",
                "write-docs",
                "install-dependencies",
                "init-git",
            ]
        );
    }

    #[test]
    fn minimal_run_skips_conditional_steps() {
        let config = config(answers(Tier::Minimal));
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        let report = run_standard(&config, &fs, &runner);

        let skipped: Vec<_> = report
            .steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Skipped(_)))
            .map(|s| s.name)
            .collect();
        assert_eq!(skipped, vec!["write-containers", "write-ci", "init-git"]);

        assert!(fs.read_file(Path::new("/work/demo/package.json")).is_some());
        assert!(fs.read_file(Path::new("/work/demo/Dockerfile")).is_none());
    }

    #[test]
    fn full_run_writes_every_conditional_file() {
        let config = config(answers(Tier::Full));
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        run_standard(&config, &fs, &runner);

        for path in [
            "/work/demo/Dockerfile",
            "/work/demo/docker-compose.yml",
            "/work/demo/.github/workflows/ci.yml",
            "/work/demo/README.md",
        ] {
            assert!(fs.read_file(Path::new(path)).is_some(), "missing {path}");
        }
        assert!(fs.is_executable(Path::new("/work/demo/.husky/pre-commit")));
    }

    #[test]
    fn skeleton_dirs_are_created_before_anything_else() {
        let config = config(answers(Tier::Minimal));
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        run_standard(&config, &fs, &runner);

        assert!(fs.has_dir(Path::new("/work/demo")));
        assert!(fs.has_dir(Path::new("/work/demo/src")));
        assert!(fs.has_dir(Path::new("/work/demo/tests")));
    }

    #[test]
    fn install_invokes_the_selected_package_manager() {
        let mut raw = answers(Tier::Minimal);
        raw.package_manager = "pnpm".parse().unwrap();
        let config = config(raw);
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        run_standard(&config, &fs, &runner);

        assert_eq!(
            runner.invocations(),
            vec![("pnpm".to_string(), vec!["install".to_string()])]
        );
    }

    #[test]
    fn install_failure_is_downgraded_and_pipeline_continues() {
        let mut raw = answers(Tier::Minimal);
        raw.git = true;
        let config = config(raw);
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        runner.fail_program("npm");

        let report = run_standard(&config, &fs, &runner);

        let warnings = report.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, "install-dependencies");
        assert!(warnings[0].1.contains("cd demo && npm install"));

        // init-git still ran after the degraded install.
        assert!(
            runner
                .invocations()
                .iter()
                .any(|(p, args)| p == "git" && args == &["init"])
        );
    }

    #[test]
    fn git_commit_sequence_follows_flags() {
        let mut raw = answers(Tier::Minimal);
        raw.git = true;
        raw.git_commit = Some(true);
        raw.install = Some(false);
        let config = config(raw);
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        run_standard(&config, &fs, &runner);

        let git_calls: Vec<Vec<String>> = runner
            .invocations()
            .into_iter()
            .filter(|(p, _)| p == "git")
            .map(|(_, args)| args)
            .collect();
        assert_eq!(
            git_calls,
            vec![
                vec!["init".to_string()],
                vec!["add".to_string(), ".".to_string()],
                vec![
                    "commit".to_string(),
                    "-m".to_string(),
                    "chore: initial scaffold".to_string()
                ],
            ]
        );
    }

    #[test]
    fn git_init_without_commit() {
        let mut raw = answers(Tier::Minimal);
        raw.git = true;
        raw.git_commit = Some(false);
        raw.install = Some(false);
        let config = config(raw);
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        run_standard(&config, &fs, &runner);

        let git_calls: Vec<_> = runner
            .invocations()
            .into_iter()
            .filter(|(p, _)| p == "git")
            .collect();
        assert_eq!(git_calls.len(), 1);
    }

    #[test]
    fn filesystem_failure_aborts_at_step_one() {
        let config = config(answers(Tier::Minimal));
        let plan = EmissionPlan::for_config(&config);
        let runner = RecordingRunner::new();
        let ctx = StepContext {
            project_path: Path::new("/work/demo"),
            config: &config,
            plan: &plan,
            fs: &FailingFilesystem,
            runner: &runner,
            templates: &NullTemplates,
        };

        let failure = run_steps(&standard_steps(), &ctx, |_, _, _| {}).unwrap_err();
        assert_eq!(failure.step, "create-skeleton");
        assert!(failure.completed.steps.is_empty());
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn git_failure_aborts_unlike_install_failure() {
        let mut raw = answers(Tier::Minimal);
        raw.git = true;
        raw.install = Some(false);
        let config = config(raw);
        let fs = RecordingFilesystem::new();
        let runner = RecordingRunner::new();
        runner.fail_program("git");

        let plan = EmissionPlan::for_config(&config);
        let ctx = StepContext {
            project_path: Path::new("/work/demo"),
            config: &config,
            plan: &plan,
            fs: &fs,
            runner: &runner,
            templates: &NullTemplates,
        };

        let failure = run_steps(&standard_steps(), &ctx, |_, _, _| {}).unwrap_err();
        assert_eq!(failure.step, "init-git");
        assert!(matches!(failure.error, PipelineError::Subprocess { .. }));
    }
}
