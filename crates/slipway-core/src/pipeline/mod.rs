//! The generation pipeline: an ordered, fail-fast sequence of named steps.
//!
//! Steps are descriptors returning a result type, not exception-style
//! control flow: tests can assert exactly which step ran, which did not, and
//! which step a failure belongs to. The first failing step aborts the run;
//! nothing is rolled back — a partially generated directory is left on disk
//! and is manually recoverable.

pub mod error;
pub mod steps;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ProjectConfig;
use crate::emission::EmissionPlan;
use crate::ports::{CommandRunner, Filesystem, TemplateSource};

pub use error::PipelineError;

// ── Step interface ────────────────────────────────────────────────────────────

/// One unit of the generation sequence. Synchronous, ordered, fail-fast.
pub trait GenerationStep {
    /// Stable step name, used for progress display and failure attribution.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome, PipelineError>;
}

/// What a successful step reports.
///
/// Failure is not an outcome — a failing step returns `Err`, which aborts
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// The step had nothing to do for this configuration.
    Skipped(&'static str),
    /// The step failed in a recoverable way; the pipeline continues and the
    /// message is surfaced to the user after the run.
    Warned(String),
}

/// Everything a step may touch: the resolved configuration, the target
/// directory, the precomputed emission plan, and the outbound ports.
pub struct StepContext<'a> {
    pub project_path: &'a Path,
    pub config: &'a ProjectConfig,
    pub plan: &'a EmissionPlan,
    pub fs: &'a dyn Filesystem,
    pub runner: &'a dyn CommandRunner,
    pub templates: &'a dyn TemplateSource,
}

// ── Report and failure ────────────────────────────────────────────────────────

/// Outcome of one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: &'static str,
    pub outcome: StepOutcome,
}

/// Per-step record of a completed (or aborted) run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub steps: Vec<StepRecord>,
}

impl PipelineReport {
    /// Names of the steps that were invoked, in order.
    pub fn executed(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name).collect()
    }

    /// Warnings collected from steps that completed degraded.
    pub fn warnings(&self) -> Vec<(&'static str, &str)> {
        self.steps
            .iter()
            .filter_map(|s| match &s.outcome {
                StepOutcome::Warned(msg) => Some((s.name, msg.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// A pipeline abort: the failing step, its error, and what ran before it.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {error}")]
pub struct PipelineFailure {
    pub step: &'static str,
    #[source]
    pub error: PipelineError,
    /// Steps that were invoked before the abort, the failing one excluded.
    pub completed: PipelineReport,
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Execute steps strictly in order, aborting on the first failure.
///
/// `progress` is called before each step with `(index, total, name)` so the
/// CLI can render a progress bar; it is a plain callback, not a port,
/// because nothing is decided by it.
pub fn run_steps(
    steps: &[Box<dyn GenerationStep>],
    ctx: &StepContext<'_>,
    mut progress: impl FnMut(usize, usize, &'static str),
) -> Result<PipelineReport, PipelineFailure> {
    let total = steps.len();
    let mut report = PipelineReport::default();

    for (index, step) in steps.iter().enumerate() {
        progress(index, total, step.name());
        debug!(step = step.name(), "running pipeline step");

        match step.run(ctx) {
            Ok(outcome) => {
                match &outcome {
                    StepOutcome::Completed => {}
                    StepOutcome::Skipped(reason) => {
                        debug!(step = step.name(), reason = %reason, "step skipped")
                    }
                    StepOutcome::Warned(msg) => {
                        warn!(step = step.name(), warning = %msg, "step completed with warning")
                    }
                }
                report.steps.push(StepRecord {
                    name: step.name(),
                    outcome,
                });
            }
            Err(error) => {
                warn!(step = step.name(), %error, "pipeline aborted");
                return Err(PipelineFailure {
                    step: step.name(),
                    error,
                    completed: report,
                });
            }
        }
    }

    info!(steps = total, "pipeline completed");
    Ok(report)
}

/// Run the standard generation pipeline for one resolved configuration.
///
/// Verifies the output directory does not exist (checked here, immediately
/// before step one, in addition to the CLI's pre-prompt check), computes the
/// emission plan once, and executes [`steps::standard_steps`].
pub fn generate(
    project_path: &Path,
    config: &ProjectConfig,
    fs: &dyn Filesystem,
    runner: &dyn CommandRunner,
    templates: &dyn TemplateSource,
    progress: impl FnMut(usize, usize, &'static str),
) -> Result<PipelineReport, PipelineFailure> {
    if fs.exists(project_path) {
        return Err(PipelineFailure {
            step: steps::PREFLIGHT,
            error: PipelineError::Conflict {
                path: project_path.to_path_buf(),
            },
            completed: PipelineReport::default(),
        });
    }

    let plan = EmissionPlan::for_config(config);
    let ctx = StepContext {
        project_path,
        config,
        plan: &plan,
        fs,
        runner,
        templates,
    };

    run_steps(&steps::standard_steps(), &ctx, progress)
}

// ── tests ─────────────────────────────────────────────────────────────────────
