//! Slipway Core - configuration resolution and the generation pipeline.
//!
//! This crate holds the logic of the scaffolder with no I/O of its own:
//!
//! - [`domain`] resolves sparse user answers into the one immutable
//!   [`domain::ProjectConfig`] per run (tier-implied feature defaults,
//!   override rules, name validation).
//! - [`emission`] evaluates every feature-conditional file rule once per run
//!   into an [`emission::EmissionPlan`].
//! - [`pipeline`] drives the ordered, fail-fast step sequence against that
//!   plan through the outbound [`ports`].
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          slipway-cli (CLI)              │
//! │   prompts / flags -> RawAnswers         │
//! └──────────────────┬──────────────────────┘
//!                    │ resolve
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   domain::ProjectConfig (immutable)     │
//! └──────────────────┬──────────────────────┘
//!                    │ plan + run
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   pipeline (ordered fail-fast steps)    │
//! │   emission (conditional file plan)      │
//! └──────────────────┬──────────────────────┘
//!                    │ via ports
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   slipway-adapters (infrastructure)     │
//! │   filesystem, subprocess, templates     │
//! └─────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod emission;
pub mod error;
pub mod pipeline;
pub mod ports;

#[cfg(test)]
mod testing;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        CiProvider, FeatureSet, FeatureToken, PackageManager, ProjectConfig, RawAnswers, Tier,
    };
    pub use crate::emission::{Artifact, EmissionPlan, Section};
    pub use crate::error::{ErrorCategory, SlipwayError, SlipwayResult};
    pub use crate::pipeline::{
        GenerationStep, PipelineFailure, PipelineReport, StepContext, StepOutcome, generate,
    };
    pub use crate::ports::{CommandRunner, Filesystem, TemplateSource};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
