//! Interactive answer collection.
//!
//! The canonical resolution path: a short wizard that fills a
//! [`RawAnswers`] record. Compiled in behind the `interactive` cargo feature
//! (default-on); without it, or without a terminal, the caller gets a
//! structured error telling the user to pass flags instead.
//!
//! Only the wizard knows which questions exist and when they are asked —
//! notably, the "additional features" multi-select is only offered for the
//! `minimal` tier, so for `api`/`full` that answer is structurally absent.

use crate::cli::NewArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

use slipway_core::domain::RawAnswers;

/// Collect the remaining answers interactively.
#[cfg(feature = "interactive")]
pub fn collect_answers(args: &NewArgs, config: &AppConfig) -> CliResult<RawAnswers> {
    use std::io::IsTerminal as _;

    use dialoguer::{Confirm, Input, MultiSelect, Select};

    use slipway_core::domain::{FeatureToken, PackageManager, Tier, validate_project_name};

    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        return Err(CliError::InteractiveUnavailable {
            reason: "no terminal attached",
        });
    }

    let prompt_err = |e: dialoguer::Error| CliError::Prompt {
        message: e.to_string(),
    };

    // Name: reuse the positional argument when given.
    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::<String>::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| {
                validate_project_name(input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_err)?,
    };

    // Tier.
    let template = match args.template {
        Some(tier) => tier.into(),
        None => {
            let items: Vec<String> = Tier::ALL
                .iter()
                .map(|t| format!("{:<8} {}", t.as_str(), t.description()))
                .collect();
            let index = Select::new()
                .with_prompt("Template tier")
                .items(&items)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            Tier::ALL[index]
        }
    };

    // Additional features: only asked for the minimal tier.
    let additional_features = if template == Tier::Minimal {
        let items: Vec<&str> = FeatureToken::ALL.iter().map(|t| t.label()).collect();
        let picked = MultiSelect::new()
            .with_prompt("Additional features (space to toggle)")
            .items(&items)
            .interact()
            .map_err(prompt_err)?;
        Some(
            picked
                .into_iter()
                .map(|i| FeatureToken::ALL[i].as_str().to_string())
                .collect(),
        )
    } else {
        None
    };

    // Package manager.
    let package_manager = match args.pm {
        Some(pm) => pm.into(),
        None => {
            let default = config.defaults.package_manager.unwrap_or_default();
            let items: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.as_str()).collect();
            let default_index = PackageManager::ALL
                .iter()
                .position(|pm| *pm == default)
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("Package manager")
                .items(&items)
                .default(default_index)
                .interact()
                .map_err(prompt_err)?;
            PackageManager::ALL[index]
        }
    };

    // Version control.
    let git = Confirm::new()
        .with_prompt("Initialise a git repository?")
        .default(config.defaults.git.unwrap_or(true))
        .interact()
        .map_err(prompt_err)?;

    let git_commit = if git {
        Some(
            Confirm::new()
                .with_prompt("Create an initial commit?")
                .default(!args.no_git_commit)
                .interact()
                .map_err(prompt_err)?,
        )
    } else {
        None
    };

    // No install prompt: the interactive path always installs.
    Ok(RawAnswers {
        name: Some(name),
        template,
        additional_features,
        package_manager,
        git,
        git_commit,
        install: args.no_install.then_some(false),
    })
}

/// Stub for builds without the `interactive` feature.
#[cfg(not(feature = "interactive"))]
pub fn collect_answers(_args: &NewArgs, _config: &AppConfig) -> CliResult<RawAnswers> {
    Err(CliError::InteractiveUnavailable {
        reason: "built without the interactive feature",
    })
}
