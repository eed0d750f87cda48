//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use slipway_core::domain::{CiProvider, PackageManager, Tier};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slipway",
    bin_name = "slipway",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26f5} Application scaffolding from a handful of answers",
    long_about = "Slipway turns a few choices (tier, features, package manager) \
                  into a ready-to-run service skeleton.",
    after_help = "EXAMPLES:\n\
        \x20 slipway new                                # interactive prompts\n\
        \x20 slipway new my-api --template api --pm pnpm --git\n\
        \x20 slipway new lab --template minimal --docker --ci github --no-install\n\
        \x20 slipway list\n\
        \x20 slipway completions bash > /usr/share/bash-completion/completions/slipway",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new project.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new project",
        after_help = "EXAMPLES:\n\
            \x20 slipway new                       # interactive prompts\n\
            \x20 slipway new my-api --template api --pm pnpm --git\n\
            \x20 slipway new lab --template minimal --docker-compose --no-git-commit"
    )]
    New(NewArgs),

    /// List template tiers and their implied features.
    #[command(
        visible_alias = "ls",
        about = "List template tiers",
        after_help = "EXAMPLES:\n\
            \x20 slipway list"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slipway completions bash > ~/.local/share/bash-completion/completions/slipway\n\
            \x20 slipway completions zsh  > ~/.zfunc/_slipway\n\
            \x20 slipway completions fish > ~/.config/fish/completions/slipway.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `slipway new`.
///
/// With a name and `--template` the command is fully flag-driven; otherwise
/// the interactive prompts collect the missing answers. Both paths feed the
/// same resolver, so tier-implication and override rules are identical.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Template tier.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TIER",
        value_enum,
        help = "Template tier"
    )]
    pub template: Option<TierArg>,

    /// Add a Dockerfile (minimal tier only; api/full always include it).
    #[arg(long = "docker", help = "Generate a Dockerfile")]
    pub docker: bool,

    /// Add a compose definition (minimal tier only).
    #[arg(long = "docker-compose", help = "Generate a docker-compose.yml")]
    pub docker_compose: bool,

    /// CI provider (minimal tier only; api/full always use GitHub).
    #[arg(long = "ci", value_name = "PROVIDER", value_enum, help = "CI provider")]
    pub ci: Option<CiArg>,

    /// Package manager for install commands and generated docs.
    #[arg(long = "pm", value_name = "PM", value_enum, help = "Package manager")]
    pub pm: Option<PmArg>,

    /// Initialise a git repository.
    #[arg(long = "git", help = "Initialise version control")]
    pub git: bool,

    /// Skip the initial commit (only meaningful with --git).
    #[arg(long = "no-git-commit", help = "Skip the initial commit")]
    pub no_git_commit: bool,

    /// Skip dependency installation.
    #[arg(long = "no-install", help = "Skip dependency installation")]
    pub no_install: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Print the file plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `slipway list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// One tier per line, no feature details.
    #[arg(long = "plain", help = "Print tier names only")]
    pub plain: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slipway completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template tiers, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TierArg {
    Minimal,
    Api,
    Full,
}

impl From<TierArg> for Tier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::Minimal => Tier::Minimal,
            TierArg::Api => Tier::Api,
            TierArg::Full => Tier::Full,
        }
    }
}

/// Package managers, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PmArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<PmArg> for PackageManager {
    fn from(value: PmArg) -> Self {
        match value {
            PmArg::Npm => PackageManager::Npm,
            PmArg::Pnpm => PackageManager::Pnpm,
            PmArg::Yarn => PackageManager::Yarn,
            PmArg::Bun => PackageManager::Bun,
        }
    }
}

/// CI providers, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CiArg {
    Github,
    Gitlab,
    None,
}

impl From<CiArg> for CiProvider {
    fn from(value: CiArg) -> Self {
        match value {
            CiArg::Github => CiProvider::Github,
            CiArg::Gitlab => CiProvider::Gitlab,
            CiArg::None => CiProvider::None,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
