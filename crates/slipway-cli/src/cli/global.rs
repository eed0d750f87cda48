//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `slipway -v new`
//! and `slipway new -v` both work.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity counter: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Raise the logging level. Without the flag only warnings \
                     and errors are shown; -v adds progress messages, -vv adds \
                     diagnostics, -vvv traces everything."
    )]
    pub verbose: u8,

    /// Suppress everything except errors (mutually exclusive with `-v`).
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour. Also triggered by the `NO_COLOR` environment
    /// variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from this file instead of the platform default
    /// location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
