//! Tracing subscriber setup.
//!
//! The subscriber is installed here, once, at startup; the core and adapter
//! crates only emit events. `-v`/`-vv`/`-vvv` raise the level from the warn
//! default to info/debug/trace, `--quiet` drops it to error, and a `RUST_LOG`
//! value in the environment overrides the flags entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => {
            // Scope the directive to our own crates so a noisy dependency
            // cannot drown -vvv output.
            let level = level_for(args);
            EnvFilter::new(format!(
                "slipway={level},slipway_core={level},slipway_adapters={level}"
            ))
        }
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // try_init instead of init: integration tests can run several commands
    // in one process, and a second registration must not panic.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
