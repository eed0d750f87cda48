//! User-facing console output.
//!
//! All stdout writing goes through [`OutputManager`] so quiet mode and
//! colour handling are decided in one place. Tracing output is separate and
//! goes to stderr (see `logging`).

use std::io;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Severity badge prepended to a message line.
enum Badge {
    Success,
    Warning,
    Info,
}

impl Badge {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Plain line; dropped entirely in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.badged(Badge::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.badged(Badge::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.badged(Badge::Info, msg)
    }

    /// Section header, bold cyan when colour is on.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Progress bar across the pipeline steps. Hidden in quiet mode.
    pub fn step_progress(&self, total: usize) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("  [{pos}/{len}] {msg}")
                .expect("static progress template is valid"),
        );
        bar
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn badged(&self, badge: Badge, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{} {msg}", badge.symbol())
        } else {
            let style = badge.style();
            format!(
                "{} {}",
                badge.symbol().style(style.bold()),
                msg.style(style)
            )
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
