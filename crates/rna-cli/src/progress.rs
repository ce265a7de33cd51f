use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{GlobalFlags, OutputFormat};

/// Spinner shown around network calls. Disabled off-tty, in quiet mode, and
/// for JSON output so machine-readable stdout stays clean.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str, flags: &GlobalFlags) -> Self {
        let enabled =
            std::io::stderr().is_terminal() && !flags.quiet && flags.format != OutputFormat::Json;
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
