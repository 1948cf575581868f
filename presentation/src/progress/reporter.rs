//! Progress reporting for turns

use calorie_application::{Stage, TurnProgressNotifier};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a stage waits on a remote service
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn done_message(stage: Stage, success: bool) -> String {
        let label = stage.as_str().trim_end_matches("...");
        if success {
            format!("{} {}", "v".green(), label)
        } else {
            format!("{} {} failed", "x".red(), label)
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for SpinnerProgress {
    fn on_stage_start(&self, stage: Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(stage.as_str());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(Self::done_message(stage, success));
        }
    }
}

/// Plain-text progress for non-interactive output
pub struct SilentProgress {
    verbose: bool,
}

impl SilentProgress {
    /// Prints nothing at all.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Prints one line per stage, no animation.
    pub fn lines() -> Self {
        Self { verbose: true }
    }
}

impl Default for SilentProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for SilentProgress {
    fn on_stage_start(&self, stage: Stage) {
        if self.verbose {
            eprintln!("{} {}", "->".cyan(), stage.as_str());
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if self.verbose && !success {
            eprintln!("  {} {} failed", "x".red(), stage.as_str().trim_end_matches("..."));
        }
    }
}
