//! Progress display for long-running estimator phases

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the progress bar of the phase currently running
///
/// Only one phase is shown at a time; starting a new phase finishes the
/// previous one.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    phase_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            phase_bar: None,
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            phase_bar: None,
        }
    }

    /// Begin a phase of `steps` units of work
    pub fn start_phase(&mut self, name: &str, steps: usize) {
        self.finish_phase();

        let bar = ProgressBar::new(steps as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.phase_bar = Some(self.multi_progress.add(bar));
    }

    /// Report the number of completed steps
    ///
    /// The bar is only redrawn every few hundred steps and on the last step.
    pub fn update(&self, completed: usize) {
        if let Some(ref bar) = self.phase_bar {
            let is_last = bar.length().is_some_and(|len| completed as u64 >= len);
            if is_last || completed % PROGRESS_REFRESH_INTERVAL == 0 {
                bar.set_position(completed as u64);
            }
        }
    }

    /// Position of the current phase, if one is running
    pub fn position(&self) -> Option<u64> {
        self.phase_bar.as_ref().map(ProgressBar::position)
    }

    /// Close the current phase and clear it from the terminal
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.phase_bar.take() {
            bar.finish_and_clear();
            self.multi_progress.remove(&bar);
        }
    }
}
