//! Progress display for seed sweeps

use crate::io::configuration::{MIN_SWEEP_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Seeds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the seeds of one sweep
///
/// Short sweeps and quiet runs get a hidden bar, so callers can report
/// unconditionally.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar for `total` seeds starting at `start_seed`
    pub fn new(total: usize, start_seed: u32, quiet: bool) -> Self {
        let bar = ProgressBar::new(total as u64);
        if quiet || total < MIN_SWEEP_FOR_PROGRESS {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            bar.set_style(SWEEP_STYLE.clone());
            bar.set_message(format!("from seed {start_seed}"));
        }
        Self { bar }
    }

    /// Whether the bar is drawn at all
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Record the number of seeds composed so far
    pub fn update(&self, completed: usize) {
        self.bar.set_position(completed as u64);
    }

    /// Clear the bar once the sweep ends
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
