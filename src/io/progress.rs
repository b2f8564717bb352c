//! Progress display for batch renders

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks renders of one batch on a single progress bar
///
/// Skips and completions are printed above the bar so they stay visible after it clears.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            skipped: 0,
        }
    }

    /// Create the bar for a batch of `render_count` renders
    pub fn initialize(&mut self, render_count: usize) {
        let bar = ProgressBar::new(render_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
        self.skipped = 0;
    }

    /// Show which seed is being rendered and at what size
    pub fn start_render(&self, seed: &str, dimensions: (u32, u32)) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{seed} ({}x{})", dimensions.0, dimensions.1));
        }
    }

    /// Record a render skipped because its output already exists
    pub fn skip_render(&mut self, path: &Path) {
        self.skipped += 1;
        if let Some(ref bar) = self.bar {
            bar.println(format!("Skipping: {} (output exists)", path.display()));
            bar.inc(1);
        }
    }

    /// Record a finished render
    pub fn complete_render(&mut self, path: &Path, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.println(format!(
                "✓ {} in {:.2}s",
                path.display(),
                elapsed.as_secs_f64()
            ));
            bar.inc(1);
        }
    }

    /// Number of renders completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of renders skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
