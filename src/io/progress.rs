//! Progress display for growth runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GROWTH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single growth bar tracking placed tiles against the target
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the target tile count
    pub fn new(target_tiles: usize) -> Self {
        let bar = ProgressBar::new(target_tiles as u64);
        bar.set_style(GROWTH_STYLE.clone());
        Self { bar }
    }

    /// Report placed tiles and the open road count
    pub fn update(&self, placed: usize, open_roads: usize) {
        self.bar.set_position(placed as u64);
        self.bar.set_message(format!("{open_roads} open roads"));
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("city grown");
    }
}
