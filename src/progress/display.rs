//! Progress bar display management.
//!
//! [`ProgressDisplay`] owns the [`MultiProgress`] every bar is drawn into, so
//! concurrent transfers of a bulk download stack neatly under the batch bar.
//! It is cheap to clone and shared by the engine and the catalog.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Progress display manager that coordinates the batch and transfer bars.
#[derive(Clone)]
pub struct ProgressDisplay {
    multi: Arc<MultiProgress>,
    style_options: StyleOptions,
}

impl std::fmt::Debug for ProgressDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressDisplay")
            .field("style_options", &self.style_options)
            .finish()
    }
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    pub fn new(style_options: StyleOptions) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        Self {
            multi,
            style_options,
        }
    }

    /// Style options used for new bars.
    pub fn style_options(&self) -> &StyleOptions {
        &self.style_options
    }

    /// Create the bar counting finished files of a bulk download.
    pub fn batch(&self, total: usize) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.batch().to_progress_bar(Some(total as u64)));
        pb.tick();
        pb
    }

    /// Create the bar of a single file transfer.
    ///
    /// `len` is the announced body length, if any.
    pub fn transfer(&self, name: &str, len: Option<u64>) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.transfer().to_progress_bar(len));
        pb.set_message(name.to_string());
        pb
    }

    /// Finish the batch bar, clearing or keeping it based on configuration.
    pub fn finish_batch(&self, pb: ProgressBar) {
        finish(pb, self.style_options.batch().clear());
    }

    /// Finish a transfer bar, clearing or keeping it based on configuration.
    pub fn finish_transfer(&self, pb: ProgressBar) {
        finish(pb, self.style_options.transfer().clear());
    }
}

fn finish(pb: ProgressBar, clear: bool) {
    if clear {
        pb.finish_and_clear();
    } else {
        pb.finish();
    }
}
