//! Progress bar styling and configuration options.
//!
//! Two kinds of bars are drawn:
//!
//! - the **batch** bar, counting finished zone files during a bulk download,
//! - one **transfer** bar per file, showing a percentage when the server sent
//!   a `Content-Length` and a running byte count otherwise.
//!
//! # Examples
//!
//! ```rust
//! use czds::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep finished transfer bars on screen.
//! let mut transfer = ProgressBarOpts::default();
//! transfer.set_clear(false);
//! let style = StyleOptions::new(ProgressBarOpts::default(), transfer);
//! assert!(style.is_enabled());
//!
//! let hidden = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Define the progress style options.
///
/// By default the batch bar stays on the screen upon completion, the transfer
/// bars are cleared once their file is written.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the batch progress bar.
    pub(crate) batch: ProgressBarOpts,
    /// Style options for the transfer progress bar(s).
    pub(crate) transfer: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            batch: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            transfer: ProgressBarOpts::default(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(batch: ProgressBarOpts, transfer: ProgressBarOpts) -> Self {
        Self { batch, transfer }
    }

    /// Style options that draw nothing.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the batch nor the transfer bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.batch.enabled || self.transfer.enabled
    }

    /// Get a reference to the batch progress bar options.
    pub fn batch(&self) -> &ProgressBarOpts {
        &self.batch
    }

    /// Get a reference to the transfer progress bar options.
    pub fn transfer(&self) -> &ProgressBarOpts {
        &self.transfer
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Template used when the total length is known.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_PERCENT.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Template for a transfer whose size is known.
    ///
    /// `com.zone ━━━━━━━━━━━━━━━━━━━━╾───────────────────  52% 1.02 GiB/1.96 GiB 12.31 MiB/s`
    pub const TEMPLATE_PERCENT: &'static str =
        "{msg} {bar:40.green/black} {percent:>3}% {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red}";
    /// Template for a transfer whose size is unknown.
    ///
    /// `⠙ com.zone 211.23 MiB 12.31 MiB/s`
    pub const TEMPLATE_BYTES: &'static str =
        "{spinner:.green} {msg} {bytes:>11.green} {bytes_per_sec:>13.red}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = match self.template {
            Some(ref template) => ProgressStyle::with_template(template).unwrap_or_else(|e| {
                warn!(template = %template, error = %e, "Invalid progress template");
                ProgressStyle::default_bar()
            }),
            None => ProgressStyle::default_bar(),
        };
        if let Some(ref progress_chars) = self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] for a known or unknown total.
    ///
    /// With a known total the configured template is used; without one the
    /// bar becomes a spinner counting bytes.
    pub fn to_progress_bar(&self, len: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        match len {
            Some(len) => ProgressBar::new(len).with_style(self.to_progress_style()),
            None => {
                let style = ProgressStyle::with_template(Self::TEMPLATE_BYTES)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner());
                ProgressBar::new_spinner().with_style(style)
            }
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Whether the bar is cleared upon completion.
    pub fn clear(&self) -> bool {
        self.clear
    }

    /// Whether the bar is drawn at all.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_opts_produce_hidden_bar() {
        let bar = ProgressBarOpts::hidden().to_progress_bar(Some(100));
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_known_length_sets_total() {
        let bar = ProgressBarOpts::default().to_progress_bar(Some(4096));
        assert_eq!(bar.length(), Some(4096));
    }

    #[test]
    fn test_unknown_length_has_no_total() {
        let bar = ProgressBarOpts::default().to_progress_bar(None);
        assert_eq!(bar.length(), None);
    }

    #[test]
    fn test_default_style_options() {
        let style = StyleOptions::default();
        assert!(style.is_enabled());
        assert!(!style.batch().clear());
        assert!(style.transfer().clear());
    }
}
