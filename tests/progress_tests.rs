//! Tests for the progress module functionality.
//!
//! Bars are created against hidden or non-terminal targets, so these tests
//! only look at lengths, positions and configuration.

use czds::progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};

fn keep_on_screen() -> ProgressBarOpts {
    let mut opts = ProgressBarOpts::default();
    opts.set_clear(false);
    opts
}

#[test]
fn test_style_options_new() {
    let style = StyleOptions::new(ProgressBarOpts::hidden(), keep_on_screen());
    assert!(style.is_enabled());
    assert!(!style.batch().enabled());
    assert!(style.transfer().enabled());
    assert!(!style.transfer().clear());
}

#[test]
fn test_style_options_hidden() {
    let style = StyleOptions::hidden();
    assert!(!style.is_enabled());
    assert!(!style.batch().enabled());
    assert!(!style.transfer().enabled());
}

#[test]
fn test_progress_bar_opts_set_clear() {
    let mut opts = ProgressBarOpts::default();
    assert!(opts.clear());
    opts.set_clear(false);
    assert!(!opts.clear());
}

#[test]
fn test_custom_template_keeps_length() {
    let opts = ProgressBarOpts::new(
        Some("{msg} {bytes}/{total_bytes}".into()),
        Some("=> ".into()),
        true,
        true,
    );
    let pb = opts.to_progress_bar(Some(2048));
    assert_eq!(pb.length(), Some(2048));
}

#[test]
fn test_hidden_opts_ignore_length() {
    let pb = ProgressBarOpts::hidden().to_progress_bar(None);
    assert!(pb.is_hidden());
}

#[test]
fn test_display_batch_counts_files() {
    let display = ProgressDisplay::new(StyleOptions::default());

    let batch = display.batch(3);
    assert_eq!(batch.length(), Some(3));
    batch.inc(1);
    batch.inc(1);
    assert_eq!(batch.position(), 2);

    display.finish_batch(batch);
}

#[test]
fn test_display_transfer_known_length() {
    let display = ProgressDisplay::new(StyleOptions::default());

    let pb = display.transfer("com.zone", Some(1000));
    assert_eq!(pb.length(), Some(1000));
    assert_eq!(pb.message(), "com.zone");
    pb.inc(400);
    assert_eq!(pb.position(), 400);

    display.finish_transfer(pb);
}

#[test]
fn test_display_transfer_unknown_length() {
    let display = ProgressDisplay::new(StyleOptions::default());

    let pb = display.transfer("net.zone", None);
    assert_eq!(pb.length(), None);
    pb.inc(4096);
    assert_eq!(pb.position(), 4096);

    display.finish_transfer(pb);
}

#[test]
fn test_display_hidden_draws_nothing() {
    let display = ProgressDisplay::new(StyleOptions::hidden());
    assert!(!display.style_options().is_enabled());

    let pb = display.transfer("org.zone", Some(10));
    assert!(pb.is_hidden());
    display.finish_transfer(pb);
}

#[test]
fn test_display_clones_share_configuration() {
    let display = ProgressDisplay::new(StyleOptions::new(keep_on_screen(), keep_on_screen()));
    let clone = display.clone();

    assert!(!clone.style_options().batch().clear());
    assert!(!clone.style_options().transfer().clear());
}
