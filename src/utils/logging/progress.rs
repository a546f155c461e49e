//! Progress reporting for directory conversion, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the document progress bar
pub const DEFAULT_DOCUMENT_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} documents {msg}";

/// Create a progress bar counting converted documents
///
/// # Arguments
/// * `length` - Number of documents to convert
/// * `visible` - Whether to draw the bar; a hidden bar still counts
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_document_progress_bar(length: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    let style = ProgressStyle::with_template(DEFAULT_DOCUMENT_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Finish a progress bar with a completion message
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish
/// * `message` - Optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
