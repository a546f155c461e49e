//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

pub use console::print_conversion_summary;
pub use self::log::{
    log_document_converted, log_document_failure, log_document_search, log_documents_found,
};
pub use progress::{create_document_progress_bar, finish_progress_bar};
