//! Utility functions for working with GEDCOM files

pub mod logging;

use std::path::Path;

use crate::error::{GedcomError, Result};

pub use logging::{
    create_document_progress_bar, finish_progress_bar, log_document_converted,
    log_document_failure, log_document_search, log_documents_found, print_conversion_summary,
};

/// Extension of GEDCOM files
pub const GEDCOM_EXTENSION: &str = "ged";

/// Validates that a directory exists and is a directory
///
/// # Arguments
/// * `dir` - The directory path to check
///
/// # Returns
/// `Ok(())` if the directory exists, otherwise an error
///
/// # Errors
/// Returns an error if the directory does not exist or is not a directory
pub fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(GedcomError::InvalidDirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Output file name for a GEDCOM document: its name up to the first `.`, plus `.json`
///
/// # Arguments
/// * `path` - Path of the GEDCOM document
#[must_use]
pub fn json_file_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    format!("{stem}.json")
}
