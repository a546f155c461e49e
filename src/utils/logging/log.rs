//! Log messages for document discovery and conversion

use std::path::Path;

use crate::error::GedcomError;

/// Log the start of a directory scan
pub fn log_document_search(dir: &Path) {
    log::info!("Looking for GEDCOM documents in {}", dir.display());
}

/// Log how many documents a directory scan found
///
/// # Arguments
/// * `dir` - The scanned directory
/// * `documents` - Number of `.ged` files found; zero is logged as a warning
pub fn log_documents_found(dir: &Path, documents: usize) {
    if documents == 0 {
        log::warn!("No GEDCOM documents in {}", dir.display());
    } else {
        log::info!("Found {documents} GEDCOM documents in {}", dir.display());
    }
}

/// Log a converted document with its record and failure counts
pub fn log_document_converted(path: &Path, records: usize, failed_lines: usize) {
    if failed_lines == 0 {
        log::debug!("Wrote {} ({records} records)", path.display());
    } else {
        log::warn!(
            "Wrote {} ({records} records, {failed_lines} lines failed to tokenize)",
            path.display()
        );
    }
}

/// Log a document that could not be converted
pub fn log_document_failure(path: &Path, error: &GedcomError) {
    log::error!("Failed to convert {}: {error}", path.display());
}
