//! Async operations for working with GEDCOM files
//! Provides functions for finding, reading and writing documents asynchronously

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{GedcomError, Result};
use crate::models::Graph;
use crate::utils::{GEDCOM_EXTENSION, log_document_search, log_documents_found, validate_directory};

/// Find all GEDCOM files in a directory asynchronously
///
/// # Arguments
/// * `dir` - Path to the directory to search
///
/// # Returns
/// Paths of the `.ged` files, sorted
///
/// # Errors
/// Returns an error if the directory is missing or cannot be read
pub async fn find_gedcom_files_async(dir: &Path) -> Result<Vec<PathBuf>> {
    log_document_search(dir);

    validate_directory(dir)?;

    let mut gedcom_files = Vec::<PathBuf>::new();

    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| GedcomError::io(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| GedcomError::io(dir, e))?
    {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| GedcomError::io(&path, e))?;

        if metadata.is_file() && path.extension().is_some_and(|ext| ext == GEDCOM_EXTENSION) {
            gedcom_files.push(path);
        }
    }

    log_documents_found(dir, gedcom_files.len());

    gedcom_files.sort();
    Ok(gedcom_files)
}

/// Read a document's lines asynchronously
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8
pub async fn read_document_lines_async(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| GedcomError::io(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Serialize a graph to JSON and write it asynchronously
///
/// # Arguments
/// * `path` - Output file
/// * `graph` - The converted document
/// * `pretty` - Pretty-print the JSON
///
/// # Errors
/// Returns an error if serialization or writing fails
pub async fn write_graph_async(path: &Path, graph: &Graph, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_vec_pretty(graph)?
    } else {
        serde_json::to_vec(graph)?
    };
    fs::write(path, json)
        .await
        .map_err(|e| GedcomError::io(path, e))
}
