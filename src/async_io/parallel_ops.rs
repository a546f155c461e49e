//! Async parallel conversion of GEDCOM files
//! Converts every document of a directory with a bounded number in flight

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use itertools::{Either, Itertools};

use super::file_ops::{find_gedcom_files_async, read_document_lines_async, write_graph_async};
use crate::collections::GraphCounts;
use crate::config::ConverterConfig;
use crate::error::{GedcomError, Result};
use crate::reader::parse_document;
use crate::utils::{
    create_document_progress_bar, finish_progress_bar, json_file_name, log_document_converted,
    log_document_failure,
};

/// Outcome of one converted document
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Source document
    pub input: PathBuf,
    /// Written JSON file
    pub output: PathBuf,
    /// Entity counts after pruning
    pub counts: GraphCounts,
    /// Lines that failed to tokenize
    pub failed_lines: usize,
    /// Families removed for dangling references
    pub pruned_families: usize,
}

/// Outcome of converting a directory
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// Documents converted and written
    pub converted: Vec<DocumentSummary>,
    /// Documents that could not be read or written
    pub failed: Vec<(PathBuf, GedcomError)>,
    /// Entity counts summed over all converted documents
    pub totals: GraphCounts,
    /// Wall-clock time of the whole conversion
    pub elapsed: Duration,
}

/// Convert one GEDCOM file and write `<stem>.json` to the output directory
///
/// # Arguments
/// * `path` - The `.ged` file
/// * `config` - Conversion settings
///
/// # Errors
/// Returns an error if the file cannot be read, the conversion task fails,
/// or the JSON cannot be written. Malformed lines are not errors here; they
/// are counted in the summary.
pub async fn convert_file_async(path: &Path, config: Arc<ConverterConfig>) -> Result<DocumentSummary> {
    let lines = read_document_lines_async(path).await?;

    let name = path.display().to_string();
    let prune = config.prune;
    let report = tokio::task::spawn_blocking(move || parse_document(&name, lines, &prune))
        .await
        .map_err(|e| GedcomError::Task(format!("conversion of {} failed: {e}", path.display())))?;

    let output = config.output_dir().join(json_file_name(path));
    write_graph_async(&output, &report.graph, config.pretty_json).await?;
    log_document_converted(&output, report.record_count, report.failures.len());

    Ok(DocumentSummary {
        input: path.to_path_buf(),
        output,
        counts: GraphCounts::from(&report.graph),
        failed_lines: report.failures.len(),
        pruned_families: report.pruned.removed_count(),
    })
}

/// Convert every GEDCOM file in the configured input directory
///
/// At most `config.max_open_documents` documents are converted at once. A
/// document that fails is logged and reported without stopping the others.
///
/// # Errors
/// Returns an error only if the input directory cannot be listed or the
/// output directory cannot be created
pub async fn convert_directory_async(config: ConverterConfig) -> Result<ConversionSummary> {
    let start = Instant::now();
    let files = find_gedcom_files_async(&config.input_dir).await?;

    let output_dir = config.output_dir().clone();
    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(|e| GedcomError::io(&output_dir, e))?;

    let pb = create_document_progress_bar(files.len() as u64, config.show_progress);
    let concurrency = config.concurrency();
    let config = Arc::new(config);

    let results = stream::iter(files)
        .map(|path| {
            let config = Arc::clone(&config);
            let pb = pb.clone();
            async move {
                let result = convert_file_async(&path, config).await;
                pb.inc(1);
                (path, result)
            }
        })
        .buffer_unordered(concurrency)
        .collect::<Vec<_>>()
        .await;

    finish_progress_bar(&pb, Some("done"));

    let (converted, failed): (Vec<_>, Vec<_>) =
        results.into_iter().partition_map(|(path, result)| match result {
            Ok(summary) => Either::Left(summary),
            Err(e) => {
                log_document_failure(&path, &e);
                Either::Right((path, e))
            }
        });

    let totals = converted
        .iter()
        .fold(GraphCounts::default(), |acc, document| GraphCounts {
            individuals: acc.individuals + document.counts.individuals,
            families: acc.families + document.counts.families,
            children: acc.children + document.counts.children,
        });

    log::info!(
        "Converted {} documents ({} failed) in {:?}",
        converted.len(),
        failed.len(),
        start.elapsed()
    );

    Ok(ConversionSummary {
        converted,
        failed,
        totals,
        elapsed: start.elapsed(),
    })
}
