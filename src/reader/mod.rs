//! Document conversion
//!
//! Turns the lines of one GEDCOM document into a pruned [`Graph`]. Records
//! are handed to the rayon pool as soon as the grouper finds their end, so
//! interpreting one record never delays discovering the next. The document
//! is finished only after every spawned record has completed.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info, warn};

use crate::algorithm::prune::{PruneConfig, PruneReport};
use crate::collections::ConcurrentGraph;
use crate::gedcom::record::{RecordFailure, RecordGrouper};
use crate::interpret::{RecordOutcome, interpret_record};
use crate::models::Graph;

/// Result of converting one document
#[derive(Debug, Default)]
pub struct DocumentReport {
    /// Pruned graph of the document
    pub graph: Graph,
    /// Lines that failed to tokenize; their records were skipped
    pub failures: Vec<RecordFailure>,
    /// Number of records seen
    pub record_count: usize,
    /// Number of records of a type that is not interpreted
    pub skipped_records: usize,
    /// Families removed for dangling references
    pub pruned: PruneReport,
}

impl DocumentReport {
    /// Whether every line of the document tokenized
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert the lines of one document
///
/// # Arguments
/// * `name` - Document name used in log messages
/// * `lines` - Raw lines in document order; a byte-order mark on the first
///   line is ignored
/// * `prune_config` - Settings for removing invalid families
///
/// # Returns
/// The pruned graph together with the failures met along the way
pub fn parse_document<I, S>(name: &str, lines: I, prune_config: &PruneConfig) -> DocumentReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let graph = ConcurrentGraph::new();
    let failures = Mutex::new(Vec::new());
    let skipped = AtomicUsize::new(0);
    let mut record_count = 0;

    rayon::in_place_scope(|scope| {
        for record in RecordGrouper::new(lines) {
            record_count += 1;
            let (graph, failures, skipped) = (&graph, &failures, &skipped);
            scope.spawn(move |_| match interpret_record(record, graph) {
                RecordOutcome::Failed(record_failures) => {
                    for failure in &record_failures {
                        warn!(
                            "{name}:{}: {}; record skipped",
                            failure.line_number, failure.error
                        );
                    }
                    failures
                        .lock()
                        .unwrap_or_else(std::sync::PoisonError::into_inner)
                        .extend(record_failures);
                }
                RecordOutcome::Skipped(tag) => {
                    debug!("{name}: skipping {tag} record");
                    skipped.fetch_add(1, Ordering::Relaxed);
                }
                RecordOutcome::Individual | RecordOutcome::Family(_) => {}
            });
        }
    });

    let pruned = graph.prune(prune_config);
    let counts = graph.counts();
    let graph = graph.into_graph();
    let mut failures = failures
        .into_inner()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    failures.sort_by_key(|failure| failure.line_number);

    info!(
        "Converted {name}: {} individuals, {} families, {} children from {record_count} records in {:?}",
        counts.individuals,
        counts.families,
        counts.children,
        start.elapsed()
    );

    DocumentReport {
        graph,
        failures,
        record_count,
        skipped_records: skipped.into_inner(),
        pruned,
    }
}
