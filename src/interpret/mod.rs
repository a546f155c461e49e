//! Record interpretation
//!
//! Each record is classified once by [`RecordKind`] and folded into typed
//! entities that are appended to the document's [`ConcurrentGraph`].

pub mod family;
pub mod individual;

pub use family::{derive_children, interpret_family};
pub use individual::interpret_individual;

use crate::collections::ConcurrentGraph;
use crate::gedcom::record::{Record, RecordFailure, RecordKind};

/// What happened to one record
#[derive(Debug)]
pub enum RecordOutcome {
    /// An individual was added
    Individual,
    /// A family and this many child relationships were added
    Family(usize),
    /// The record type is not interpreted
    Skipped(String),
    /// Lines of the record failed to tokenize; nothing was added
    Failed(Vec<RecordFailure>),
}

/// Interpret one record into `graph`
///
/// # Arguments
/// * `record` - A complete record
/// * `graph` - The document's shared graph
#[must_use]
pub fn interpret_record(record: Record, graph: &ConcurrentGraph) -> RecordOutcome {
    if !record.is_valid() {
        return RecordOutcome::Failed(record.into_failures());
    }

    match record.kind() {
        RecordKind::Individual => {
            graph.add_individual(interpret_individual(&record));
            RecordOutcome::Individual
        }
        RecordKind::Family => {
            let (family, children) = interpret_family(&record);
            let child_count = children.len();
            graph.add_family_with_children(family, children);
            RecordOutcome::Family(child_count)
        }
        RecordKind::Unrecognized(tag) => RecordOutcome::Skipped(tag),
    }
}
