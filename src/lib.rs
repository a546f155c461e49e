//! A Rust library for converting GEDCOM genealogy documents into graphs of
//! individuals, families and parent-child relationships.
//!
//! Each document is tokenized line by line, grouped into records, and every
//! record is interpreted concurrently into a shared graph. Families that
//! refer to unknown individuals are pruned before the graph is returned.

pub mod algorithm;
pub mod async_io;
pub mod cli;
pub mod collections;
pub mod config;
pub mod error;
pub mod gedcom;
pub mod interpret;
pub mod models;
pub mod reader;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::prune::{PruneConfig, PruneReport, prune_invalid_families};
pub use collections::{ConcurrentGraph, GraphCounts};
pub use config::ConverterConfig;
pub use error::{GedcomError, Result};
pub use gedcom::{Line, Record, RecordFailure, RecordGrouper, RecordKind};
pub use models::{Child, Family, Gender, Graph, Individual, Name};
pub use reader::{DocumentReport, parse_document};

// Async functionality
pub use async_io::{
    ConversionSummary, DocumentSummary, convert_directory_async, convert_file_async,
    find_gedcom_files_async,
};
