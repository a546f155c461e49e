//! GEDCOM line tokenizing and record grouping

pub mod line;
pub mod record;

pub use line::Line;
pub use record::{Record, RecordFailure, RecordGrouper, RecordKind};
