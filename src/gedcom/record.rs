//! Record grouping
//!
//! A record is the maximal run of lines starting at a level-0 line. Records
//! are only discoverable by scanning forward to the next level-0 line, so
//! [`RecordGrouper`] yields each record as soon as the following one starts.

use crate::error::{GedcomError, Result};
use crate::gedcom::line::Line;

/// Individual record tag
pub const INDIVIDUAL_TAG: &str = "INDI";
/// Family record tag
pub const FAMILY_TAG: &str = "FAM";

/// A line that failed to tokenize, with its 1-based position in the document
#[derive(Debug)]
pub struct RecordFailure {
    /// 1-based line number in the source document
    pub line_number: usize,
    /// Tokenizer error
    pub error: GedcomError,
}

/// The kind of entity a record describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// `INDI` record
    Individual,
    /// `FAM` record
    Family,
    /// Any other record type, e.g. `HEAD`, `SOUR` or `TRLR`
    Unrecognized(String),
}

impl RecordKind {
    /// Classify a record by the tag of its first line
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            INDIVIDUAL_TAG => Self::Individual,
            FAMILY_TAG => Self::Family,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// A contiguous run of lines opened by a level-0 line
#[derive(Debug, Default)]
pub struct Record {
    start_line: usize,
    lines: Vec<Line>,
    failures: Vec<RecordFailure>,
}

impl Record {
    /// Create a record from already tokenized lines
    #[must_use]
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self {
            start_line: 1,
            lines,
            failures: Vec::new(),
        }
    }

    /// Lines of the record in document order
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// 1-based document line number of the record's first line
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// Lines of this record that failed to tokenize
    #[must_use]
    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }

    /// Whether the record can be interpreted
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && !self.lines.is_empty()
    }

    /// Cross-reference id of the record's first line
    #[must_use]
    pub fn xref_id(&self) -> Option<&str> {
        self.lines.first().and_then(Line::xref_id)
    }

    /// Classify the record by its first line's tag
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.lines
            .first()
            .map_or_else(|| RecordKind::Unrecognized(String::new()), |line| {
                RecordKind::from_tag(line.tag())
            })
    }

    /// Take the tokenizer failures out of the record
    pub fn into_failures(self) -> Vec<RecordFailure> {
        self.failures
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.failures.is_empty()
    }

    /// Prepare to add the entry at `line_number`
    ///
    /// If the entry opens a record and this one already holds entries, the
    /// finished record is taken out and returned.
    fn begin_entry(&mut self, line_number: usize, opens_record: bool) -> Option<Self> {
        let finished = (opens_record && !self.is_empty()).then(|| std::mem::take(self));
        if self.is_empty() {
            self.start_line = line_number;
        }
        finished
    }
}

/// Lazily partitions a document's lines into records
///
/// A line that fails to tokenize marks the record it belongs to as failed
/// without affecting its neighbours. A failed line with level 0, or with an
/// unreadable level, opens a new failed record that also takes the lines
/// following it up to the next level-0 line. Other failed lines are attached
/// to the record being accumulated. Blank lines are skipped.
pub struct RecordGrouper<I> {
    lines: I,
    line_number: usize,
    current: Record,
}

impl<I, S> RecordGrouper<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Group raw document lines into records
    ///
    /// # Arguments
    /// * `lines` - Raw text lines of one document, in order
    pub fn new(lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            lines: lines.into_iter(),
            line_number: 0,
            current: Record::default(),
        }
    }
}

fn tokenize(raw: &str, line_number: usize) -> Result<Line> {
    if line_number == 1 {
        Line::parse_first(raw)
    } else {
        Line::parse(raw)
    }
}

impl<I, S> Iterator for RecordGrouper<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for raw in self.lines.by_ref() {
            self.line_number += 1;
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }

            let finished = match tokenize(raw, self.line_number) {
                Ok(line) => {
                    let finished = self
                        .current
                        .begin_entry(self.line_number, line.is_record_start());
                    self.current.lines.push(line);
                    finished
                }
                Err(error) => {
                    let finished = self
                        .current
                        .begin_entry(self.line_number, error.starts_record());
                    self.current.failures.push(RecordFailure {
                        line_number: self.line_number,
                        error,
                    });
                    finished
                }
            };
            if finished.is_some() {
                return finished;
            }
        }

        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}
