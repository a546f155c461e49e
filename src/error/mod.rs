//! Error handling for the GEDCOM reader.

use std::path::PathBuf;

/// Specialized error type for GEDCOM conversion
#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    /// The first token of a line is not a decimal level that fits a `u32`
    #[error("Malformed level in line {line:?}")]
    MalformedLevel {
        /// The offending line
        line: String,
    },

    /// A line has no extractable tag token
    #[error("Missing tag in level {level} line {line:?}")]
    MissingTag {
        /// The offending line
        line: String,
        /// The level, which did parse
        level: u32,
    },

    /// Error opening, reading or writing a file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        /// File or directory the operation touched
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing a graph
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input directory is missing or not a directory
    #[error("Directory does not exist: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// A background conversion task failed to complete
    #[error("Task error: {0}")]
    Task(String),
}

impl GedcomError {
    /// Wrap an IO error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a line that failed with this error opens a new record
    ///
    /// A line whose level is unreadable cannot be placed under the current
    /// record, so it is treated as the start of its own failed record.
    #[must_use]
    pub const fn starts_record(&self) -> bool {
        matches!(
            self,
            Self::MalformedLevel { .. } | Self::MissingTag { level: 0, .. }
        )
    }
}

/// Result type for GEDCOM operations
pub type Result<T> = std::result::Result<T, GedcomError>;
