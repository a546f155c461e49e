//! Configuration for GEDCOM conversion.
//!
//! The binary fills a [`ConverterConfig`] from its command line and the
//! `GEDCOM_*` environment variables, see [`crate::cli::Cli`].

use std::path::PathBuf;

use crate::algorithm::prune::PruneConfig;

/// Default directory scanned for `.ged` files
pub const DEFAULT_INPUT_DIR: &str = "io";

/// Default cap on documents converted at the same time
pub const DEFAULT_MAX_OPEN_DOCUMENTS: usize = 1020;

/// Configuration for directory conversion
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory containing `.ged` files
    pub input_dir: PathBuf,
    /// Directory for `.json` output; the input directory when `None`
    pub output_dir: Option<PathBuf>,
    /// Maximum number of documents in flight, bounding open file handles
    pub max_open_documents: usize,
    /// Settings for removing invalid families
    pub prune: PruneConfig,
    /// Pretty-print the JSON output
    pub pretty_json: bool,
    /// Show a progress bar while converting
    pub show_progress: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: None,
            max_open_documents: DEFAULT_MAX_OPEN_DOCUMENTS,
            prune: PruneConfig::default(),
            pretty_json: false,
            show_progress: true,
        }
    }
}

impl ConverterConfig {
    /// Create a configuration for the given input directory
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    /// Directory the `.json` files are written to
    #[must_use]
    pub fn output_dir(&self) -> &PathBuf {
        self.output_dir.as_ref().unwrap_or(&self.input_dir)
    }

    /// Number of documents converted concurrently
    ///
    /// Never zero.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.max_open_documents.max(1)
    }
}
