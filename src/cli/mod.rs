//! Command line interface
//!
//! Every option can also be set through a `GEDCOM_*` environment variable.
//! Boolean options accept `true`/`false`, `yes`/`no`, `on`/`off` or `1`/`0`.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::algorithm::prune::PruneConfig;
use crate::config::{ConverterConfig, DEFAULT_INPUT_DIR, DEFAULT_MAX_OPEN_DOCUMENTS};

#[derive(Debug, Parser)]
#[command(name = "ged-reader")]
#[command(version, about = "Convert GEDCOM files into individual, family and child graphs")]
pub struct Cli {
    /// Directory containing `.ged` files
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory for `.json` output (defaults to the input directory)
    #[arg(long, short = 'o', env = "GEDCOM_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of documents open at the same time
    #[arg(long, env = "GEDCOM_MAX_OPEN_DOCUMENTS", default_value_t = DEFAULT_MAX_OPEN_DOCUMENTS)]
    pub max_open_documents: usize,

    /// Remove families that name no father or no mother
    #[arg(
        long,
        env = "GEDCOM_REQUIRE_BOTH_PARENTS",
        action = ArgAction::Set,
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    pub require_both_parents: bool,

    /// Pretty-print the JSON output
    #[arg(long, env = "GEDCOM_PRETTY_JSON", value_parser = BoolishValueParser::new())]
    pub pretty_json: bool,

    /// Show a progress bar
    #[arg(
        long,
        env = "GEDCOM_PROGRESS",
        action = ArgAction::Set,
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    pub progress: bool,
}

impl From<Cli> for ConverterConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            max_open_documents: cli.max_open_documents,
            prune: PruneConfig {
                require_both_parents: cli.require_both_parents,
            },
            pretty_json: cli.pretty_json,
            show_progress: cli.progress,
        }
    }
}
