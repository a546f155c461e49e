//! Console output utilities

use crate::async_io::ConversionSummary;

/// Print the outcome of a directory conversion
pub fn print_conversion_summary(summary: &ConversionSummary) {
    println!(
        "converted {} documents ({} failed): {} individuals, {} families, {} children",
        summary.converted.len(),
        summary.failed.len(),
        summary.totals.individuals,
        summary.totals.families,
        summary.totals.children
    );
    println!("total time taken: {:.6} second.", summary.elapsed.as_secs_f64());
}
