//! Async GEDCOM directory conversion
//! Reads documents, converts them on the rayon pool and writes JSON output

pub mod file_ops;
pub mod parallel_ops;

pub use file_ops::*;
pub use parallel_ops::*;
