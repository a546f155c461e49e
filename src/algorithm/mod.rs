//! Algorithm implementations for post-processing converted documents
//!
//! This module contains the passes that run once a document's graph is
//! complete.

pub mod prune;
