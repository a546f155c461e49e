//! Domain models for converted GEDCOM documents
//!
//! Entities are flat records keyed by their GEDCOM cross-reference id.
//! Families and children refer to individuals by id only.

pub mod child;
pub mod family;
pub mod graph;
pub mod individual;

pub use child::Child;
pub use family::Family;
pub use graph::Graph;
pub use individual::{Gender, Individual, Name};
