//! Family unit representation
//!
//! A Family is one `FAM` record. Parents and children are referenced by
//! individual id and resolved by lookup, never by pointer.

use serde::{Deserialize, Serialize};

/// A union of a father and/or mother with their children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Family {
    /// Cross-reference id, e.g. `@F1@`
    pub id: String,
    /// Id of the `HUSB` individual
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub father_id: Option<String>,
    /// Id of the `WIFE` individual
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mother_id: Option<String>,
    /// Ids of the `CHIL` individuals in record order
    pub child_ids: Vec<String>,
}

impl Family {
    /// Create a family with no members
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the father id, replacing an earlier one
    pub fn set_father(&mut self, father_id: impl Into<String>) {
        self.father_id = Some(father_id.into());
    }

    /// Set the mother id, replacing an earlier one
    pub fn set_mother(&mut self, mother_id: impl Into<String>) {
        self.mother_id = Some(mother_id.into());
    }

    /// Add a child id
    pub fn add_child(&mut self, child_id: impl Into<String>) {
        self.child_ids.push(child_id.into());
    }

    /// Whether a non-empty father id is known
    #[must_use]
    pub fn has_father(&self) -> bool {
        self.father_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Whether a non-empty mother id is known
    #[must_use]
    pub fn has_mother(&self) -> bool {
        self.mother_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
