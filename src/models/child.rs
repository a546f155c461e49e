//! Child relationship model
//!
//! A Child is the fact that an individual is listed as `CHIL` of a family,
//! together with whether that family records a mother and a father.

use serde::{Deserialize, Serialize};

/// A parent-child relationship derived from a family record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Child {
    /// Id of the family the child belongs to
    pub family_id: String,
    /// Id of the child individual
    pub child_id: String,
    /// Whether the family has a mother
    #[serde(rename = "RelationshipToMother")]
    pub has_mother_relationship: bool,
    /// Whether the family has a father
    #[serde(rename = "RelationshipToFather")]
    pub has_father_relationship: bool,
}

impl Child {
    /// Create a child relationship with no parent relationships
    #[must_use]
    pub fn new(family_id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self {
            family_id: family_id.into(),
            child_id: child_id.into(),
            has_mother_relationship: false,
            has_father_relationship: false,
        }
    }
}
