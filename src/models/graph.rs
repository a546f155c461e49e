//! The converted document
//!
//! A Graph holds the three flat collections produced from one GEDCOM
//! document. Collection order is not meaningful.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Child, Family, Individual};

/// Individuals, families and child relationships of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Graph {
    /// All individuals
    pub individuals: Vec<Individual>,
    /// All families that survived pruning
    pub families: Vec<Family>,
    /// All child relationships
    pub children: Vec<Child>,
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index individuals by id
    ///
    /// If two individuals share an id the later one wins.
    #[must_use]
    pub fn individuals_by_id(&self) -> FxHashMap<&str, &Individual> {
        self.individuals
            .iter()
            .map(|individual| (individual.id.as_str(), individual))
            .collect()
    }

    /// Remove the family at `index` by swapping in the last family
    ///
    /// Runs in constant time and does not preserve order: the family that was
    /// last now sits at `index`. Returns `None` if `index` is out of bounds.
    pub fn remove_family_at(&mut self, index: usize) -> Option<Family> {
        (index < self.families.len()).then(|| self.families.swap_remove(index))
    }

    /// Whether the graph holds no entities at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty() && self.children.is_empty()
    }
}
