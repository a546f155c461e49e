//! Referential pruning
//!
//! After every record of a document has been interpreted, families that
//! refer to an individual missing from the document are removed. The pass
//! first decides which families to remove without touching the collection,
//! then removes them from the highest position down so that the
//! swap-with-last removal never moves a family that is still to be checked.

use std::fmt;

use itertools::Itertools;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::models::{Family, Graph};

/// Settings for the pruning pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneConfig {
    /// Treat a family without a father or mother id as invalid
    pub require_both_parents: bool,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            require_both_parents: true,
        }
    }
}

/// Why a family failed the referential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// The family names no mother
    MissingMother,
    /// The family names no father
    MissingFather,
    /// The mother id matches no individual
    Mother(String),
    /// The father id matches no individual
    Father(String),
    /// A child id matches no individual
    Child(String),
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMother => write!(f, "no mother"),
            Self::MissingFather => write!(f, "no father"),
            Self::Mother(id) => write!(f, "unknown mother {id}"),
            Self::Father(id) => write!(f, "unknown father {id}"),
            Self::Child(id) => write!(f, "unknown child {id}"),
        }
    }
}

/// Outcome of a pruning pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Ids of the removed families
    pub removed_family_ids: Vec<String>,
}

impl PruneReport {
    /// Number of removed families
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed_family_ids.len()
    }
}

/// Find the first reference of `family` that does not resolve
///
/// # Arguments
/// * `family` - The family to check
/// * `known_ids` - Ids of all individuals in the document
/// * `config` - Pruning settings
#[must_use]
pub fn find_dangling_reference(
    family: &Family,
    known_ids: &FxHashSet<&str>,
    config: &PruneConfig,
) -> Option<DanglingReference> {
    match family.mother_id.as_deref() {
        Some(id) if !known_ids.contains(id) => {
            return Some(DanglingReference::Mother(id.to_string()));
        }
        None if config.require_both_parents => return Some(DanglingReference::MissingMother),
        _ => {}
    }

    match family.father_id.as_deref() {
        Some(id) if !known_ids.contains(id) => {
            return Some(DanglingReference::Father(id.to_string()));
        }
        None if config.require_both_parents => return Some(DanglingReference::MissingFather),
        _ => {}
    }

    family
        .child_ids
        .iter()
        .find(|id| !known_ids.contains(id.as_str()))
        .map(|id| DanglingReference::Child(id.clone()))
}

/// Remove every family that refers to an individual absent from the graph
///
/// Individuals and child relationships are left untouched.
///
/// # Arguments
/// * `graph` - The completed graph of one document
/// * `config` - Pruning settings
///
/// # Returns
/// A report naming the removed families
pub fn prune_invalid_families(graph: &mut Graph, config: &PruneConfig) -> PruneReport {
    let invalid_positions = {
        let known_ids: FxHashSet<&str> = graph.individuals_by_id().into_keys().collect();
        graph
            .families
            .iter()
            .positions(|family| match find_dangling_reference(family, &known_ids, config) {
                Some(reason) => {
                    debug!("Removing family {}: {reason}", family.id);
                    true
                }
                None => false,
            })
            .collect_vec()
    };

    let mut report = PruneReport::default();
    for index in invalid_positions.into_iter().rev() {
        if let Some(family) = graph.remove_family_at(index) {
            report.removed_family_ids.push(family.id);
        }
    }

    if report.removed_count() > 0 {
        info!(
            "Removed {} of {} families with dangling references",
            report.removed_count(),
            graph.families.len() + report.removed_count()
        );
    }

    report
}
