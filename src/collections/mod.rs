//! Concurrency-safe graph aggregation
//!
//! Record interpreters run in parallel and all append into one
//! [`ConcurrentGraph`] per document. A single lock guards the three
//! collections together so that every append, removal and index build sees
//! a consistent graph.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::algorithm::prune::{PruneConfig, PruneReport, prune_invalid_families};
use crate::models::{Child, Family, Graph, Individual};

/// Entity counts of a graph at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphCounts {
    /// Number of individuals
    pub individuals: usize,
    /// Number of families
    pub families: usize,
    /// Number of child relationships
    pub children: usize,
}

impl From<&Graph> for GraphCounts {
    fn from(graph: &Graph) -> Self {
        Self {
            individuals: graph.individuals.len(),
            families: graph.families.len(),
            children: graph.children.len(),
        }
    }
}

/// A graph that many interpreters may append to at once
#[derive(Debug, Default)]
pub struct ConcurrentGraph {
    inner: Mutex<Graph>,
}

impl ConcurrentGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic in one interpreter must not hide the entities the others added.
    fn lock(&self) -> MutexGuard<'_, Graph> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an individual
    pub fn add_individual(&self, individual: Individual) {
        self.lock().individuals.push(individual);
    }

    /// Append a family together with its child relationships under one lock
    pub fn add_family_with_children(&self, family: Family, children: Vec<Child>) {
        let mut graph = self.lock();
        graph.families.push(family);
        graph.children.extend(children);
    }

    /// Snapshot of all individuals keyed by id
    #[must_use]
    pub fn individuals_by_id(&self) -> FxHashMap<String, Individual> {
        self.lock()
            .individuals_by_id()
            .into_iter()
            .map(|(id, individual)| (id.to_string(), individual.clone()))
            .collect()
    }

    /// Remove the family at `index` by swapping in the last family
    ///
    /// Positions of other families change, so callers must not keep using
    /// indices obtained before the removal.
    pub fn remove_family_at(&self, index: usize) -> Option<Family> {
        self.lock().remove_family_at(index)
    }

    /// Remove families that refer to unknown individuals
    pub fn prune(&self, config: &PruneConfig) -> PruneReport {
        prune_invalid_families(&mut self.lock(), config)
    }

    /// Current entity counts
    #[must_use]
    pub fn counts(&self) -> GraphCounts {
        GraphCounts::from(&*self.lock())
    }

    /// Take the finished graph
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
