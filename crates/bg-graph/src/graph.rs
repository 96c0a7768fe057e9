//! Core graph data structure.

use std::collections::{BTreeMap, BTreeSet};

use bg_core::CountryId;

use crate::country::Country;

/// A validated, immutable simple undirected graph of countries.
///
/// The graph stores:
/// - The vertex set, keyed by country id (one canonical entry per id).
/// - The edge set as normalized `(min, max)` id pairs, so membership tests
///   are order-independent and parallel edges cannot exist.
/// - Sorted per-vertex adjacency lists for deterministic traversal.
///
/// Built by [`crate::GraphBuilder`]; never mutated afterwards. Analytics and
/// reachability queries are pure reads over this structure.
#[derive(Debug, Clone)]
pub struct BorderGraph {
    pub(crate) vertices: BTreeMap<CountryId, Country>,
    pub(crate) edges: BTreeSet<(CountryId, CountryId)>,
    pub(crate) adjacency: BTreeMap<CountryId, Vec<CountryId>>,
}

impl BorderGraph {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `id` is a vertex of this graph.
    pub fn contains(&self, id: CountryId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Get a vertex by id (returns None if absent).
    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.vertices.get(&id)
    }

    /// Iterate over all vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Country> {
        self.vertices.values()
    }

    /// Iterate over all edges as normalized `(min, max)` id pairs.
    pub fn edges(&self) -> impl Iterator<Item = (CountryId, CountryId)> + '_ {
        self.edges.iter().copied()
    }

    /// Order-independent edge membership test.
    pub fn has_edge(&self, a: CountryId, b: CountryId) -> bool {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.edges.contains(&key)
    }

    /// Neighbors of `id`, sorted by id. Empty for unknown vertices.
    pub fn neighbors(&self, id: CountryId) -> &[CountryId] {
        self.adjacency.get(&id).map_or(&[], Vec::as_slice)
    }

    /// The published country list: the vertex set sorted by short code.
    pub fn sorted_countries(&self) -> Vec<&Country> {
        let mut countries: Vec<&Country> = self.vertices.values().collect();
        countries.sort();
        countries
    }
}
