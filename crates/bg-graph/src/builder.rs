//! Graph builder.

use std::collections::{BTreeMap, BTreeSet};

use bg_core::{CoreResult, CountryId};

use crate::country::Country;
use crate::error::GraphError;
use crate::graph::BorderGraph;
use crate::validate;

/// Builder for constructing a simple undirected border graph.
///
/// Feed it canonical [`Country`] instances via `add_vertex` / `add_border`,
/// then call `build()` to validate and freeze the result into an immutable
/// [`BorderGraph`]. All insertions are idempotent: repeated borders and
/// vertices collapse, which is what keeps the graph simple.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: BTreeMap<CountryId, Country>,
    edges: BTreeSet<(CountryId, CountryId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. A vertex already present under the same id is kept
    /// unchanged (first-write-wins, matching the registry contract).
    pub fn add_vertex(&mut self, country: Country) {
        self.vertices.entry(country.id).or_insert(country);
    }

    /// Add an undirected border between two countries.
    ///
    /// Both endpoints are added as vertices. Returns `true` if the edge was
    /// inserted, `false` if it was already present or would be a self-loop.
    pub fn add_border(&mut self, a: Country, b: Country) -> bool {
        if a.id == b.id {
            return false;
        }
        let key = edge_key(a.id, b.id);
        self.add_vertex(a);
        self.add_vertex(b);
        self.edges.insert(key)
    }

    /// Number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build and validate the graph, returning an immutable [`BorderGraph`].
    ///
    /// Fails with [`GraphError::EmptyGraph`] if no edge was added.
    pub fn build(self) -> CoreResult<BorderGraph> {
        if self.edges.is_empty() {
            return Err(GraphError::EmptyGraph.into());
        }

        let adjacency = build_adjacency(&self.vertices, &self.edges);
        validate::validate_structure(&self.vertices, &self.edges, &adjacency)?;

        Ok(BorderGraph {
            vertices: self.vertices,
            edges: self.edges,
            adjacency,
        })
    }
}

/// Normalize an unordered pair so (a, b) and (b, a) share one key.
pub(crate) fn edge_key(a: CountryId, b: CountryId) -> (CountryId, CountryId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build sorted adjacency lists: for each vertex, its distinct neighbors.
fn build_adjacency(
    vertices: &BTreeMap<CountryId, Country>,
    edges: &BTreeSet<(CountryId, CountryId)>,
) -> BTreeMap<CountryId, Vec<CountryId>> {
    let mut adjacency: BTreeMap<CountryId, Vec<CountryId>> =
        vertices.keys().map(|&id| (id, Vec::new())).collect();

    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    for neighbors in adjacency.values_mut() {
        neighbors.sort();
    }

    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(id: u32, code: &str) -> Country {
        Country::new(CountryId::new(id), code, code)
    }

    #[test]
    fn builder_deduplicates_edges() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_border(country(1, "USA"), country(2, "CAN")));
        // Same border again, both orientations.
        assert!(!builder.add_border(country(1, "USA"), country(2, "CAN")));
        assert!(!builder.add_border(country(2, "CAN"), country(1, "USA")));

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn builder_rejects_self_loops() {
        let mut builder = GraphBuilder::new();
        assert!(!builder.add_border(country(1, "USA"), country(1, "USA")));
        assert_eq!(builder.vertex_count(), 0);
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn build_fails_without_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(country(1, "USA"));
        assert!(builder.build().is_err());
    }

    #[test]
    fn add_vertex_is_first_write_wins() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(country(1, "USA"));
        builder.add_vertex(Country::new(CountryId::new(1), "US2", "Renamed"));
        builder.add_border(country(1, "USA"), country(2, "CAN"));

        let graph = builder.build().unwrap();
        assert_eq!(graph.country(CountryId::new(1)).unwrap().code, "USA");
    }

    #[test]
    fn adjacency_matches_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_border(country(1, "USA"), country(2, "CAN"));
        builder.add_border(country(1, "USA"), country(3, "MEX"));
        let graph = builder.build().unwrap();

        let usa = CountryId::new(1);
        assert_eq!(
            graph.neighbors(usa),
            &[CountryId::new(2), CountryId::new(3)]
        );
        assert_eq!(graph.neighbors(CountryId::new(2)), &[usa]);
    }
}
