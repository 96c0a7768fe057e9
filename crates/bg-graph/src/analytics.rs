//! Degree and connectivity analytics over a built graph.

use std::collections::BTreeMap;

use bg_core::CountryId;

use crate::graph::BorderGraph;

/// Degree of every vertex: the number of distinct incident edges, which for
/// a simple graph equals the number of distinct neighbors.
pub fn degree_map(graph: &BorderGraph) -> BTreeMap<CountryId, usize> {
    graph
        .vertices()
        .map(|c| (c.id, graph.neighbors(c.id).len()))
        .collect()
}

/// Number of connected components.
///
/// Implemented with union-find rather than traversal, so it can serve as an
/// independent cross-check of the reachability strategies in
/// [`crate::reach`]: the number of distinct reachable sets over all vertices
/// must equal this count.
pub fn connected_component_count(graph: &BorderGraph) -> usize {
    let index: BTreeMap<CountryId, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, c)| (c.id, i))
        .collect();

    let mut sets = DisjointSets::new(index.len());
    for (a, b) in graph.edges() {
        sets.union(index[&a], index[&b]);
    }

    (0..index.len()).filter(|&i| sets.find(i) == i).count()
}

/// Union-find with path halving and union by rank.
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}
