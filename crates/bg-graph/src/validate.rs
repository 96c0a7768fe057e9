//! Graph validation logic.

use std::collections::{BTreeMap, BTreeSet};

use bg_core::{CoreResult, CountryId};

use crate::builder::edge_key;
use crate::country::Country;
use crate::error::GraphError;

/// Validate the frozen structure: every edge joins two distinct, existing
/// vertices, edges are stored normalized, and the adjacency lists agree
/// exactly with the edge set.
pub(crate) fn validate_structure(
    vertices: &BTreeMap<CountryId, Country>,
    edges: &BTreeSet<(CountryId, CountryId)>,
    adjacency: &BTreeMap<CountryId, Vec<CountryId>>,
) -> CoreResult<()> {
    for &(a, b) in edges {
        if a == b {
            return Err(GraphError::SelfLoop { id: a }.into());
        }
        for endpoint in [a, b] {
            if !vertices.contains_key(&endpoint) {
                return Err(GraphError::MissingEndpoint {
                    a,
                    b,
                    missing: endpoint,
                }
                .into());
            }
        }
        // Keys must be normalized or order-independent lookup breaks.
        if edge_key(a, b) != (a, b) {
            return Err(GraphError::InconsistentAdjacency { id: a }.into());
        }
    }

    // One adjacency list per vertex, no stray entries.
    if adjacency.len() != vertices.len() {
        let id = adjacency
            .keys()
            .find(|id| !vertices.contains_key(id))
            .copied()
            .unwrap_or(CountryId::new(0));
        return Err(GraphError::InconsistentAdjacency { id }.into());
    }

    let mut listed = 0usize;
    for (&id, neighbors) in adjacency {
        for pair in neighbors.windows(2) {
            if pair[0] >= pair[1] {
                return Err(GraphError::InconsistentAdjacency { id }.into());
            }
        }
        for &neighbor in neighbors {
            if !edges.contains(&edge_key(id, neighbor)) {
                return Err(GraphError::InconsistentAdjacency { id }.into());
            }
        }
        listed += neighbors.len();
    }

    // Each edge contributes exactly one entry to both endpoint lists.
    if listed != edges.len() * 2 {
        let id = adjacency.keys().next().copied().unwrap_or(CountryId::new(0));
        return Err(GraphError::InconsistentAdjacency { id }.into());
    }

    Ok(())
}
