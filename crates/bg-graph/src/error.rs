//! Graph-specific error types.

use bg_core::{CoreError, CountryId};

/// Graph construction, validation, and query errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Build finished without a single edge.
    #[error("Graph has no edges (no border records were added)")]
    EmptyGraph,

    /// An edge references an id that is not in the vertex set.
    #[error("Edge ({a}, {b}) references missing vertex {missing}")]
    MissingEndpoint {
        a: CountryId,
        b: CountryId,
        missing: CountryId,
    },

    /// An edge joins a vertex to itself.
    #[error("Self-loop on vertex {id}")]
    SelfLoop { id: CountryId },

    /// Adjacency lists disagree with the edge set.
    #[error("Inconsistent adjacency at vertex {id}")]
    InconsistentAdjacency { id: CountryId },

    /// A query named a country that is not a vertex of the graph.
    #[error("Country {id} is not a vertex of the graph")]
    VertexNotFound { id: CountryId },

    /// The redundant reachability strategies returned different sets.
    #[error(
        "Reachability strategies disagree (frontier={frontier}, library={library}, recursive={recursive})"
    )]
    StrategyDivergence {
        frontier: usize,
        library: usize,
        recursive: usize,
    },
}

impl From<GraphError> for CoreError {
    fn from(err: GraphError) -> Self {
        CoreError::Invariant {
            what: err.to_string(),
        }
    }
}
