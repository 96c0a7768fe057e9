//! bg-graph: border graph layer for bordergraph.
//!
//! Provides:
//! - Country entity and canonical-instance registry
//! - Graph builder with simple-graph deduplication and validation
//! - Degree and connected-component analytics
//! - Reachability via three independently implemented traversals
//!
//! # Example
//!
//! ```
//! use bg_core::CountryId;
//! use bg_graph::{Country, GraphBuilder};
//!
//! let usa = Country::new(CountryId::new(2), "USA", "United States");
//! let can = Country::new(CountryId::new(20), "CAN", "Canada");
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_border(usa, can);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod analytics;
pub mod builder;
pub mod country;
pub mod error;
pub mod graph;
pub mod reach;
pub mod registry;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use country::Country;
pub use error::GraphError;
pub use graph::BorderGraph;
pub use registry::CountryRegistry;
