//! bg-core: stable foundation for bordergraph.
//!
//! Contains:
//! - ids (stable country identifiers and the year type)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
