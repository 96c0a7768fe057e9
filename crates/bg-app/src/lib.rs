//! Shared service layer for bordergraph.
//!
//! Orchestrates the full build pipeline (registry bootstrap, record
//! resolution, graph construction, atomic publication) and exposes the
//! analytics and reachability queries to frontends.

pub mod error;
pub mod model;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use model::{BuildSummary, WorldModel};
