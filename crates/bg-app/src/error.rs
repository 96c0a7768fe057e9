//! Error types for the bg-app service layer.

use bg_core::{CountryId, Year};

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The data source could not be read or queried.
    #[error("Data source error: {0}")]
    Data(String),

    /// No border records qualify for the requested year.
    #[error("No borders are present for the selected year {year}")]
    NoBorders { year: Year },

    /// A query was issued before any successful build.
    #[error("Graph not built yet")]
    GraphNotBuilt,

    /// No published country carries the requested code.
    #[error("Unknown country code: {code}")]
    CountryNotFound { code: String },

    /// Reachability was requested for a country outside the vertex set.
    #[error("Country {id} is not in the current graph")]
    CountryNotInGraph { id: CountryId },

    /// Graph-layer failure (construction or cross-check invariant).
    #[error("Graph error: {0}")]
    Graph(String),
}

/// Result type for bg-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<bg_data::DataError> for AppError {
    fn from(err: bg_data::DataError) -> Self {
        AppError::Data(err.to_string())
    }
}

impl From<bg_core::CoreError> for AppError {
    fn from(err: bg_core::CoreError) -> Self {
        AppError::Graph(err.to_string())
    }
}
