//! bg-data: border dataset format and the data-source collaborator.
//!
//! A dataset is a flat file (YAML or JSON) listing countries and dated,
//! typed border records. The [`BorderSource`] trait is the seam the service
//! layer consumes: it hands back code-ordered country rows and the land
//! borders effective by a requested year.

pub mod schema;
pub mod source;
pub mod validate;

pub use schema::{BorderDef, BorderKind, CountryDef, Dataset};
pub use source::{BorderPairRow, BorderSource, CountryRow, DatasetSource};
pub use validate::validate_dataset;

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Validation error: {what}")]
    Validation { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate a dataset from a YAML file.
pub fn load_yaml(path: &std::path::Path) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_yaml::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Load and validate a dataset from a JSON file.
pub fn load_json(path: &std::path::Path) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}
