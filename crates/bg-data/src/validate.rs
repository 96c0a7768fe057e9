//! Dataset validation.

use std::collections::HashSet;

use crate::schema::Dataset;
use crate::{DataError, DataResult};

/// Validate a loaded dataset.
///
/// Duplicate country ids and blank codes are load-time errors. A border
/// record referencing an unknown country id is NOT rejected here: the build
/// pipeline tolerates it (skip-and-warn), so it must reach the builder.
pub fn validate_dataset(dataset: &Dataset) -> DataResult<()> {
    let mut seen_ids = HashSet::new();
    let mut seen_codes = HashSet::new();

    for country in &dataset.countries {
        if country.code.trim().is_empty() {
            return Err(DataError::Validation {
                what: format!("country {} has a blank code", country.id),
            });
        }
        if !seen_ids.insert(country.id) {
            return Err(DataError::Validation {
                what: format!("duplicate country id {}", country.id),
            });
        }
        if !seen_codes.insert(country.code.as_str()) {
            return Err(DataError::Validation {
                what: format!("duplicate country code {}", country.code),
            });
        }
    }

    Ok(())
}
