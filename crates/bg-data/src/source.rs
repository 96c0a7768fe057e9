//! The data-source collaborator consumed by the build pipeline.

use bg_core::Year;

use crate::schema::{BorderKind, Dataset};
use crate::{validate_dataset, DataResult};

/// One country row, as handed to the registry bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub id: u32,
    pub code: String,
    pub name: String,
}

/// One qualifying border record: a raw id pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderPairRow {
    pub c1: u32,
    pub c2: u32,
}

/// Read-only source of country and border rows.
///
/// `fetch_countries` returns rows ordered by code; `fetch_border_pairs`
/// restricts to land borders effective by the requested year (cumulative:
/// a border present by year Y stays present for all later years).
pub trait BorderSource {
    fn fetch_countries(&self) -> DataResult<Vec<CountryRow>>;
    fn fetch_border_pairs(&self, year: Year) -> DataResult<Vec<BorderPairRow>>;
}

/// In-memory [`BorderSource`] over a validated [`Dataset`].
#[derive(Debug, Clone)]
pub struct DatasetSource {
    dataset: Dataset,
}

impl DatasetSource {
    /// Wrap a dataset, validating it first.
    pub fn new(dataset: Dataset) -> DataResult<Self> {
        validate_dataset(&dataset)?;
        Ok(Self { dataset })
    }

    /// Load from a YAML file.
    pub fn open_yaml(path: &std::path::Path) -> DataResult<Self> {
        Ok(Self {
            dataset: crate::load_yaml(path)?,
        })
    }

    /// Load from a JSON file.
    pub fn open_json(path: &std::path::Path) -> DataResult<Self> {
        Ok(Self {
            dataset: crate::load_json(path)?,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl BorderSource for DatasetSource {
    fn fetch_countries(&self) -> DataResult<Vec<CountryRow>> {
        let mut rows: Vec<CountryRow> = self
            .dataset
            .countries
            .iter()
            .map(|c| CountryRow {
                id: c.id,
                code: c.code.clone(),
                name: c.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    fn fetch_border_pairs(&self, year: Year) -> DataResult<Vec<BorderPairRow>> {
        Ok(self
            .dataset
            .borders
            .iter()
            .filter(|b| b.kind == BorderKind::Land && b.year <= year)
            .map(|b| BorderPairRow { c1: b.c1, c2: b.c2 })
            .collect())
    }
}
