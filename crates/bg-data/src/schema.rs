//! Dataset schema definitions.

use bg_core::Year;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub countries: Vec<CountryDef>,
    #[serde(default)]
    pub borders: Vec<BorderDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryDef {
    pub id: u32,
    pub code: String,
    pub name: String,
}

/// One raw contiguity record: a pair of country ids, the boundary type, and
/// the year from which the record is effective (cumulatively).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorderDef {
    pub c1: u32,
    pub c2: u32,
    #[serde(default)]
    pub kind: BorderKind,
    pub year: Year,
}

/// Boundary classification. Only land borders enter the graph; the various
/// water-contiguity classes of the source data all collapse to `Water`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    #[default]
    Land,
    Water,
}
