//! The country entity.

use core::fmt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use bg_core::CountryId;

/// A country vertex.
///
/// Equality and hashing are keyed solely by `id`: within one graph build
/// every consumer must hold the same canonical instance for a given id
/// (see [`crate::CountryRegistry`]), so two values with equal ids always
/// denote the same country. Ordering uses the short code, which is the
/// sort key of the published country list.
#[derive(Debug, Clone)]
pub struct Country {
    pub id: CountryId,
    /// Short code, e.g. "USA" (sort key).
    pub code: String,
    /// Full display name.
    pub name: String,
}

impl Country {
    pub fn new(id: CountryId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Country {
    fn cmp(&self, other: &Self) -> Ordering {
        // Code first; id as tie-breaker keeps Ord consistent with Eq.
        self.code
            .cmp(&other.code)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_keyed_by_id() {
        let a = Country::new(CountryId::new(2), "USA", "United States");
        let b = Country::new(CountryId::new(2), "US2", "Renamed");
        let c = Country::new(CountryId::new(20), "USA", "United States");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_uses_code() {
        let can = Country::new(CountryId::new(20), "CAN", "Canada");
        let usa = Country::new(CountryId::new(2), "USA", "United States");

        assert!(can < usa);
    }

    #[test]
    fn display_shows_code_and_name() {
        let mex = Country::new(CountryId::new(70), "MEX", "Mexico");
        assert_eq!(mex.to_string(), "MEX - Mexico");
    }
}
