//! Canonical-instance registry for countries.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use bg_core::CountryId;

use crate::country::Country;

/// Maps each country id to its single canonical [`Country`] instance.
///
/// Populated once per graph build and discarded afterwards. The registry
/// holds no graph structure; it only guarantees that everything built from
/// it references one instance per id.
#[derive(Debug, Default)]
pub struct CountryRegistry {
    entries: HashMap<CountryId, Country>,
}

impl CountryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `candidate` under its id if absent and return the canonical
    /// instance for that id (first-write-wins).
    pub fn register_or_get(&mut self, candidate: Country) -> &Country {
        match self.entries.entry(candidate.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(candidate),
        }
    }

    /// Return the canonical instance for `id` if one was registered.
    ///
    /// Never inserts: an unknown id is reported as `None` so the caller can
    /// decide how to handle the dangling reference.
    pub fn lookup(&self, id: CountryId) -> Option<&Country> {
        self.entries.get(&id)
    }

    /// Number of registered countries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usa() -> Country {
        Country::new(CountryId::new(2), "USA", "United States")
    }

    #[test]
    fn register_or_get_is_first_write_wins() {
        let mut registry = CountryRegistry::new();
        let first = registry.register_or_get(usa()).clone();

        let renamed = Country::new(CountryId::new(2), "USA", "Renamed");
        let second = registry.register_or_get(renamed);

        // The second call returned the original instance, not the new value.
        assert_eq!(second.name, first.name);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_never_inserts() {
        let mut registry = CountryRegistry::new();
        registry.register_or_get(usa());

        assert!(registry.lookup(CountryId::new(2)).is_some());
        assert!(registry.lookup(CountryId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
    }
}
