use core::fmt;

/// Stable identifier of a country, as assigned by the upstream dataset.
///
/// Unlike dense internal indices, these codes are arbitrary positive
/// integers (e.g. 2 for the United States in the COW numbering), so the
/// wrapper stores the raw value rather than an index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryId(u32);

impl CountryId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryId({})", self.0)
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar year a border record becomes effective (cumulative from then on).
pub type Year = i32;
