use std::collections::BTreeSet;

/// One reference record for a known facility, loaded from the geocoded
/// directory. `latitude`/`longitude` of `0.0` never reach this struct: the
/// directory treats zero or empty coordinates in the reference source as
/// unknown and rejects such entries at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityLocation {
    /// Primary key; the one spelling every row is normalized to.
    pub canonical_name: String,
    /// Alternate historical spellings that all resolve to this facility.
    pub name_aliases: BTreeSet<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Geocoded administrative county.
    pub county: String,
}

impl FacilityLocation {
    pub fn matches_alias(&self, name: &str) -> bool {
        self.name_aliases.contains(name)
    }
}
