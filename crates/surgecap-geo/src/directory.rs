//! The in-memory facility directory.
//!
//! Loaded once from the geocoded reference collection and read-only for the
//! rest of the run. Name resolution is alias-aware; location lookup is
//! exact-key only, so callers resolve the name first. That asymmetry
//! matches the upstream reference pipeline and is deliberate.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use surgecap_model::FacilityLocation;
use surgecap_schema::SurveyProfile;

use crate::error::{GeoError, Result};
use crate::geojson::FeatureCollection;

/// Index of known facilities, keyed by canonical facility name.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    by_name: HashMap<String, FacilityLocation>,
}

impl LocationDirectory {
    /// Load the directory from a GeoJSON reference file.
    pub fn load(path: &Path, profile: &SurveyProfile) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| GeoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection: FeatureCollection =
            serde_json::from_str(&contents).map_err(|source| GeoError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_features(collection, profile)
    }

    /// Load the directory from an in-memory GeoJSON document.
    pub fn from_json_str(json: &str, profile: &SurveyProfile) -> Result<Self> {
        let collection: FeatureCollection =
            serde_json::from_str(json).map_err(|source| GeoError::Json {
                path: "<inline>".into(),
                source,
            })?;
        Self::from_features(collection, profile)
    }

    fn from_features(collection: FeatureCollection, profile: &SurveyProfile) -> Result<Self> {
        let mut by_name = HashMap::new();
        for (index, feature) in collection.features.iter().enumerate() {
            let name = feature
                .string_property(profile.geojson_name_property)
                .ok_or_else(|| GeoError::MissingNameProperty {
                    index,
                    property: profile.geojson_name_property.to_string(),
                })?;

            // Zero or absent coordinates mean the geocode failed for this
            // entry; keep it out of the index so lookups fail fast instead
            // of handing out (0, 0).
            let Some((longitude, latitude)) = feature.coordinates() else {
                warn!(facility = name, "directory entry has no geometry, skipping");
                continue;
            };
            if latitude == 0.0 || longitude == 0.0 {
                warn!(facility = name, "directory entry has zero coordinates, skipping");
                continue;
            }

            let name_aliases = feature
                .string_property(profile.geojson_alias_property)
                .map(split_aliases)
                .unwrap_or_default();
            let county = feature
                .string_property(profile.geojson_county_property)
                .unwrap_or_default()
                .to_string();

            let location = FacilityLocation {
                canonical_name: name.to_string(),
                name_aliases,
                latitude,
                longitude,
                county,
            };
            if by_name.contains_key(name) {
                warn!(facility = name, "duplicate directory entry, keeping first");
                continue;
            }
            by_name.insert(name.to_string(), location);
        }
        Ok(Self { by_name })
    }

    /// Resolve a raw facility name to canonical form.
    ///
    /// Exact key first, then a scan of every entry's alias set. A name that
    /// matches nowhere is returned unchanged: an unresolved name is not an
    /// error here, only later when coordinates are requested.
    pub fn canonical_name_for<'a>(&'a self, raw_name: &'a str) -> &'a str {
        if self.by_name.contains_key(raw_name) {
            return raw_name;
        }
        for location in self.by_name.values() {
            if location.matches_alias(raw_name) {
                return &location.canonical_name;
            }
        }
        raw_name
    }

    /// Exact-key location lookup. No alias fallback: call
    /// `canonical_name_for` first if alias resolution is wanted.
    pub fn location_for(&self, name: &str) -> Option<&FacilityLocation> {
        self.by_name.get(name)
    }

    /// Like `location_for`, but a miss is a hard error.
    pub fn require_location(&self, name: &str) -> Result<&FacilityLocation> {
        self.location_for(name)
            .ok_or_else(|| GeoError::LocationNotFound {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Alias lists are pipe-delimited in the reference source.
fn split_aliases(raw: &str) -> std::collections::BTreeSet<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgecap_model::SurveyType;
    use surgecap_schema::SurveySchema;

    fn profile() -> &'static SurveyProfile {
        &SurveySchema::for_survey(SurveyType::Hospital).profile
    }

    fn sample() -> LocationDirectory {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "HospitalName": "Ellwood City Medical Center",
                        "HospitalNameAliases": "Ellwood City|Ellwood City Medical Ctr",
                        "GeocodedHospitalCounty": "Lawrence"
                    },
                    "geometry": {"type": "Point", "coordinates": [-80.2862, 40.8620]}
                },
                {
                    "type": "Feature",
                    "properties": {
                        "HospitalName": "Riddle Memorial Hospital",
                        "HospitalNameAliases": null,
                        "GeocodedHospitalCounty": "Delaware"
                    },
                    "geometry": {"type": "Point", "coordinates": [-75.4027, 39.9168]}
                },
                {
                    "type": "Feature",
                    "properties": {
                        "HospitalName": "Ungeolocated Hospital",
                        "GeocodedHospitalCounty": "Unknown"
                    },
                    "geometry": {"type": "Point", "coordinates": [0, 0]}
                }
            ]
        }"#;
        LocationDirectory::from_json_str(json, profile()).unwrap()
    }

    #[test]
    fn canonical_name_round_trips() {
        let directory = sample();
        assert_eq!(
            directory.canonical_name_for("Ellwood City Medical Center"),
            "Ellwood City Medical Center"
        );
        assert_eq!(
            directory.canonical_name_for("Ellwood City"),
            "Ellwood City Medical Center"
        );
        assert_eq!(
            directory.canonical_name_for("Ellwood City Medical Ctr"),
            "Ellwood City Medical Center"
        );
    }

    #[test]
    fn unknown_name_passes_through_unchanged() {
        let directory = sample();
        assert_eq!(
            directory.canonical_name_for("Completely New Facility"),
            "Completely New Facility"
        );
    }

    #[test]
    fn location_lookup_is_alias_blind() {
        let directory = sample();
        assert!(directory.location_for("Ellwood City Medical Center").is_some());
        // Raw alias does not resolve here; name resolution is a separate step.
        assert!(directory.location_for("Ellwood City").is_none());
    }

    #[test]
    fn require_location_fails_on_miss() {
        let directory = sample();
        let err = directory.require_location("Nowhere General").unwrap_err();
        assert!(matches!(err, GeoError::LocationNotFound { .. }));
    }

    #[test]
    fn zero_coordinate_entries_are_not_indexed() {
        let directory = sample();
        assert_eq!(directory.len(), 2);
        assert!(directory.location_for("Ungeolocated Hospital").is_none());
    }

    #[test]
    fn loads_county_and_coordinates() {
        let directory = sample();
        let location = directory.require_location("Riddle Memorial Hospital").unwrap();
        assert_eq!(location.county, "Delaware");
        assert_eq!(location.latitude, 39.9168);
        assert_eq!(location.longitude, -75.4027);
        assert!(location.name_aliases.is_empty());
    }

    #[test]
    fn loads_from_a_reference_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("HOS_locations.geojson");
        std::fs::write(
            &path,
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"HospitalName": "File Hospital", "GeocodedHospitalCounty": "Erie"},
                "geometry": {"type": "Point", "coordinates": [-80.0, 42.1]}
            }]}"#,
        )
        .unwrap();
        let directory = LocationDirectory::load(&path, profile()).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.location_for("File Hospital").is_some());
    }

    #[test]
    fn missing_name_property_fails_load() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
        ]}"#;
        let err = LocationDirectory::from_json_str(json, profile()).unwrap_err();
        assert!(matches!(err, GeoError::MissingNameProperty { .. }));
    }
}
