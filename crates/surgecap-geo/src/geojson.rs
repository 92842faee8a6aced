//! Minimal GeoJSON shapes for the facility reference collection.
//!
//! Each feature carries the facility properties (name, pipe-delimited name
//! aliases, geocoded county) and a point geometry with coordinates ordered
//! `[longitude, latitude]`.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl Feature {
    /// String property, with empty and non-string values treated as absent.
    pub fn string_property(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// `(longitude, latitude)` when the geometry carries both.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let geometry = self.geometry.as_ref()?;
        match geometry.coordinates.as_slice() {
            [longitude, latitude, ..] => Some((*longitude, *latitude)),
            _ => None,
        }
    }
}
