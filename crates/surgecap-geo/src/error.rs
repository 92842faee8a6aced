use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or querying the facility directory.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Failed to read the reference file.
    #[error("failed to read directory source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference file is not valid GeoJSON.
    #[error("failed to parse directory source {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A feature lacks the property naming the facility.
    #[error("feature {index} is missing the '{property}' property")]
    MissingNameProperty { index: usize, property: String },

    /// A facility name (post-alias-resolution) has no directory entry.
    /// Fatal for the row; callers must not continue with blank geodata.
    #[error("no directory entry for facility '{name}'")]
    LocationNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, GeoError>;
