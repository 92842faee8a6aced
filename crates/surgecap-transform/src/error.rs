use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that fail a whole transcoding run.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The feed has no header row at all.
    #[error("feed is empty: {path}")]
    EmptyFeed { path: PathBuf },

    /// No header in the feed resolves to the facility-name field, so no row
    /// can be located or repaired.
    #[error("no facility-name column ({field}) found in {path}")]
    MissingNameColumn { field: &'static str, path: PathBuf },

    /// A converter was registered for a field the schema does not define.
    #[error("converter registered for unknown field '{field}'")]
    UnknownConverterTarget { field: String },

    /// A row failed under the abort policy. The partial output file has
    /// been removed; nothing of this run is usable.
    #[error("row {row} failed, file aborted: {source}")]
    RowFailed {
        row: u64,
        #[source]
        source: surgecap_geo::GeoError,
    },

    /// A filename does not follow the snapshot naming convention.
    #[error("filename '{name}' does not match <PREFIX>_ResourceCapacity_<YYYY-MM-DD_HH-MM>.csv")]
    SnapshotName { name: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// One collected per-row failure under the skip-and-continue policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    /// 1-based position among the data rows (the header row is not counted).
    pub row: u64,
    /// Facility name after alias resolution, as the directory saw it.
    pub facility: String,
    pub reason: String,
}
