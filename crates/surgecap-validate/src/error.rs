use std::path::PathBuf;

use thiserror::Error;

use surgecap_transform::TransformError;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// Reading/decoding the feed failed.
    #[error(transparent)]
    Feed(#[from] TransformError),

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("header construction failed: {0}")]
    Header(#[from] surgecap_header::HeaderError),

    #[error("no facility-name column ({field}) found in {path}")]
    MissingNameColumn { field: &'static str, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
