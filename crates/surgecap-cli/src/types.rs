//! Result structures shared by commands, summaries, and the JSON report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use surgecap_transform::RowError;

/// Outcome of processing one snapshot file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    /// Capture time parsed from the filename, when it follows the naming
    /// convention.
    pub taken_at: Option<DateTime<Utc>>,
    pub output: PathBuf,
    pub public_output: Option<PathBuf>,
    pub rows_written: u64,
    pub unmapped_headers: Vec<String>,
    pub row_errors: Vec<RowError>,
}

/// Outcome of a whole `process` run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub survey: String,
    pub files: Vec<FileReport>,
}

impl ProcessReport {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| !f.row_errors.is_empty())
    }
}

/// Outcome of validating one snapshot file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateFileReport {
    pub source: PathBuf,
    pub pass: bool,
    pub header_errors: Vec<String>,
    pub location_errors: Vec<String>,
}

/// Outcome of a whole `validate` run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub survey: String,
    pub files: Vec<ValidateFileReport>,
}

impl ValidateReport {
    pub fn all_pass(&self) -> bool {
        self.files.iter().all(|f| f.pass)
    }
}
