//! Streaming CSV transcoding.
//!
//! One pass over the feed: each record goes through the `RowNormalizer` and
//! the surviving rows are written, in input order, under canonical
//! short-name headers. Per-row failures are collected or abort the file
//! depending on the configured policy; a partial output file never
//! survives an abort.

use std::collections::BTreeSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info, warn};

use surgecap_geo::{GeoError, LocationDirectory};
use surgecap_header::HeaderLookup;
use surgecap_model::SourceRow;
use surgecap_schema::SurveySchema;

use crate::convert::ConverterTable;
use crate::encoding::{FeedEncoding, read_feed};
use crate::error::{Result, RowError, TransformError};
use crate::normalize::RowNormalizer;

/// What to do when a row's facility has no directory entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilePolicy {
    /// Abort the whole file and remove the partial output. The safe
    /// default: downstream consumers assume complete geodata.
    #[default]
    Abort,
    /// Drop the failing row, keep going, and report every failure in the
    /// outcome's error list.
    SkipRows,
}

#[derive(Debug, Clone, Default)]
pub struct TranscodeOptions {
    /// Restrict output to exactly this canonical column set (the
    /// public-release projection). `None` writes every resolved column.
    pub wanted_columns: Option<Vec<&'static str>>,
    pub policy: FilePolicy,
}

/// Result of one transcoding run.
#[derive(Debug, Clone, Default)]
pub struct TranscodeOutcome {
    pub rows_written: u64,
    /// Per-row failures, only ever non-empty under `FilePolicy::SkipRows`.
    pub errors: Vec<RowError>,
    /// Raw headers that resolved to no canonical field; reported once per
    /// file, their columns dropped from output.
    pub unmapped_headers: Vec<String>,
    /// The canonical columns written, in output order.
    pub columns: Vec<&'static str>,
}

/// Transcode one feed file to a normalized CSV.
pub fn transcode_file(
    input: &Path,
    output: &Path,
    schema: &SurveySchema,
    lookup: &HeaderLookup,
    directory: &LocationDirectory,
    converters: &ConverterTable,
    options: &TranscodeOptions,
) -> Result<TranscodeOutcome> {
    let profile = &schema.profile;
    let (text, encoding) = read_feed(input)?;
    if encoding == FeedEncoding::Windows1252 {
        info!(file = %input.display(), "feed is not UTF-8, decoded as WINDOWS-1252");
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| TransformError::Csv {
            path: input.to_path_buf(),
            source,
        })?
        .clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(TransformError::EmptyFeed {
            path: input.to_path_buf(),
        });
    }

    let mut unmapped = BTreeSet::new();
    let mut resolved: Vec<&'static str> = Vec::new();
    for raw in headers.iter() {
        match lookup.resolve(raw) {
            Some(short_name) => {
                if !resolved.contains(&short_name) {
                    resolved.push(short_name);
                }
            }
            None => {
                unmapped.insert(raw.to_string());
            }
        }
    }
    if !resolved.contains(&profile.name_field) {
        return Err(TransformError::MissingNameColumn {
            field: profile.name_field,
            path: input.to_path_buf(),
        });
    }

    let mut columns: Vec<&'static str> = match &options.wanted_columns {
        Some(wanted) => resolved
            .iter()
            .copied()
            .filter(|short_name| wanted.contains(short_name))
            .collect(),
        None => resolved,
    };
    // The county is supplied from the directory even when the feed has no
    // such column, so make room for it unless the projection excludes it.
    let county_allowed = options
        .wanted_columns
        .as_ref()
        .is_none_or(|wanted| wanted.contains(&profile.county_field));
    if county_allowed && !columns.contains(&profile.county_field) {
        columns.push(profile.county_field);
    }

    let mut writer = WriterBuilder::new()
        .from_path(output)
        .map_err(|source| TransformError::Csv {
            path: output.to_path_buf(),
            source,
        })?;
    writer
        .write_record(&columns)
        .map_err(|source| TransformError::Csv {
            path: output.to_path_buf(),
            source,
        })?;

    let normalizer = RowNormalizer::new(lookup, directory, converters, profile);
    let mut outcome = TranscodeOutcome {
        columns: columns.clone(),
        ..TranscodeOutcome::default()
    };
    let mut row_number = 0u64;

    for record in reader.records() {
        let record = record.map_err(|source| TransformError::Csv {
            path: input.to_path_buf(),
            source,
        })?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        row_number += 1;

        let source = source_row(&headers, &record);
        match normalizer.normalize(&source, &mut unmapped) {
            Ok(row) => {
                let fields: Vec<String> = columns
                    .iter()
                    .map(|col| row.get(col).map(|v| v.as_csv_field()).unwrap_or_default())
                    .collect();
                writer
                    .write_record(&fields)
                    .map_err(|source| TransformError::Csv {
                        path: output.to_path_buf(),
                        source,
                    })?;
                outcome.rows_written += 1;
            }
            Err(err) => match options.policy {
                FilePolicy::Abort => {
                    drop(writer);
                    let _ = std::fs::remove_file(output);
                    return Err(TransformError::RowFailed {
                        row: row_number,
                        source: err,
                    });
                }
                FilePolicy::SkipRows => {
                    let facility = match &err {
                        GeoError::LocationNotFound { name } => name.clone(),
                        _ => String::new(),
                    };
                    outcome.errors.push(RowError {
                        row: row_number,
                        facility,
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    writer.flush().map_err(|source| TransformError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    if !unmapped.is_empty() {
        warn!(
            file = %input.display(),
            count = unmapped.len(),
            "dropped columns with unmapped headers"
        );
        for header in &unmapped {
            debug!(header = %header, "unmapped header");
        }
    }
    outcome.unmapped_headers = unmapped.into_iter().collect();
    Ok(outcome)
}

/// Pair every header with its field for one record, padding short records
/// with empty values. Cell values are trimmed; header strings are left
/// verbatim for the resolver.
fn source_row(headers: &StringRecord, record: &StringRecord) -> SourceRow {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let value = record.get(index).unwrap_or("").trim();
            (header.to_string(), value.to_string())
        })
        .collect()
}
