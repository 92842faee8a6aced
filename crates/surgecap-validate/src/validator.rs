//! Pre-flight checks for one feed file.
//!
//! Run before transcoding to catch schema drift early: a survey revision
//! that renames headers shows up as header failures, and facilities the
//! directory has never seen show up as location failures, without touching
//! any output.

use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::debug;

use surgecap_geo::LocationDirectory;
use surgecap_header::HeaderLookup;
use surgecap_schema::SurveySchema;
use surgecap_transform::read_feed;

use crate::error::{Result, ValidateError};

/// Outcome of one check: pass/fail plus whatever failed.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub pass: bool,
    pub errors: Vec<String>,
}

impl CheckReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            pass: errors.is_empty(),
            errors,
        }
    }
}

/// Combined verdict for one file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub pass: bool,
    pub header_errors: Vec<String>,
    pub location_errors: Vec<String>,
}

/// Validates feed files against a survey schema and the facility directory.
pub struct CsvValidator<'a> {
    schema: &'static SurveySchema,
    /// Master lookup: short names and aliases are all valid headers.
    master: HeaderLookup,
    directory: &'a LocationDirectory,
}

impl<'a> CsvValidator<'a> {
    pub fn new(schema: &'static SurveySchema, directory: &'a LocationDirectory) -> Result<Self> {
        let master = HeaderLookup::build_master(schema.fields)?;
        Ok(Self {
            schema,
            master,
            directory,
        })
    }

    /// Every header must be a known alias or canonical short name.
    pub fn validate_headers(&self, input: &Path) -> Result<CheckReport> {
        let headers = self.read_headers(input)?;
        let unknown: Vec<String> = headers
            .into_iter()
            .filter(|h| !self.master.contains(h))
            .collect();
        Ok(CheckReport::from_errors(unknown))
    }

    /// Every facility name in the file must resolve (directly or through a
    /// name alias) to a directory entry.
    pub fn validate_locations(&self, input: &Path) -> Result<CheckReport> {
        let profile = &self.schema.profile;
        let (text, _) = read_feed(input)?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|source| ValidateError::Csv {
                path: input.to_path_buf(),
                source,
            })?
            .clone();
        let name_index = headers
            .iter()
            .position(|h| self.master.resolve(h) == Some(profile.name_field))
            .ok_or_else(|| ValidateError::MissingNameColumn {
                field: profile.name_field,
                path: input.to_path_buf(),
            })?;

        let mut unmatched = BTreeSet::new();
        for record in reader.records() {
            let record = record.map_err(|source| ValidateError::Csv {
                path: input.to_path_buf(),
                source,
            })?;
            let Some(raw_name) = record.get(name_index).map(str::trim) else {
                continue;
            };
            if raw_name.is_empty() {
                continue;
            }
            let canonical = self.directory.canonical_name_for(raw_name);
            if self.directory.location_for(canonical).is_none() {
                unmatched.insert(raw_name.to_string());
            }
        }
        Ok(CheckReport::from_errors(unmatched.into_iter().collect()))
    }

    /// Both checks, combined into one verdict.
    pub fn validate_csv(&self, input: &Path) -> Result<ValidationReport> {
        let header_result = self.validate_headers(input)?;
        let location_result = self.validate_locations(input)?;
        debug!(
            file = %input.display(),
            header_errors = header_result.errors.len(),
            location_errors = location_result.errors.len(),
            "validated feed"
        );
        Ok(ValidationReport {
            pass: header_result.pass && location_result.pass,
            header_errors: header_result.errors,
            location_errors: location_result.errors,
        })
    }

    fn read_headers(&self, input: &Path) -> Result<Vec<String>> {
        let (text, _) = read_feed(input)?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader.headers().map_err(|source| ValidateError::Csv {
            path: input.to_path_buf(),
            source,
        })?;
        Ok(headers.iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use surgecap_model::SurveyType;
    use tempfile::NamedTempFile;

    fn schema() -> &'static SurveySchema {
        SurveySchema::for_survey(SurveyType::Hospital)
    }

    fn directory() -> LocationDirectory {
        LocationDirectory::from_json_str(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {
                    "HospitalName": "Test Hospital",
                    "HospitalNameAliases": "Test Hosptial",
                    "GeocodedHospitalCounty": "Test County"
                },
                "geometry": {"type": "Point", "coordinates": [-75.0, 40.0]}
            }]}"#,
            &schema().profile,
        )
        .unwrap()
    }

    fn feed(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn known_headers_pass() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalName,HospitalZip,numicubeds\nTest Hospital,19104,10\n");
        let report = validator.validate_headers(file.path()).unwrap();
        assert!(report.pass, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn unknown_headers_are_listed() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalName,Entirely New Column\nTest Hospital,1\n");
        let report = validator.validate_headers(file.path()).unwrap();
        assert!(!report.pass);
        assert_eq!(report.errors, vec!["Entirely New Column"]);
    }

    #[test]
    fn aliased_facility_names_pass_location_check() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalName\nTest Hospital\nTest Hosptial\n");
        let report = validator.validate_locations(file.path()).unwrap();
        assert!(report.pass, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn unknown_facilities_fail_location_check() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalName\nTest Hospital\nNowhere General\n");
        let report = validator.validate_locations(file.path()).unwrap();
        assert!(!report.pass);
        assert_eq!(report.errors, vec!["Nowhere General"]);
    }

    #[test]
    fn combined_verdict_requires_both_checks() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalName,Mystery Column\nNowhere General,1\n");
        let report = validator.validate_csv(file.path()).unwrap();
        assert!(!report.pass);
        assert_eq!(report.header_errors, vec!["Mystery Column"]);
        assert_eq!(report.location_errors, vec!["Nowhere General"]);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let directory = directory();
        let validator = CsvValidator::new(schema(), &directory).unwrap();
        let file = feed("HospitalZip\n19104\n");
        let err = validator.validate_locations(file.path()).unwrap_err();
        assert!(matches!(err, ValidateError::MissingNameColumn { .. }));
    }
}
