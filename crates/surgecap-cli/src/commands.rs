//! Command orchestration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use surgecap_geo::LocationDirectory;
use surgecap_header::{HeaderLookup, public_fields};
use surgecap_model::SurveyType;
use surgecap_schema::SurveySchema;
use surgecap_transform::{
    ConverterTable, FilePolicy, TranscodeOptions, discover_snapshots, processed_filename,
    snapshot_taken_at, transcode_file,
};
use surgecap_validate::CsvValidator;

use crate::cli::{ProcessArgs, ValidateArgs};
use crate::types::{FileReport, ProcessReport, ValidateFileReport, ValidateReport};

pub fn run_process(args: &ProcessArgs) -> Result<ProcessReport> {
    let survey: SurveyType = args.survey.into();
    let span = info_span!("process", survey = %survey);
    let _guard = span.enter();

    let schema = SurveySchema::for_survey(survey);
    let lookup = HeaderLookup::build(schema.fields).context("build header lookup")?;
    let geo_file = geo_file_path(args.geo_file.as_deref(), survey);
    let directory = LocationDirectory::load(&geo_file, &schema.profile)
        .with_context(|| format!("load facility directory {}", geo_file.display()))?;
    let converters = ConverterTable::binary_for_schema(schema).context("build converter table")?;

    let public_columns = if args.public {
        let columns = public_fields(schema.fields);
        if columns.is_empty() {
            bail!("the {survey} schema defines no public fields; --public only applies to HOS feeds");
        }
        Some(columns)
    } else {
        None
    };

    let policy = if args.skip_unknown_facilities {
        FilePolicy::SkipRows
    } else {
        FilePolicy::Abort
    };

    let inputs = resolve_inputs(&args.input, survey, args.all)?;
    let mut files = Vec::new();
    for input in inputs {
        let source_name = file_name(&input)?;
        let output_dir = output_dir_for(&input, args.output_dir.as_deref());
        let taken_at = snapshot_taken_at(source_name, survey).ok();

        let output = output_dir.join(processed_filename(source_name, false));
        let options = TranscodeOptions {
            wanted_columns: None,
            policy,
        };
        let outcome = transcode_file(
            &input, &output, schema, &lookup, &directory, &converters, &options,
        )
        .with_context(|| format!("process {}", input.display()))?;

        let public_output = match &public_columns {
            Some(columns) => {
                let public_output = output_dir.join(processed_filename(source_name, true));
                let options = TranscodeOptions {
                    wanted_columns: Some(columns.clone()),
                    policy,
                };
                transcode_file(
                    &input,
                    &public_output,
                    schema,
                    &lookup,
                    &directory,
                    &converters,
                    &options,
                )
                .with_context(|| format!("process public extract of {}", input.display()))?;
                Some(public_output)
            }
            None => None,
        };

        info!(
            file = %input.display(),
            rows = outcome.rows_written,
            errors = outcome.errors.len(),
            "processed snapshot"
        );
        files.push(FileReport {
            source: input,
            taken_at,
            output,
            public_output,
            rows_written: outcome.rows_written,
            unmapped_headers: outcome.unmapped_headers,
            row_errors: outcome.errors,
        });
    }

    let report = ProcessReport {
        survey: survey.to_string(),
        files,
    };
    if let Some(path) = &args.json_report {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("write report {}", path.display()))?;
    }
    Ok(report)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateReport> {
    let survey: SurveyType = args.survey.into();
    let span = info_span!("validate", survey = %survey);
    let _guard = span.enter();

    let schema = SurveySchema::for_survey(survey);
    let geo_file = geo_file_path(args.geo_file.as_deref(), survey);
    let directory = LocationDirectory::load(&geo_file, &schema.profile)
        .with_context(|| format!("load facility directory {}", geo_file.display()))?;
    let validator = CsvValidator::new(schema, &directory).context("build validator")?;

    let inputs = resolve_inputs(&args.input, survey, true)?;
    let mut files = Vec::new();
    for input in inputs {
        let verdict = validator
            .validate_csv(&input)
            .with_context(|| format!("validate {}", input.display()))?;
        files.push(ValidateFileReport {
            source: input,
            pass: verdict.pass,
            header_errors: verdict.header_errors,
            location_errors: verdict.location_errors,
        });
    }
    Ok(ValidateReport {
        survey: survey.to_string(),
        files,
    })
}

/// Expand the input argument: a file is taken as-is, a directory is
/// searched for snapshots (all of them, or only the latest).
fn resolve_inputs(input: &Path, survey: SurveyType, all: bool) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let snapshots = discover_snapshots(input, survey)
        .with_context(|| format!("scan {}", input.display()))?;
    if snapshots.is_empty() {
        bail!(
            "no {} snapshots found in {}",
            survey.feed_prefix(),
            input.display()
        );
    }
    let paths: Vec<PathBuf> = snapshots.into_iter().map(|s| s.path).collect();
    if all {
        Ok(paths)
    } else {
        // Snapshots are sorted by capture time; the last one is the latest.
        Ok(paths.into_iter().rev().take(1).collect())
    }
}

fn geo_file_path(arg: Option<&Path>, survey: SurveyType) -> PathBuf {
    match arg {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from("geo_data").join(format!("{}_locations.geojson", survey.feed_prefix())),
    }
}

fn output_dir_for(input: &Path, arg: Option<&Path>) -> PathBuf {
    match arg {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("input {} has no usable filename", path.display()))
}
