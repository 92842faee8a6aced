//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use surgecap_model::SurveyType;

#[derive(Parser)]
#[command(
    name = "surgecap",
    version,
    about = "Normalize facility capacity feed snapshots",
    long_about = "Normalize hospital and long-term-care capacity CSV snapshots.\n\n\
                  Remaps inconsistent survey headers to the canonical schema, repairs\n\
                  facility names and geocoordinates from the reference directory, and\n\
                  writes normalized (and optionally public-release) extracts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transcode one snapshot (or the snapshots in a directory) to
    /// normalized CSV.
    Process(ProcessArgs),

    /// Check a snapshot's headers and facility names without writing
    /// anything.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Survey type of the feed.
    #[arg(value_enum)]
    pub survey: SurveyArg,

    /// A snapshot CSV, or a directory of snapshots.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Geocoded facility directory (default: geo_data/<PREFIX>_locations.geojson).
    #[arg(long = "geo-file", value_name = "PATH")]
    pub geo_file: Option<PathBuf>,

    /// Directory for processed output files (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write the public-release extract (hospital feeds only).
    #[arg(long = "public")]
    pub public: bool,

    /// Process every snapshot in the input directory, oldest first,
    /// instead of only the latest.
    #[arg(long = "all")]
    pub all: bool,

    /// Keep going when a facility has no directory entry: drop the row and
    /// report it, instead of aborting the file.
    #[arg(long = "skip-unknown-facilities")]
    pub skip_unknown_facilities: bool,

    /// Write a machine-readable JSON report of the run.
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Survey type of the feed.
    #[arg(value_enum)]
    pub survey: SurveyArg,

    /// A snapshot CSV, or a directory of snapshots.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Geocoded facility directory (default: geo_data/<PREFIX>_locations.geojson).
    #[arg(long = "geo-file", value_name = "PATH")]
    pub geo_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SurveyArg {
    Hos,
    Ltc,
}

impl From<SurveyArg> for SurveyType {
    fn from(arg: SurveyArg) -> Self {
        match arg {
            SurveyArg::Hos => SurveyType::Hospital,
            SurveyArg::Ltc => SurveyType::LongTermCare,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
