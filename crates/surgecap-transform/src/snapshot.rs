//! Snapshot file naming.
//!
//! Feed files are named `<PREFIX>_ResourceCapacity_<YYYY-MM-DD_HH-MM>.csv`
//! with the timestamp in UTC. The timestamp orders snapshots within a data
//! directory and names processed outputs.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

use surgecap_model::SurveyType;

use crate::error::{Result, TransformError};

const CAPACITY_MARKER: &str = "_ResourceCapacity_";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// A discovered feed file with its embedded capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub path: PathBuf,
    pub taken_at: DateTime<Utc>,
}

/// Parse the capture timestamp out of a snapshot filename.
pub fn snapshot_taken_at(filename: &str, survey: SurveyType) -> Result<DateTime<Utc>> {
    let bad_name = || TransformError::SnapshotName {
        name: filename.to_string(),
    };
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(bad_name)?;
    let expected_prefix = format!("{}{}", survey.feed_prefix(), CAPACITY_MARKER);
    let timestamp = stem.strip_prefix(&expected_prefix).ok_or_else(bad_name)?;
    let naive =
        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| bad_name())?;
    Ok(naive.and_utc())
}

/// Output filename for a processed snapshot (`processed_` +  source name,
/// or `public_processed_` for the public extract).
pub fn processed_filename(source_name: &str, public: bool) -> String {
    let prefix = if public {
        "public_processed_"
    } else {
        "processed_"
    };
    format!("{prefix}{source_name}")
}

/// Find every snapshot for a survey type in a directory, ordered by
/// capture time (oldest first). Files that do not follow the naming
/// convention are ignored.
pub fn discover_snapshots(dir: &Path, survey: SurveyType) -> Result<Vec<Snapshot>> {
    let entries = std::fs::read_dir(dir).map_err(|source| TransformError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut snapshots = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TransformError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Ok(taken_at) = snapshot_taken_at(name, survey) {
            snapshots.push(Snapshot { path, taken_at });
        }
    }
    snapshots.sort_by_key(|s| s.taken_at);
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_snapshot_timestamp() {
        let taken_at =
            snapshot_taken_at("HOS_ResourceCapacity_2020-03-30_00-00.csv", SurveyType::Hospital)
                .unwrap();
        assert_eq!(taken_at, Utc.with_ymd_and_hms(2020, 3, 30, 0, 0, 0).unwrap());
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        let err = snapshot_taken_at(
            "LTC_ResourceCapacity_2020-03-30_00-00.csv",
            SurveyType::Hospital,
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::SnapshotName { .. }));
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(
            snapshot_taken_at("HOS_ResourceCapacity_not-a-date.csv", SurveyType::Hospital).is_err()
        );
    }

    #[test]
    fn processed_filenames_carry_the_source_name() {
        let name = "HOS_ResourceCapacity_2020-04-09_15-00.csv";
        assert_eq!(
            processed_filename(name, false),
            "processed_HOS_ResourceCapacity_2020-04-09_15-00.csv"
        );
        assert_eq!(
            processed_filename(name, true),
            "public_processed_HOS_ResourceCapacity_2020-04-09_15-00.csv"
        );
    }

    #[test]
    fn discovery_orders_by_capture_time() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in [
            "HOS_ResourceCapacity_2020-04-02_12-00.csv",
            "HOS_ResourceCapacity_2020-03-30_00-00.csv",
            "LTC_ResourceCapacity_2020-04-01_00-00.csv",
            "notes.txt",
        ] {
            std::fs::write(dir.path().join(name), "HospitalName\n").unwrap();
        }
        let snapshots = discover_snapshots(dir.path(), SurveyType::Hospital).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].taken_at < snapshots[1].taken_at);
        assert!(
            snapshots[0]
                .path
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .contains("2020-03-30")
        );
    }
}
