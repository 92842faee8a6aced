//! End-to-end runs through the command layer.

use std::path::Path;

use tempfile::TempDir;

use surgecap_cli::cli::{ProcessArgs, SurveyArg, ValidateArgs};
use surgecap_cli::commands::{run_process, run_validate};

const GEOJSON: &str = r#"{"type": "FeatureCollection", "features": [{
    "type": "Feature",
    "properties": {
        "HospitalName": "Test Hospital",
        "HospitalNameAliases": "Test Hosptial",
        "GeocodedHospitalCounty": "Test County"
    },
    "geometry": {"type": "Point", "coordinates": [-75.0, 40.0]}
}]}"#;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("HOS_locations.geojson"), GEOJSON).unwrap();
        Self { dir }
    }

    fn geo_file(&self) -> std::path::PathBuf {
        self.dir.path().join("HOS_locations.geojson")
    }

    fn write_snapshot(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).unwrap();
    }

    fn process_args(&self) -> ProcessArgs {
        ProcessArgs {
            survey: SurveyArg::Hos,
            input: self.dir.path().to_path_buf(),
            geo_file: Some(self.geo_file()),
            output_dir: Some(self.dir.path().to_path_buf()),
            public: false,
            all: false,
            skip_unknown_facilities: false,
            json_report: None,
        }
    }
}

fn read_headers(path: &Path) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.headers().unwrap().iter().map(String::from).collect()
}

#[test]
fn processes_the_latest_snapshot_in_a_directory() {
    let env = Env::new();
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-03-30_00-00.csv",
        "HospitalName\nTest Hospital\n",
    );
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-04-02_12-00.csv",
        "HospitalName,HospitalLatitude,HospitalLongitude\nTest Hospital,0,0\n",
    );

    let report = run_process(&env.process_args()).unwrap();
    assert_eq!(report.files.len(), 1);
    let file = &report.files[0];
    assert!(
        file.source
            .to_str()
            .unwrap()
            .contains("2020-04-02"),
        "expected the latest snapshot, got {:?}",
        file.source
    );
    assert_eq!(file.rows_written, 1);
    assert!(file.output.exists());
    assert!(file.taken_at.is_some());
}

#[test]
fn public_extract_is_a_strict_public_projection() {
    let env = Env::new();
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-04-02_12-00.csv",
        "HospitalName,Available Beds-Adult Intensive Care Unit (ICU) Staffed Beds,Employee Status-Total Employee Call Outs/Absenteeism \n\
         Test Hospital,10,25\n",
    );
    let mut args = env.process_args();
    args.public = true;
    let report = run_process(&args).unwrap();
    let file = &report.files[0];

    let public_output = file.public_output.as_ref().expect("public extract written");
    let public_headers = read_headers(public_output);
    assert!(public_headers.contains(&"numicubeds".to_string()));
    assert!(!public_headers.contains(&"ttlempcall".to_string()));

    // The full extract still carries the non-public column.
    let full_headers = read_headers(&file.output);
    assert!(full_headers.contains(&"ttlempcall".to_string()));
}

#[test]
fn skip_policy_reports_row_errors_in_the_report() {
    let env = Env::new();
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-04-02_12-00.csv",
        "HospitalName\nTest Hospital\nNowhere General\n",
    );
    let mut args = env.process_args();
    args.skip_unknown_facilities = true;
    args.json_report = Some(env.dir.path().join("report.json"));
    let report = run_process(&args).unwrap();
    assert!(report.has_errors());
    assert_eq!(report.files[0].rows_written, 1);
    assert_eq!(report.files[0].row_errors.len(), 1);

    let json = std::fs::read_to_string(env.dir.path().join("report.json")).unwrap();
    assert!(json.contains("Nowhere General"));
}

#[test]
fn abort_policy_fails_the_run_on_unknown_facility() {
    let env = Env::new();
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-04-02_12-00.csv",
        "HospitalName\nNowhere General\n",
    );
    assert!(run_process(&env.process_args()).is_err());
}

#[test]
fn validate_reports_per_file_verdicts() {
    let env = Env::new();
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-03-30_00-00.csv",
        "HospitalName\nTest Hosptial\n",
    );
    env.write_snapshot(
        "HOS_ResourceCapacity_2020-04-02_12-00.csv",
        "HospitalName,Mystery Column\nNowhere General,1\n",
    );
    let args = ValidateArgs {
        survey: SurveyArg::Hos,
        input: env.dir.path().to_path_buf(),
        geo_file: Some(env.geo_file()),
    };
    let report = run_validate(&args).unwrap();
    assert_eq!(report.files.len(), 2);
    assert!(!report.all_pass());
    let good = report
        .files
        .iter()
        .find(|f| f.source.to_str().unwrap().contains("2020-03-30"))
        .unwrap();
    assert!(good.pass);
    let bad = report
        .files
        .iter()
        .find(|f| f.source.to_str().unwrap().contains("2020-04-02"))
        .unwrap();
    assert_eq!(bad.header_errors, vec!["Mystery Column"]);
    assert_eq!(bad.location_errors, vec!["Nowhere General"]);
}
