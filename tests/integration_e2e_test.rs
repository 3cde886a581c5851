//! End-to-end tests driving the compiled binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;

fn fleet_usage(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fleet-usage").unwrap();
    cmd.env("FLEET_USAGE_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_template_import_report_flow() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    // Template export produces the canonical blank table
    let template = temp_dir.path().join("template.csv");
    fleet_usage(&data_dir)
        .arg("template")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template written"));
    let header = fs::read_to_string(&template).unwrap();
    assert!(header.starts_with("license_plate,driver,start_odometer"));

    // Import a filled-in copy
    let input = temp_dir.path().join("input.csv");
    fs::write(&input, common::SAMPLE_CSV).unwrap();
    fleet_usage(&data_dir)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 records"));

    // Vehicle report sees the imported data
    fleet_usage(&data_dir)
        .args(["vehicles", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("P1")
                .and(predicate::str::contains("costPerDistance"))
                .and(predicate::str::contains("associateLabel")),
        );

    // Driver report carries the trip columns
    fleet_usage(&data_dir)
        .args(["drivers", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tripCount").and(predicate::str::contains("Alice")));
}

#[test]
fn test_reports_without_data_are_a_notice_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    fleet_usage(&data_dir)
        .arg("vehicles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import a dataset first"));

    fleet_usage(&data_dir)
        .args(["drivers", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_import_of_malformed_file_fails_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    let input = temp_dir.path().join("broken.csv");
    fs::write(&input, "plate,who\nP1,Alice\n").unwrap();

    fleet_usage(&data_dir)
        .arg("import")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import of"));
}

#[test]
fn test_raw_export_writes_csv() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    let input = temp_dir.path().join("input.csv");
    fs::write(&input, common::SAMPLE_CSV).unwrap();
    fleet_usage(&data_dir).arg("import").arg(&input).assert().success();

    let out = temp_dir.path().join("dataset.csv");
    let mut cmd = fleet_usage(&data_dir);
    cmd.arg("raw").arg("--export").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 records"));

    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.contains("P2,Alice,0,0,10,1") || exported.contains("P2,Alice,0.0,0.0,10.0,1.0"));
}
