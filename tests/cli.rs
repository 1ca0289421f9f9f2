use assert_cmd::Command;
use predicates::prelude::*;

fn pointplot() -> Command {
    Command::cargo_bin("pointplot").unwrap()
}

#[test]
fn piped_output_prints_the_chart() {
    pointplot()
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid Representation of Coordinates"))
        .stdout(predicate::str::contains("X Coordinate"))
        .stdout(predicate::str::contains("Y Coordinate"))
        .stdout(predicate::str::contains("Point 0"))
        .stdout(predicate::str::contains("Point 23"))
        .stdout(predicate::str::contains("Point 24").not());
}

#[test]
fn piped_output_keeps_marker_colors() {
    // First marker color of the cycle, as a 24-bit foreground escape
    pointplot()
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;2;31;119;180m•"))
        .stdout(predicate::str::contains("\x1b[38;2;31;119;180m●"));
}

#[test]
fn output_is_identical_across_runs() {
    let first = pointplot().output().unwrap();
    let second = pointplot().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn log_file_records_render_mode() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("pointplot.log");

    pointplot().arg("--log").arg(&log).assert().success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting pointplot"));
    assert!(contents.contains("Built figure"));
    assert!(contents.contains("writing text rendering"));
}

#[test]
fn unwritable_log_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("missing").join("pointplot.log");

    pointplot()
        .arg("--log")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open log file"));
}

#[test]
fn positional_arguments_are_rejected() {
    pointplot().arg("data.csv").assert().failure();
}
