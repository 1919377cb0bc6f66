use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LINES: &str = r#"[
    {"label": "blue", "stations": ["Silk Board", "HSR Layout", {"name": "Airport", "planned": true}]}
]"#;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("nammametro-cli");
    cmd.env("RUST_LOG", "error").env_remove("NAMMA_METRO_LINES");
    cmd
}

fn write_lines(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("lines.json");
    fs::write(&path, contents).expect("write lines file");
    path
}

#[test]
fn lines_flag_replaces_default_network() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(&dir, LINES);

    cli()
        .arg("--lines")
        .arg(&path)
        .args(["route", "--from", "silk board", "--to", "airport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Silk Board -> HSR Layout -> Airport"));
}

#[test]
fn environment_variable_selects_line_data() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(&dir, LINES);

    cargo_bin_cmd!("nammametro-cli")
        .env("RUST_LOG", "error")
        .env("NAMMA_METRO_LINES", &path)
        .arg("lines")
        .assert()
        .success()
        .stdout("blue: 3 stations\n");
}

#[test]
fn exclude_planned_hides_planned_stations() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(&dir, LINES);

    cli()
        .arg("--lines")
        .arg(&path)
        .arg("--exclude-planned")
        .args(["route", "--from", "Silk Board", "--to", "Airport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown station name: Airport"));

    cli()
        .arg("--lines")
        .arg(&path)
        .arg("--exclude-planned")
        .args(["--format", "basic", "stations"])
        .assert()
        .success()
        .stdout("Silk Board\nHSR Layout\n");
}

#[test]
fn missing_line_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .arg("--lines")
        .arg(dir.path().join("absent.json"))
        .arg("lines")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load line definitions"));
}

#[test]
fn invalid_line_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(&dir, r#"[{"label": "blue", "stations": []}]"#);

    cli()
        .arg("--lines")
        .arg(&path)
        .arg("stations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'blue' has no stations"));
}

#[test]
fn disconnected_lines_report_no_route() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(
        &dir,
        r#"[
            {"label": "left", "stations": ["A", "B"]},
            {"label": "right", "stations": ["C", "D"]}
        ]"#,
    );

    cli()
        .arg("--lines")
        .arg(&path)
        .args(["route", "--from", "A", "--to", "D"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between A and D"))
        .stderr(predicate::str::contains("unknown station").not());
}

#[test]
fn punctuation_only_station_names_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_lines(&dir, r#"[{"label": "x", "stations": ["Alpha", "...", "Beta"]}]"#);

    cli()
        .arg("--lines")
        .arg(&path)
        .arg("stations")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "line 'x' has a blank station name at position 2",
        ));
}
