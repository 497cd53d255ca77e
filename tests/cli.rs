use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn chart_demo() -> Command {
    let mut cmd = Command::cargo_bin("chart-demo").unwrap();
    cmd.env_remove("CHART_DEMO_CONFIG")
        .env_remove("CHART_DEMO_CHART")
        .env_remove("CHART_DEMO_SPEED")
        .env_remove("CHART_DEMO_EASING")
        .env_remove("CHART_DEMO_ANIMATIONS")
        .env_remove("CHART_DEMO_SEED");
    cmd
}

#[test]
fn cli_shows_help() {
    chart_demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chart-demo"));
}

#[test]
fn kinds_lists_surfaces() {
    chart_demo()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("GeoMap"))
        .stdout(predicate::str::contains("geomap"))
        .stdout(predicate::str::contains("Scatter  cartesian"));
}

#[test]
fn run_replays_actions() {
    chart_demo()
        .args(["run", "--seed", "5", "select:pie", "speed:5000", "easing:Bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chart=Pie surface=pie speed=3000ms"))
        .stdout(predicate::str::contains("easing=Linear"))
        .stdout(predicate::str::contains("Product A"));
}

#[test]
fn run_json_is_a_render_command() {
    let out = chart_demo()
        .args(["run", "--seed", "6", "--json", "select:scatter", "animations:off"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["kind"], "Scatter");
    assert_eq!(v["visible"], "Cartesian");
    assert_eq!(v["cartesian"]["transition"]["duration_ms"], 0);
    assert!(v["geo"]["transition"].is_null());
}

#[test]
fn run_rejects_bad_action() {
    chart_demo()
        .args(["run", "select:radar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radar"));
}

#[test]
fn run_exports_and_plots() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("bars.csv");
    let svg = dir.path().join("bars.svg");
    chart_demo()
        .args(["run", "--seed", "7", "select:bar"])
        .arg("--export")
        .arg(&csv)
        .arg("--plot")
        .arg(&svg)
        .assert()
        .success();
    assert!(csv.exists());
    assert!(svg.exists());
}

#[test]
fn easing_prints_samples() {
    chart_demo()
        .args(["easing", "EaseInQuad", "--steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.500\t0.2500"))
        .stdout(predicate::str::contains("1.000\t1.0000"));
}
