//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn corrlab() -> Command {
    let mut cmd = Command::cargo_bin("corrlab").expect("binary not found");
    cmd.env_remove("CORRLAB_N")
        .env_remove("CORRLAB_SLOPE")
        .env_remove("CORRLAB_NOISE")
        .env_remove("CORRLAB_SEED")
        .env("NO_COLOR", "1");
    cmd
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = corrlab()
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn help_flag() {
    corrlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--slope"))
        .stdout(predicate::str::contains("--noise"));
}

#[test]
fn version_flag() {
    corrlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("corrlab"));
}

#[test]
fn default_text_run() {
    corrlab()
        .assert()
        .success()
        .stdout(predicate::str::contains("Current settings"))
        .stdout(predicate::str::contains("• Estimated Pearson r = 0.959"))
        .stdout(predicate::str::contains("**").not())
        .stdout(predicate::str::contains("Interpretation"));
}

#[test]
fn markdown_run_keeps_markup() {
    corrlab()
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Current settings"))
        .stdout(predicate::str::contains("- **n** = 200"))
        .stdout(predicate::str::contains("|---:|---:|---:|"));
}

#[test]
fn no_preview_skips_table() {
    corrlab()
        .args(["--format", "markdown", "--no-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|---:|").not());
}

#[test]
fn noiseless_quiet_prints_unit_correlation() {
    corrlab()
        .args(["--noise", "0", "-q"])
        .assert()
        .success()
        .stdout("1.000\n");
    corrlab()
        .args(["--slope", "-2", "--noise", "0", "-q"])
        .assert()
        .success()
        .stdout("-1.000\n");
}

#[test]
fn json_report_fields() {
    let report = json_report(&[]);
    assert_eq!(report["samples"], 200);
    assert_eq!(report["seed"], 42);
    assert_eq!(report["params"]["n"], 200);
    assert_eq!(report["preview"].as_array().unwrap().len(), 10);
    let r = report["correlation"].as_f64().unwrap();
    assert!(r > 0.0 && r <= 1.0);
}

#[test]
fn runs_are_reproducible() {
    assert_eq!(json_report(&["--seed", "7"]), json_report(&["--seed", "7"]));
    assert_ne!(
        json_report(&["--seed", "7"])["correlation"],
        json_report(&["--seed", "8"])["correlation"]
    );
}

#[test]
fn env_overrides_defaults() {
    let output = corrlab()
        .env("CORRLAB_N", "50")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["samples"], 50);
}

#[test]
fn degenerate_data_exits_with_code_3() {
    corrlab()
        .args(["--slope", "0", "--noise", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("zero variance"))
        .stdout(predicate::str::contains("Current settings").not());
}

#[test]
fn off_grid_value_exits_with_code_4() {
    corrlab()
        .args(["--noise", "0.3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("noise"));
    corrlab().args(["-n", "75"]).assert().code(4);
}

#[test]
fn csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    corrlab()
        .args(["-n", "100", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "x,y");
    assert_eq!(lines.len(), 101);
}

#[test]
fn svg_plot_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot.svg");
    corrlab()
        .arg("--plot")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot written"));
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn plot_into_missing_directory_fails() {
    corrlab()
        .args(["--plot", "/nonexistent-dir/plot.svg"])
        .assert()
        .code(1);
}

#[test]
fn sweep_json() {
    let output = corrlab()
        .args(["--sweep", "--trials", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = result["points"].as_array().unwrap();
    assert_eq!(points.len(), 26);
    assert!((points[0]["mean_abs_r"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn sweep_text_table() {
    corrlab()
        .args(["--sweep", "--trials", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("noise sweep"))
        .stdout(predicate::str::contains("mean|r|"));
}

#[test]
fn quiet_sweep_prints_bare_column() {
    let output = corrlab()
        .args(["--sweep", "--trials", "2", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "1.000");
    assert!(lines.iter().all(|l| l.parse::<f64>().is_ok()));
}

#[test]
fn sweep_with_zero_trials_is_config_error() {
    corrlab()
        .args(["--sweep", "--trials", "0"])
        .assert()
        .code(4);
}

#[test]
fn completion_bash() {
    corrlab()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corrlab"));
}
