//! End-to-end tests for the hobart binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn hobart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hobart"))
        .args(args)
        .env_remove("HOBART_CONFIG")
        .env_remove("HOBART_REPORT_DIR")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_snapshot(dir: &Path, symbol: &str, pe: f64, industry: &str) {
    let content = format!(
        r#"{{"symbol": "{symbol}", "overview": {{"name": "{symbol} Corp", "industry": "{industry}", "peRatio": {pe}}}}}"#
    );
    std::fs::write(dir.join(format!("{}.json", symbol.to_lowercase())), content).unwrap();
}

fn snapshot_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "NVDA", 40.0, "Semiconductors");
    write_snapshot(dir.path(), "ANET", 25.0, "Computer Communications Equipment");
    write_snapshot(dir.path(), "MU", 10.0, "Semiconductors & Memory");
    dir
}

#[test]
fn test_score_json_for_pe_only_snapshot() {
    let dir = snapshot_dir();
    let output = hobart(&[
        "score",
        dir.path().join("anet.json").to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let scorecard: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(scorecard["symbol"], "ANET");
    assert_eq!(scorecard["composite"], 50.0);
}

#[test]
fn test_rank_csv_orders_by_composite() {
    let dir = snapshot_dir();
    let output = hobart(&["rank", dir.path().to_str().unwrap(), "--format", "csv"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let symbols: Vec<_> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(1))
        .collect();
    assert_eq!(symbols, vec!["MU", "ANET", "NVDA"]);
}

#[test]
fn test_stock_report_is_written_once() {
    let dir = snapshot_dir();
    let out = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("nvda.json");
    let args = [
        "report",
        "stock",
        snapshot.to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ];

    let first = hobart(&args);
    assert!(first.status.success());
    let path = stdout(&first).trim().to_string();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("NVDA Corp"));

    let second = hobart(&args);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("Error"));
}

#[test]
fn test_peers_report_default_title() {
    let dir = snapshot_dir();
    let out = tempfile::tempdir().unwrap();
    let output = hobart(&[
        "report",
        "peers",
        dir.path().to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let content = std::fs::read_to_string(stdout(&output).trim()).unwrap();
    assert!(content.contains("ANET vs MU vs NVDA"));
}

#[test]
fn test_config_changes_scores() {
    let dir = snapshot_dir();
    let config = dir.path().join("config.txt");
    std::fs::write(&config, r#"{"valuation": {"peCeiling": 100}}"#).unwrap();

    let output = hobart(&[
        "score",
        dir.path().join("anet.json").to_str().unwrap(),
        "--format",
        "json",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let scorecard: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(scorecard["composite"], 75.0);
}

#[test]
fn test_components_json_lists_weighted_slots() {
    let output = hobart(&["components", "--format", "json"]);
    assert!(output.status.success());

    let components: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(components.len(), 8);
    assert!(components.iter().any(|c| c["name"] == "growth"));
}

#[test]
fn test_format_values() {
    let dir = snapshot_dir();
    let snapshot = dir.path().join("mu.json");
    let snapshot = snapshot.to_str().unwrap();

    let compact = hobart(&["score", snapshot, "--format", "json"]);
    assert_eq!(stdout(&compact).trim().lines().count(), 1);

    let pretty = hobart(&["score", snapshot, "--format", "pretty"]);
    assert!(stdout(&pretty).trim().lines().count() > 1);

    let unknown = hobart(&["score", snapshot, "--format", "yaml"]);
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("Invalid format"));
}

#[test]
fn test_components_reject_csv() {
    let output = hobart(&["components", "--format", "csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("csv is not available"));
}

#[test]
fn test_missing_snapshot_fails() {
    let output = hobart(&["score", "/definitely/not/here.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = hobart(&["rank", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No snapshots"));
}
