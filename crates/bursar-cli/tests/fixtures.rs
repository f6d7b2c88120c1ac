//! CLI runs against the shared catalog and applicant fixtures in `tests/fixtures/`.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

fn catalog(name: &str) -> String {
    fixtures_dir()
        .join("catalogs")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[allow(deprecated)]
fn bursar_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bursar").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn evaluate_json(dir: &TempDir, rules: Option<&str>, applicant: [&str; 4]) -> Value {
    let mut cmd = bursar_in(dir);
    if let Some(rules) = rules {
        cmd.args(["--rules", rules]);
    }
    let out = cmd
        .args([
            "evaluate",
            "--cgpa",
            applicant[0],
            "--family-income",
            applicant[1],
            "--co-curricular-score",
            applicant[2],
            "--disciplinary-actions",
            applicant[3],
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn spelled_out_reference_catalog_has_builtin_digest() {
    let dir = TempDir::new().unwrap();
    let applicant = ["3.4", "10000", "65", "1"];

    let builtin = evaluate_json(&dir, None, applicant);
    let from_file = evaluate_json(&dir, Some(&catalog("reference.toml")), applicant);

    assert_eq!(builtin["rules_digest"], from_file["rules_digest"]);
    assert_eq!(builtin["outcome"], from_file["outcome"]);
    assert_eq!(from_file["outcome"]["decision"], "AWARD_PARTIAL");
}

#[test]
fn overrides_reorder_extend_and_disable_rules() {
    let dir = TempDir::new().unwrap();
    let rules = catalog("overrides.toml");

    // Low CGPA (95) normally beats the disciplinary rule (90); the override lifts it to 120.
    let before = evaluate_json(&dir, None, ["2.0", "2000", "0", "2"]);
    assert_eq!(before["outcome"]["rule"], "Low CGPA – not eligible");
    let after = evaluate_json(&dir, Some(&rules), ["2.0", "2000", "0", "2"]);
    assert_eq!(after["outcome"]["rule"], "Serious disciplinary record");

    let athlete = evaluate_json(&dir, Some(&rules), ["3.0", "20000", "96", "0"]);
    assert_eq!(athlete["outcome"]["rule"], "Athlete review");

    let disabled = evaluate_json(&dir, Some(&rules), ["2.7", "3500", "0", "0"]);
    assert_eq!(disabled["outcome"]["decision"], "NO_DECISION");
}

#[test]
fn json_catalog_contains_only_its_own_rules() {
    let dir = TempDir::new().unwrap();
    let out = bursar_in(&dir)
        .args(["--rules", &catalog("need_only.json"), "rules"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("| 70 | Need-based review"));
    assert!(!stdout.contains("Top merit candidate"));
}

#[test]
fn batch_over_reference_scenarios() {
    let dir = TempDir::new().unwrap();
    let input = fixtures_dir().join("applicants").join("scenarios.jsonl");
    let out = bursar_in(&dir)
        .args(["batch", "--input", &input.to_string_lossy()])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    let decisions: Vec<&str> = v["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["outcome"]["decision"].as_str().unwrap())
        .collect();
    assert_eq!(
        decisions,
        vec![
            "AWARD_FULL",
            "AWARD_PARTIAL",
            "REJECT",
            "REJECT",
            "REVIEW",
            "NO_DECISION"
        ]
    );
}

#[test]
fn stored_reports_render_to_markdown() {
    let dir = TempDir::new().unwrap();
    let report = fixtures_dir().join("reports").join("no_decision.json");
    let out = bursar_in(&dir)
        .args(["md", "--report", &report.to_string_lossy()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let md = String::from_utf8_lossy(&out.stdout);
    assert!(md.contains("`NO_DECISION`"));
    assert!(md.contains("- Reason: No rule was triggered."));
}
