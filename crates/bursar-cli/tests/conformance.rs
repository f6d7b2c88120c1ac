//! Schema conformance: emitted outcome reports validate against the generated JSON schema.

use assert_cmd::Command;
use bursar_types::OutcomeReport;
use schemars::schema_for;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn bursar_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bursar").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn outcome_schema() -> Value {
    serde_json::to_value(schema_for!(OutcomeReport)).unwrap()
}

#[test]
fn emitted_reports_validate_against_schema() {
    let dir = TempDir::new().unwrap();
    let validator = jsonschema::validator_for(&outcome_schema()).unwrap();

    for args in [
        ["3.8", "5000", "85", "0"],
        ["3.0", "20000", "10", "0"],
    ] {
        let out = bursar_in(&dir)
            .args([
                "evaluate",
                "--cgpa",
                args[0],
                "--family-income",
                args[1],
                "--co-curricular-score",
                args[2],
                "--disciplinary-actions",
                args[3],
                "--format",
                "json",
            ])
            .output()
            .unwrap();
        assert!(out.status.success());

        let report: Value = serde_json::from_slice(&out.stdout).unwrap();
        assert!(
            validator.is_valid(&report),
            "report does not match schema: {report}"
        );
    }
}

#[test]
fn schema_rejects_unknown_decision() {
    let validator = jsonschema::validator_for(&outcome_schema()).unwrap();
    let report = serde_json::json!({
        "schema": "bursar.outcome.v1",
        "tool": { "name": "bursar", "version": "0.1.0" },
        "evaluated_at": "2026-01-01T00:00:00Z",
        "rules_digest": "00",
        "applicant": {
            "cgpa": 3.0,
            "family_income": 100.0,
            "co_curricular_score": 1,
            "disciplinary_actions": 0
        },
        "outcome": { "decision": "MAYBE", "reason": "r" }
    });
    assert!(!validator.is_valid(&report));
}
