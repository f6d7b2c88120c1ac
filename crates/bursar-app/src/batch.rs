//! The batch use case: many independent evaluations against one shared store.
//!
//! The store is read-only, so records are evaluated in parallel; a failing record only
//! fails its own entry.

use anyhow::Context;
use bursar_domain::RuleStore;
use bursar_types::{ApplicantRecord, Decision, Outcome};
use rayon::prelude::*;
use serde::Serialize;

use crate::evaluate::validate_record;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Position of the record in the input.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecisionCounts {
    pub award_full: u32,
    pub award_partial: u32,
    pub review: u32,
    pub reject: u32,
    pub no_decision: u32,
    pub errors: u32,
}

impl DecisionCounts {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut counts = DecisionCounts::default();
        for e in entries {
            match e.outcome.as_ref().map(|o| o.decision) {
                Some(Decision::AwardFull) => counts.award_full += 1,
                Some(Decision::AwardPartial) => counts.award_partial += 1,
                Some(Decision::Review) => counts.review += 1,
                Some(Decision::Reject) => counts.reject += 1,
                Some(Decision::NoDecision) => counts.no_decision += 1,
                None => counts.errors += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchOutput {
    pub rules_digest: String,
    pub counts: DecisionCounts,
    pub entries: Vec<BatchEntry>,
}

/// One input record: parsed, or the reason it could not be turned into an applicant.
pub type ApplicantInput = Result<ApplicantRecord, String>;

/// Parse applicants from a JSON array or from JSON lines.
///
/// Malformed JSON fails the whole input. A well-formed value that is not a usable applicant
/// (wrong field type, not an object) is kept as an `Err` so it fails only its own entry.
pub fn parse_applicants_json(text: &str) -> anyhow::Result<Vec<ApplicantInput>> {
    if text.trim_start().starts_with('[') {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(text).context("parse applicants json array")?;
        return Ok(values.iter().map(record_from_value).collect());
    }

    let mut inputs = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("parse applicant on line {}", lineno + 1))?;
        inputs.push(record_from_value(&value));
    }
    Ok(inputs)
}

fn record_from_value(value: &serde_json::Value) -> ApplicantInput {
    ApplicantRecord::from_json(value).map_err(|err| format!("invalid applicant: {err}"))
}

pub fn run_batch(store: &RuleStore, inputs: &[ApplicantInput]) -> BatchOutput {
    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let result = match input {
                Ok(record) => evaluate_record(store, record).map_err(|err| format!("{err:#}")),
                Err(err) => Err(err.clone()),
            };
            match result {
                Ok(outcome) => BatchEntry {
                    index,
                    outcome: Some(outcome),
                    error: None,
                },
                Err(error) => {
                    tracing::warn!(index, error = %error, "applicant evaluation failed");
                    BatchEntry {
                        index,
                        outcome: None,
                        error: Some(error),
                    }
                }
            }
        })
        .collect();

    BatchOutput {
        rules_digest: store.fingerprint(),
        counts: DecisionCounts::from_entries(&entries),
        entries,
    }
}

fn evaluate_record(store: &RuleStore, record: &ApplicantRecord) -> anyhow::Result<Outcome> {
    validate_record(record).context("invalid applicant")?;
    let outcome = bursar_domain::evaluate(store, record)?;
    Ok(outcome)
}
