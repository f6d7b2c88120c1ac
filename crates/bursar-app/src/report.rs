use anyhow::Context;
use bursar_render::{RenderableDecision, RenderableOutcome};
use bursar_types::{Decision, Outcome, OutcomeReport, SCHEMA_OUTCOME_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<OutcomeReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_OUTCOME_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    let report: OutcomeReport =
        serde_json::from_value(value).context("parse bursar outcome report")?;
    Ok(report)
}

pub fn serialize_report(report: &OutcomeReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize outcome report")
}

pub(crate) fn decision_to_renderable(decision: Decision) -> RenderableDecision {
    match decision {
        Decision::AwardFull => RenderableDecision::AwardFull,
        Decision::AwardPartial => RenderableDecision::AwardPartial,
        Decision::Review => RenderableDecision::Review,
        Decision::Reject => RenderableDecision::Reject,
        Decision::NoDecision => RenderableDecision::NoDecision,
    }
}

pub fn outcome_to_renderable(outcome: &Outcome) -> RenderableOutcome {
    RenderableOutcome {
        decision: decision_to_renderable(outcome.decision),
        rule: outcome.rule.clone(),
        reason: outcome.reason.clone(),
    }
}

pub fn to_renderable(report: &OutcomeReport) -> RenderableOutcome {
    outcome_to_renderable(&report.outcome)
}
