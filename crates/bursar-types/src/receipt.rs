use crate::{Applicant, Outcome};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for outcome reports.
pub const SCHEMA_OUTCOME_V1: &str = "bursar.outcome.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// A persisted evaluation: the inputs, the rule set identity, and the outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub evaluated_at: OffsetDateTime,
    /// SHA-256 digest of the rule catalog the outcome was computed against.
    pub rules_digest: String,
    pub applicant: Applicant,
    pub outcome: Outcome,
}
