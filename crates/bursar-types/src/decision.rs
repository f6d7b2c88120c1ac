use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decision categories. `NoDecision` is the evaluator's fallback and never a rule action.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    AwardFull,
    AwardPartial,
    Review,
    Reject,
    NoDecision,
}

impl Decision {
    pub const ALL: [Decision; 5] = [
        Decision::AwardFull,
        Decision::AwardPartial,
        Decision::Review,
        Decision::Reject,
        Decision::NoDecision,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::AwardFull => "AWARD_FULL",
            Decision::AwardPartial => "AWARD_PARTIAL",
            Decision::Review => "REVIEW",
            Decision::Reject => "REJECT",
            Decision::NoDecision => "NO_DECISION",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown decision: {0} (expected AWARD_FULL|AWARD_PARTIAL|REVIEW|REJECT|NO_DECISION)")]
pub struct UnknownDecision(pub String);

impl FromStr for Decision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decision::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDecision(s.to_string()))
    }
}

/// Result of one evaluation: the winning rule (if any), its decision and reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Outcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub decision: Decision,
    pub reason: String,
}

impl Outcome {
    pub fn matched(rule: &str, decision: Decision, reason: &str) -> Self {
        Self {
            rule: Some(rule.to_string()),
            decision,
            reason: reason.to_string(),
        }
    }

    pub fn no_decision() -> Self {
        Self {
            rule: None,
            decision: Decision::NoDecision,
            reason: ids::NO_MATCH_REASON.to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.rule.is_some()
    }
}
