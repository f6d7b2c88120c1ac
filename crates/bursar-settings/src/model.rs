use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `bursar.toml` rule catalog schema v1.
///
/// This is a *user-facing* model: fields, operators, and decisions stay strings here and are
/// validated during resolution so errors can name the offending rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleCatalogV1 {
    /// Optional schema string for tooling (`bursar.rules.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Built-in catalog the file's rules are appended to: `reference` (default) or `empty`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    /// Map of rule name -> override, applied to preset and file rules alike.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, RuleOverride>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    pub name: String,
    pub priority: i64,
    /// `[field, operator, value]` triples, all of which must hold.
    #[serde(default)]
    pub conditions: Vec<ConditionConfig>,
    pub action: ActionConfig,
}

/// `["cgpa", ">=", 3.7]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConditionConfig(pub String, pub String, pub ThresholdLiteral);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ThresholdLiteral {
    Integer(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActionConfig {
    /// `AWARD_FULL`, `AWARD_PARTIAL`, `REVIEW`, or `REJECT`.
    pub decision: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}
