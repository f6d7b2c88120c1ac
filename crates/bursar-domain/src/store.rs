use crate::catalog;
use crate::error::ConfigError;
use crate::model::{Rule, Threshold};
use bursar_types::{Decision, FieldKind};
use sha2::{Digest, Sha256};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// The immutable, validated rule catalog.
///
/// Evaluation order (priority descending, ties in catalog order) is fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
    order: Vec<usize>,
}

impl RuleStore {
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        for (index, rule) in rules.iter().enumerate() {
            validate_rule(index, rule)?;
        }

        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                tracing::warn!(rule = %rule.name, "duplicate rule name; lookup by name returns the first");
            }
        }

        let mut order: Vec<usize> = (0..rules.len()).collect();
        // Stable: equal priorities keep catalog order.
        order.sort_by_key(|&i| Reverse(rules[i].priority));

        tracing::debug!(rules = rules.len(), "rule store built");
        Ok(Self { rules, order })
    }

    /// The built-in reference catalog.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::new(catalog::reference_rules())
    }

    /// Rules in catalog order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules in evaluation order.
    pub fn by_priority(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.order.iter().map(move |&i| &self.rules[i])
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Stable SHA-256 digest of the catalog contents, in catalog order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for rule in &self.rules {
            hasher.update(canonical_rule(rule).as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

fn validate_rule(index: usize, rule: &Rule) -> Result<(), ConfigError> {
    if rule.name.trim().is_empty() {
        return Err(ConfigError::EmptyName { index });
    }
    if rule.action.decision == Decision::NoDecision {
        return Err(ConfigError::NoDecisionAction {
            rule: rule.name.clone(),
        });
    }

    for (index, cond) in rule.conditions.iter().enumerate() {
        match (cond.field.kind(), cond.threshold) {
            (_, Threshold::Float(v)) if !v.is_finite() => {
                return Err(ConfigError::NonFiniteThreshold {
                    rule: rule.name.clone(),
                    index,
                    field: cond.field,
                });
            }
            (FieldKind::Integer, Threshold::Float(_)) => {
                return Err(ConfigError::IncompatibleThreshold {
                    rule: rule.name.clone(),
                    index,
                    field: cond.field,
                    threshold: cond.threshold.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn canonical_rule(rule: &Rule) -> String {
    let conditions = rule
        .conditions
        .iter()
        .map(|c| {
            let threshold = match c.threshold {
                Threshold::Integer(v) => format!("i:{v}"),
                Threshold::Float(v) => format!("f:{v:?}"),
            };
            format!("{}{}{}", c.field, c.op, threshold)
        })
        .collect::<Vec<_>>()
        .join(";");

    let priority = rule.priority.to_string();
    [
        rule.name.as_str(),
        priority.as_str(),
        conditions.as_str(),
        rule.action.decision.as_str(),
        rule.action.reason.as_str(),
    ]
    .join("|")
}
