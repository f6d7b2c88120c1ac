use crate::error::EvalError;
use crate::model::Rule;
use crate::store::RuleStore;
use bursar_types::{FieldSource, Outcome};

/// First match in priority order wins; no match yields the `NO_DECISION` outcome.
pub fn evaluate<S>(store: &RuleStore, applicant: &S) -> Result<Outcome, EvalError>
where
    S: FieldSource + ?Sized,
{
    for rule in store.by_priority() {
        if rule_matches(rule, applicant)? {
            tracing::debug!(
                rule = %rule.name,
                priority = rule.priority,
                decision = %rule.action.decision,
                "rule matched"
            );
            return Ok(Outcome::matched(
                &rule.name,
                rule.action.decision,
                &rule.action.reason,
            ));
        }
    }

    tracing::debug!(rules = store.len(), "no rule matched");
    Ok(Outcome::no_decision())
}

fn rule_matches<S>(rule: &Rule, applicant: &S) -> Result<bool, EvalError>
where
    S: FieldSource + ?Sized,
{
    for cond in &rule.conditions {
        let value = applicant
            .field_value(cond.field)
            .ok_or_else(|| EvalError::MissingField {
                rule: rule.name.clone(),
                field: cond.field,
            })?;
        if !cond.holds(value) {
            return Ok(false);
        }
    }
    Ok(true)
}
