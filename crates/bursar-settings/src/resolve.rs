use crate::model::{ConditionConfig, RuleCatalogV1, RuleConfig, ThresholdLiteral};
use crate::presets;
use anyhow::Context;
use bursar_domain::{CmpOp, Condition, Rule, RuleStore, Threshold};
use bursar_types::ids::{PRESET_REFERENCE, SCHEMA_RULES_V1};
use bursar_types::{Decision, Field};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedCatalog {
    pub preset: String,
    pub store: RuleStore,
}

pub fn resolve_catalog(
    cfg: RuleCatalogV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedCatalog> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_RULES_V1
    {
        anyhow::bail!("unsupported catalog schema: {schema} (expected {SCHEMA_RULES_V1})");
    }

    let preset_name = overrides
        .preset
        .or(cfg.preset)
        .unwrap_or_else(|| PRESET_REFERENCE.to_string());

    let mut rules = presets::preset(&preset_name)?;

    for (i, rc) in cfg.rules.iter().enumerate() {
        let rule = parse_rule(rc).with_context(|| format!("rule #{i} '{}'", rc.name))?;
        rules.push(rule);
    }

    // per-rule overrides
    for (name, ov) in &cfg.overrides {
        if !rules.iter().any(|r| &r.name == name) {
            anyhow::bail!("override targets unknown rule: {name}");
        }
        if let Some(priority) = ov.priority {
            for rule in rules.iter_mut().filter(|r| &r.name == name) {
                rule.priority = priority;
            }
        }
        if ov.enabled == Some(false) {
            tracing::debug!(rule = %name, "rule disabled by override");
            rules.retain(|r| &r.name != name);
        }
    }

    let store = RuleStore::new(rules).context("invalid rule catalog")?;

    Ok(ResolvedCatalog {
        preset: preset_name,
        store,
    })
}

fn parse_rule(rc: &RuleConfig) -> anyhow::Result<Rule> {
    let conditions = rc
        .conditions
        .iter()
        .enumerate()
        .map(|(i, cc)| parse_condition(cc).with_context(|| format!("condition #{i}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let decision: Decision = rc.action.decision.parse()?;

    Ok(Rule::new(
        rc.name.clone(),
        rc.priority,
        conditions,
        decision,
        rc.action.reason.clone(),
    ))
}

fn parse_condition(cc: &ConditionConfig) -> anyhow::Result<Condition> {
    let ConditionConfig(field, op, value) = cc;
    let field: Field = field.parse()?;
    let op: CmpOp = op.parse()?;
    let threshold = match *value {
        ThresholdLiteral::Integer(v) => Threshold::Integer(v),
        ThresholdLiteral::Float(v) => Threshold::Float(v),
    };
    Ok(Condition::new(field, op, threshold))
}
