//! The rule-loading use case: parse a catalog, resolve it, and build the store once.

use anyhow::Context;
use bursar_domain::{Rule, RuleStore};
use bursar_render::RenderableRule;
use bursar_settings::{CatalogFormat, Overrides, RuleCatalogV1};

use crate::report::decision_to_renderable;

/// Input for the rule-loading use case.
#[derive(Clone, Debug)]
pub struct RulesInput<'a> {
    /// Catalog file contents, if a catalog file was found.
    pub catalog_text: Option<&'a str>,
    pub format: CatalogFormat,
    /// CLI overrides.
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct LoadedRules {
    pub preset: String,
    pub store: RuleStore,
    pub digest: String,
}

/// Build the rule store. Any error here is fatal: no evaluation may run without a valid store.
pub fn load_rules(input: RulesInput<'_>) -> anyhow::Result<LoadedRules> {
    let cfg = match input.catalog_text {
        Some(text) if !text.trim().is_empty() => {
            bursar_settings::parse_catalog(text, input.format).context("parse rule catalog")?
        }
        _ => RuleCatalogV1::default(),
    };

    let resolved =
        bursar_settings::resolve_catalog(cfg, input.overrides).context("resolve rule catalog")?;
    let digest = resolved.store.fingerprint();

    tracing::info!(
        preset = %resolved.preset,
        rules = resolved.store.len(),
        digest = %digest,
        "rule catalog loaded"
    );

    Ok(LoadedRules {
        preset: resolved.preset,
        store: resolved.store,
        digest,
    })
}

pub fn rule_to_renderable(rule: &Rule) -> RenderableRule {
    RenderableRule {
        name: rule.name.clone(),
        priority: rule.priority,
        conditions: rule.conditions.iter().map(|c| c.to_string()).collect(),
        decision: decision_to_renderable(rule.action.decision),
        reason: rule.action.reason.clone(),
    }
}

/// All rules in evaluation order.
pub fn list_rules(store: &RuleStore) -> Vec<RenderableRule> {
    store.by_priority().map(rule_to_renderable).collect()
}

pub fn find_rule(store: &RuleStore, name: &str) -> Option<RenderableRule> {
    store.get(name).map(rule_to_renderable)
}
