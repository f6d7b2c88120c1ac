//! Rule catalog parsing and preset/override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves catalogs provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ActionConfig, ConditionConfig, RuleCatalogV1, RuleConfig, RuleOverride, ThresholdLiteral};
pub use presets::{preset, preset_names};
pub use resolve::{Overrides, ResolvedCatalog};

/// Serialization format of a rule catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Guess from a file name; anything not ending in `.json` is TOML.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            CatalogFormat::Json
        } else {
            CatalogFormat::Toml
        }
    }
}

/// Parse `bursar.toml` (or equivalent) into a typed model.
pub fn parse_catalog_toml(input: &str) -> anyhow::Result<RuleCatalogV1> {
    let cfg: RuleCatalogV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse a JSON rule catalog: either a full catalog object or a bare array of rules.
pub fn parse_catalog_json(input: &str) -> anyhow::Result<RuleCatalogV1> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    if value.is_array() {
        let rules: Vec<RuleConfig> = serde_json::from_value(value)?;
        return Ok(RuleCatalogV1 {
            preset: Some(bursar_types::ids::PRESET_EMPTY.to_string()),
            rules,
            ..RuleCatalogV1::default()
        });
    }
    let cfg: RuleCatalogV1 = serde_json::from_value(value)?;
    Ok(cfg)
}

pub fn parse_catalog(input: &str, format: CatalogFormat) -> anyhow::Result<RuleCatalogV1> {
    match format {
        CatalogFormat::Toml => parse_catalog_toml(input),
        CatalogFormat::Json => parse_catalog_json(input),
    }
}

/// Resolve the rule store used by the evaluator (preset + file rules + per-rule overrides).
pub fn resolve_catalog(cfg: RuleCatalogV1, overrides: Overrides) -> anyhow::Result<ResolvedCatalog> {
    resolve::resolve_catalog(cfg, overrides)
}
