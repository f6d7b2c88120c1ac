use bursar_domain::{Rule, catalog};
use bursar_types::ids::{PRESET_EMPTY, PRESET_REFERENCE};

/// Built-in catalogs a rule file can start from.
pub fn preset(name: &str) -> anyhow::Result<Vec<Rule>> {
    match name {
        PRESET_REFERENCE => Ok(catalog::reference_rules()),
        PRESET_EMPTY => Ok(Vec::new()),
        other => anyhow::bail!(
            "unknown preset: {other} (expected {})",
            preset_names().join("|")
        ),
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &[PRESET_REFERENCE, PRESET_EMPTY]
}
