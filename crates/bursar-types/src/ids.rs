//! Stable identifiers and fixed literals.

/// Schema tag accepted at the top of a rule catalog file.
pub const SCHEMA_RULES_V1: &str = "bursar.rules.v1";

/// Reason attached to the `NO_DECISION` outcome when no rule matches.
pub const NO_MATCH_REASON: &str = "No rule was triggered.";

// Presets
pub const PRESET_REFERENCE: &str = "reference";
pub const PRESET_EMPTY: &str = "empty";

pub const TOOL_NAME: &str = "bursar";
