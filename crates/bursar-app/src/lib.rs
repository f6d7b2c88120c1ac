//! Use case orchestration for bursar.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It also carries the form contract (field range validation) that the
//! evaluator does not enforce.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod batch;
mod evaluate;
mod render;
mod report;
mod rules;

pub use batch::{
    ApplicantInput, BatchEntry, BatchOutput, DecisionCounts, parse_applicants_json, run_batch,
};
pub use evaluate::{run_evaluate, validate_applicant, validate_record};
pub use render::{render_markdown, render_rules, render_text};
pub use report::{outcome_to_renderable, parse_report_json, serialize_report, to_renderable};
pub use rules::{LoadedRules, RulesInput, find_rule, list_rules, load_rules, rule_to_renderable};
