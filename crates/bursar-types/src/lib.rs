//! Stable DTOs and IDs used across the bursar workspace.
//!
//! This crate is intentionally boring:
//! - applicant fields and the records that carry them
//! - the decision enum and the outcome triple
//! - stable string IDs and the outcome report envelope
//! - explain registry for decision categories

#![forbid(unsafe_code)]

pub mod applicant;
pub mod decision;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use applicant::{
    Applicant, ApplicantRecord, Field, FieldKind, FieldSource, FieldValue, RecordError,
    UnknownField,
};
pub use decision::{Decision, Outcome, UnknownDecision};
pub use explain::{Explanation, lookup_explanation};
pub use receipt::{OutcomeReport, SCHEMA_OUTCOME_V1, ToolMeta};
