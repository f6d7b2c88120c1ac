//! Pure rule evaluation (no IO).
//!
//! Input: an immutable rule store and an applicant.
//! Output: the winning rule's decision and reason, or the no-decision fallback.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod store;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use error::{ConfigError, EvalError};
pub use model::{Action, CmpOp, Condition, Rule, Threshold, UnknownOperator};
pub use store::RuleStore;
