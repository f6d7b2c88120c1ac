use bursar_types::Field;

/// A malformed rule definition. Fatal: a store that fails to build must not serve evaluations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("rule #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("rule '{rule}': NO_DECISION is the evaluator's fallback and cannot be a rule action")]
    NoDecisionAction { rule: String },

    #[error(
        "rule '{rule}': condition #{index} compares integer field '{field}' with non-integer threshold {threshold}"
    )]
    IncompatibleThreshold {
        rule: String,
        index: usize,
        field: Field,
        threshold: String,
    },

    #[error("rule '{rule}': condition #{index} on '{field}' has a non-finite threshold")]
    NonFiniteThreshold {
        rule: String,
        index: usize,
        field: Field,
    },
}

/// Failure of a single evaluation call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("rule '{rule}' reads field '{field}' but the applicant does not provide it")]
    MissingField { rule: String, field: Field },
}
