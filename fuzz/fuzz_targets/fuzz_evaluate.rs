//! Fuzz target for evaluation against the reference catalog.
//!
//! Goal: Any sparse applicant record, including NaN and infinite values, evaluates to
//! an outcome or a missing-field error without panicking.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use bursar_domain::{RuleStore, evaluate};
use bursar_types::{ApplicantRecord, Decision, Field, FieldValue};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    cgpa: Option<f64>,
    family_income: Option<f64>,
    co_curricular_score: Option<i64>,
    disciplinary_actions: Option<i64>,
}

fuzz_target!(|input: FuzzRecord| {
    let Ok(store) = RuleStore::reference() else {
        return;
    };

    let mut record = ApplicantRecord::new();
    if let Some(v) = input.cgpa {
        record.insert(Field::Cgpa, FieldValue::Float(v));
    }
    if let Some(v) = input.family_income {
        record.insert(Field::FamilyIncome, FieldValue::Float(v));
    }
    if let Some(v) = input.co_curricular_score {
        record.insert(Field::CoCurricularScore, FieldValue::Integer(v));
    }
    if let Some(v) = input.disciplinary_actions {
        record.insert(Field::DisciplinaryActions, FieldValue::Integer(v));
    }

    if let Ok(outcome) = evaluate(&store, &record) {
        assert_eq!(outcome.is_match(), outcome.decision != Decision::NoDecision);
    }
});
