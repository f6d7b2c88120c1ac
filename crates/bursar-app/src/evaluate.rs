//! The evaluate use case: validate the form input, run the evaluator, wrap the outcome.

use anyhow::Context;
use bursar_domain::RuleStore;
use bursar_types::{
    Applicant, ApplicantRecord, Field, FieldValue, OutcomeReport, SCHEMA_OUTCOME_V1, ToolMeta, ids,
};
use time::OffsetDateTime;

const CGPA_MAX: f64 = 4.0;
const CO_CURRICULAR_MAX: i64 = 100;
const DISCIPLINARY_MAX: i64 = 10;

/// Form contract: every field within its stated domain.
pub fn validate_applicant(applicant: &Applicant) -> anyhow::Result<()> {
    validate_record(&ApplicantRecord::from(applicant))
}

/// Range checks for the fields a record carries. Absent fields are left to the evaluator.
pub fn validate_record(record: &ApplicantRecord) -> anyhow::Result<()> {
    for field in Field::ALL {
        let Some(value) = record.get(field) else {
            continue;
        };
        check_range(field, value)?;
    }
    Ok(())
}

fn check_range(field: Field, value: FieldValue) -> anyhow::Result<()> {
    let ok = match (field, value) {
        (Field::Cgpa, v) => v.as_f64().is_finite() && (0.0..=CGPA_MAX).contains(&v.as_f64()),
        (Field::FamilyIncome, v) => v.as_f64().is_finite() && v.as_f64() >= 0.0,
        (Field::CoCurricularScore, FieldValue::Integer(v)) => (0..=CO_CURRICULAR_MAX).contains(&v),
        (Field::DisciplinaryActions, FieldValue::Integer(v)) => (0..=DISCIPLINARY_MAX).contains(&v),
        (_, FieldValue::Float(_)) => false,
    };
    if !ok {
        anyhow::bail!("{field} out of range: {value} (expected {})", domain(field));
    }
    Ok(())
}

fn domain(field: Field) -> &'static str {
    match field {
        Field::Cgpa => "0.0 to 4.0",
        Field::FamilyIncome => "a non-negative amount",
        Field::CoCurricularScore => "an integer 0 to 100",
        Field::DisciplinaryActions => "an integer 0 to 10",
    }
}

/// Evaluate one applicant against the loaded store.
pub fn run_evaluate(store: &RuleStore, applicant: &Applicant) -> anyhow::Result<OutcomeReport> {
    validate_applicant(applicant).context("invalid applicant")?;

    let outcome = bursar_domain::evaluate(store, applicant).context("evaluate applicant")?;

    Ok(OutcomeReport {
        schema: SCHEMA_OUTCOME_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        evaluated_at: OffsetDateTime::now_utc(),
        rules_digest: store.fingerprint(),
        applicant: applicant.clone(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursar_types::Decision;

    fn applicant(cgpa: f64, income: f64, co: u32, disc: u32) -> Applicant {
        Applicant {
            cgpa,
            family_income: income,
            co_curricular_score: co,
            disciplinary_actions: disc,
        }
    }

    #[test]
    fn reference_scenarios() {
        let store = RuleStore::reference().unwrap();
        let cases = [
            (applicant(3.8, 5000.0, 85, 0), Some("Top merit candidate"), Decision::AwardFull),
            (
                applicant(3.4, 10000.0, 65, 1),
                Some("Good candidate - partial scholarship"),
                Decision::AwardPartial,
            ),
            (applicant(2.0, 2000.0, 0, 0), Some("Low CGPA – not eligible"), Decision::Reject),
            (applicant(3.0, 3000.0, 10, 3), Some("Serious disciplinary record"), Decision::Reject),
            (applicant(2.7, 3500.0, 0, 0), Some("Need-based review"), Decision::Review),
            (applicant(3.0, 20000.0, 10, 0), None, Decision::NoDecision),
        ];

        for (a, rule, decision) in cases {
            let report = run_evaluate(&store, &a).unwrap();
            assert_eq!(report.outcome.rule.as_deref(), rule, "{a:?}");
            assert_eq!(report.outcome.decision, decision, "{a:?}");
            assert_eq!(report.schema, "bursar.outcome.v1");
            assert_eq!(report.rules_digest, store.fingerprint());
        }
    }

    #[test]
    fn out_of_range_input_is_rejected_before_evaluation() {
        let store = RuleStore::reference().unwrap();
        for a in [
            applicant(4.01, 0.0, 0, 0),
            applicant(-0.1, 0.0, 0, 0),
            applicant(f64::NAN, 0.0, 0, 0),
            applicant(3.0, -50.0, 0, 0),
            applicant(3.0, f64::INFINITY, 0, 0),
            applicant(3.0, 0.0, 101, 0),
            applicant(3.0, 0.0, 0, 11),
        ] {
            let err = run_evaluate(&store, &a).unwrap_err();
            assert!(format!("{err:#}").contains("out of range"), "{a:?}");
        }
    }

    #[test]
    fn domain_boundaries_are_accepted() {
        assert!(validate_applicant(&applicant(0.0, 0.0, 0, 0)).is_ok());
        assert!(validate_applicant(&applicant(4.0, 1_000_000.0, 100, 10)).is_ok());
    }

    #[test]
    fn record_validation_skips_absent_fields() {
        let record = ApplicantRecord::new().with(Field::DisciplinaryActions, FieldValue::Integer(-1));
        let err = validate_record(&record).unwrap_err();
        assert!(err.to_string().contains("disciplinary_actions out of range: -1"));
        assert!(validate_record(&ApplicantRecord::new()).is_ok());
    }
}
