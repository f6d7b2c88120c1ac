use crate::model::{CmpOp, Condition, Rule, Threshold};
use bursar_types::{Applicant, Decision, Field};

pub fn applicant(
    cgpa: f64,
    family_income: f64,
    co_curricular_score: u32,
    disciplinary_actions: u32,
) -> Applicant {
    Applicant {
        cgpa,
        family_income,
        co_curricular_score,
        disciplinary_actions,
    }
}

pub fn cond(field: Field, op: CmpOp, threshold: Threshold) -> Condition {
    Condition::new(field, op, threshold)
}

pub fn rule(name: &str, priority: i64, conditions: Vec<Condition>, decision: Decision) -> Rule {
    Rule::new(
        name,
        priority,
        conditions,
        decision,
        format!("reason for {name}"),
    )
}
