//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Determinism and idempotence of evaluation
//! - Highest-priority, first-in-catalog winner selection
//! - Conjunctive matching and short-circuiting

use crate::engine::evaluate;
use crate::model::{CmpOp, Condition, Rule, Threshold};
use crate::store::RuleStore;
use bursar_types::{
    Applicant, ApplicantRecord, Decision, Field, FieldKind, FieldSource, FieldValue, Outcome,
};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Applicants on the same grid the form uses (cgpa in 0.01 steps, income in 50s).
fn arb_applicant() -> impl Strategy<Value = Applicant> {
    (0u32..=400, 0u32..=400, 0u32..=100, 0u32..=10).prop_map(|(cgpa, income, co, disc)| {
        Applicant {
            cgpa: f64::from(cgpa) / 100.0,
            family_income: f64::from(income) * 50.0,
            co_curricular_score: co,
            disciplinary_actions: disc,
        }
    })
}

fn arb_field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

fn arb_op() -> impl Strategy<Value = CmpOp> {
    prop::sample::select(CmpOp::ALL.to_vec())
}

/// Thresholds compatible with the field and drawn from its realistic range.
fn arb_threshold(field: Field) -> BoxedStrategy<Threshold> {
    match field {
        Field::Cgpa => (0u32..=400)
            .prop_map(|c| Threshold::Float(f64::from(c) / 100.0))
            .boxed(),
        Field::FamilyIncome => prop_oneof![
            (0i64..=20_000).prop_map(Threshold::Integer),
            (0u32..=400).prop_map(|x| Threshold::Float(f64::from(x) * 50.0)),
        ]
        .boxed(),
        Field::CoCurricularScore => (0i64..=100).prop_map(Threshold::Integer).boxed(),
        Field::DisciplinaryActions => (0i64..=10).prop_map(Threshold::Integer).boxed(),
    }
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    (arb_field(), arb_op()).prop_flat_map(|(field, op)| {
        arb_threshold(field).prop_map(move |t| Condition::new(field, op, t))
    })
}

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::AwardFull),
        Just(Decision::AwardPartial),
        Just(Decision::Review),
        Just(Decision::Reject),
    ]
}

/// Small priority range so ties are common.
fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(
        (
            -3i64..=3,
            prop::collection::vec(arb_condition(), 0..4),
            arb_decision(),
        ),
        0..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (priority, conditions, decision))| {
                Rule::new(
                    format!("rule-{i}"),
                    priority,
                    conditions,
                    decision,
                    format!("reason {i}"),
                )
            })
            .collect()
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn holds_all(rule: &Rule, applicant: &Applicant) -> bool {
    rule.conditions.iter().all(|c| match applicant.field_value(c.field) {
        Some(v) => c.holds(v),
        None => false,
    })
}

/// Brute-force winner: strictly highest priority among matches, earliest in catalog on ties.
fn expected_winner<'a>(rules: &'a [Rule], applicant: &Applicant) -> Option<&'a Rule> {
    let mut best: Option<&Rule> = None;
    for rule in rules.iter().filter(|r| holds_all(r, applicant)) {
        match best {
            Some(b) if b.priority >= rule.priority => {}
            _ => best = Some(rule),
        }
    }
    best
}

fn threshold_for(value: FieldValue) -> Threshold {
    match value {
        FieldValue::Integer(v) => Threshold::Integer(v),
        FieldValue::Float(v) => Threshold::Float(v),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Repeated evaluation yields identical outcomes and leaves the store untouched.
    #[test]
    fn evaluation_is_deterministic_and_idempotent(
        rules in arb_rules(),
        applicant in arb_applicant(),
    ) {
        let store = RuleStore::new(rules).unwrap();
        let digest = store.fingerprint();

        let first = evaluate(&store, &applicant).unwrap();
        let second = evaluate(&store, &applicant).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(store.fingerprint(), digest);
    }

    /// The winner is the highest-priority match, ties broken by catalog order.
    #[test]
    fn winner_matches_brute_force_oracle(
        rules in arb_rules(),
        applicant in arb_applicant(),
    ) {
        let store = RuleStore::new(rules.clone()).unwrap();
        let outcome = evaluate(&store, &applicant).unwrap();

        match expected_winner(&rules, &applicant) {
            Some(rule) => {
                prop_assert_eq!(outcome.rule.as_deref(), Some(rule.name.as_str()));
                prop_assert_eq!(outcome.decision, rule.action.decision);
                prop_assert_eq!(&outcome.reason, &rule.action.reason);
            }
            None => {
                prop_assert_eq!(outcome, Outcome::no_decision());
            }
        }
    }

    /// A rule whose conditions all hold matches; falsifying any one of them breaks the match.
    #[test]
    fn matching_is_conjunctive(
        applicant in arb_applicant(),
        fields in prop::collection::vec(arb_field(), 1..5),
        flip in any::<prop::sample::Index>(),
    ) {
        let holding: Vec<Condition> = fields
            .iter()
            .map(|&f| {
                let v = applicant.field_value(f).unwrap();
                Condition::new(f, CmpOp::Ge, threshold_for(v))
            })
            .collect();

        let store = RuleStore::new(vec![Rule::new("all", 1, holding.clone(), Decision::Review, "r")])
            .unwrap();
        let won = evaluate(&store, &applicant).unwrap();
        prop_assert_eq!(won.rule.as_deref(), Some("all"));

        let mut broken = holding;
        let i = flip.index(broken.len());
        broken[i].op = CmpOp::Lt;
        let store = RuleStore::new(vec![Rule::new("all", 1, broken, Decision::Review, "r")])
            .unwrap();
        prop_assert_eq!(evaluate(&store, &applicant).unwrap(), Outcome::no_decision());
    }

    /// Conditions after the first failing one are never read.
    #[test]
    fn failing_condition_short_circuits(
        applicant in arb_applicant(),
        failing in arb_field(),
        unread in prop::collection::vec(arb_field(), 1..4),
    ) {
        let v = applicant.field_value(failing).unwrap();
        let mut conditions = vec![Condition::new(failing, CmpOp::Lt, threshold_for(v))];
        for f in &unread {
            let t = match f.kind() {
                FieldKind::Integer => Threshold::Integer(0),
                FieldKind::Float => Threshold::Float(0.0),
            };
            conditions.push(Condition::new(*f, CmpOp::Ge, t));
        }

        // The record only carries the failing field; reading any other would error.
        let record = ApplicantRecord::new().with(failing, v);
        let store = RuleStore::new(vec![Rule::new("short", 1, conditions, Decision::Reject, "r")])
            .unwrap();
        prop_assert_eq!(evaluate(&store, &record), Ok(Outcome::no_decision()));
    }

    /// Records and typed applicants with the same values evaluate identically.
    #[test]
    fn record_and_applicant_agree(
        rules in arb_rules(),
        applicant in arb_applicant(),
    ) {
        let store = RuleStore::new(rules).unwrap();
        let record = ApplicantRecord::from(&applicant);
        prop_assert_eq!(evaluate(&store, &record), evaluate(&store, &applicant));
    }

    /// Stable ordering: the evaluation order is sorted by priority and stable on ties.
    #[test]
    fn evaluation_order_is_stable_sort(rules in arb_rules()) {
        let store = RuleStore::new(rules.clone()).unwrap();
        let ordered: Vec<&Rule> = store.by_priority().collect();

        let mut expected: Vec<&Rule> = rules.iter().collect();
        expected.sort_by(|a, b| b.priority.cmp(&a.priority));

        let names = |rs: &[&Rule]| rs.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        prop_assert_eq!(names(&ordered), names(&expected));
    }
}

#[test]
fn no_rules_match_means_no_decision_for_any_applicant() {
    let store = RuleStore::new(Vec::new()).unwrap();
    let record = ApplicantRecord::new();
    assert_eq!(evaluate(&store, &record), Ok(Outcome::no_decision()));
}
