//! The reference scholarship catalog.

use crate::model::{CmpOp, Condition, Rule, Threshold};
use bursar_types::{Decision, Field};

pub const TOP_MERIT: &str = "Top merit candidate";
pub const GOOD_CANDIDATE: &str = "Good candidate - partial scholarship";
pub const NEED_BASED_REVIEW: &str = "Need-based review";
pub const LOW_CGPA: &str = "Low CGPA – not eligible";
pub const SERIOUS_DISCIPLINARY: &str = "Serious disciplinary record";

fn c(field: Field, op: CmpOp, threshold: Threshold) -> Condition {
    Condition::new(field, op, threshold)
}

/// The five reference rules, in catalog order (not evaluation order).
pub fn reference_rules() -> Vec<Rule> {
    use CmpOp::*;
    use Field::*;
    use Threshold::{Float as F, Integer as I};

    vec![
        Rule::new(
            TOP_MERIT,
            100,
            vec![
                c(Cgpa, Ge, F(3.7)),
                c(CoCurricularScore, Ge, I(80)),
                c(FamilyIncome, Le, I(8000)),
                c(DisciplinaryActions, Eq, I(0)),
            ],
            Decision::AwardFull,
            "Excellent academic & co-curricular performance, with acceptable need",
        ),
        Rule::new(
            GOOD_CANDIDATE,
            80,
            vec![
                c(Cgpa, Ge, F(3.3)),
                c(CoCurricularScore, Ge, I(60)),
                c(FamilyIncome, Le, I(12000)),
                c(DisciplinaryActions, Le, I(1)),
            ],
            Decision::AwardPartial,
            "Good academic & involvement record with moderate need",
        ),
        Rule::new(
            NEED_BASED_REVIEW,
            70,
            vec![c(Cgpa, Ge, F(2.5)), c(FamilyIncome, Le, I(4000))],
            Decision::Review,
            "High need but borderline academic score",
        ),
        Rule::new(
            LOW_CGPA,
            95,
            vec![c(Cgpa, Lt, F(2.5))],
            Decision::Reject,
            "CGPA below minimum scholarship requirement",
        ),
        Rule::new(
            SERIOUS_DISCIPLINARY,
            90,
            vec![c(DisciplinaryActions, Ge, I(2))],
            Decision::Reject,
            "Too many disciplinary records",
        ),
    ]
}
