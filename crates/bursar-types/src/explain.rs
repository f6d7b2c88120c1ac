//! Explain registry for decision categories.

use crate::Decision;

#[derive(Debug, Clone)]
pub struct Explanation {
    pub decision: Decision,
    /// Short label.
    pub title: &'static str,
    /// What the decision means for the applicant.
    pub description: &'static str,
    /// What happens next.
    pub next_steps: &'static str,
}

/// Look up an explanation by decision name (`AWARD_FULL`, ...), case-insensitively.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let decision = identifier.trim().to_ascii_uppercase().parse().ok()?;
    Some(explain(decision))
}

pub fn explain(decision: Decision) -> Explanation {
    match decision {
        Decision::AwardFull => Explanation {
            decision,
            title: "Full scholarship",
            description: "The applicant meets every condition of a rule that grants full funding.",
            next_steps: "Issue the award letter.",
        },
        Decision::AwardPartial => Explanation {
            decision,
            title: "Partial scholarship",
            description: "The applicant qualifies for reduced funding under a partial-award rule.",
            next_steps: "Issue the partial award letter with the funded amount.",
        },
        Decision::Review => Explanation {
            decision,
            title: "Manual review",
            description: "A rule flagged the application for a human decision.",
            next_steps: "Route the application to the scholarship committee.",
        },
        Decision::Reject => Explanation {
            decision,
            title: "Rejected",
            description: "A rule with a disqualifying condition matched the applicant.",
            next_steps: "Send the rejection notice quoting the rule's reason.",
        },
        Decision::NoDecision => Explanation {
            decision,
            title: "No decision",
            description: "No rule in the catalog matched the applicant.",
            next_steps: "Review the catalog for gaps or decide the case manually.",
        },
    }
}
