use crate::{RenderableDecision, RenderableOutcome};

/// Plain-text rendering of one outcome. Rule name and reason are shown verbatim.
pub fn render_text(outcome: &RenderableOutcome) -> String {
    let mut out = String::new();
    out.push_str(outcome.decision.label());
    out.push_str("\n\n");

    match (outcome.decision, &outcome.rule) {
        (RenderableDecision::NoDecision, _) | (_, None) => {
            out.push_str(&format!("Reason: {}\n", outcome.reason));
        }
        (_, Some(rule)) => {
            out.push_str(&format!("Rule: {}\n\n", rule));
            out.push_str(&format!("Reason: {}\n", outcome.reason));
        }
    }

    out
}
