use crate::{RenderableOutcome, RenderableRule, Tone};

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "[success]",
        Tone::Info => "[info]",
        Tone::Warning => "[warning]",
        Tone::Error => "[error]",
        Tone::Neutral => "[none]",
    }
}

pub fn render_markdown(outcome: &RenderableOutcome) -> String {
    let mut out = String::new();

    out.push_str("# Scholarship evaluation\n\n");
    out.push_str(&format!(
        "- Decision: **{}** `{}` {}\n",
        outcome.decision.label(),
        outcome.decision.code(),
        tone_marker(outcome.decision.tone())
    ));
    if let Some(rule) = &outcome.rule {
        out.push_str(&format!("- Rule: {}\n", rule));
    }
    out.push_str(&format!("- Reason: {}\n", outcome.reason));

    out
}

/// Catalog table in the order the rules are evaluated.
pub fn render_rules_markdown(rules: &[RenderableRule]) -> String {
    let mut out = String::new();

    out.push_str("# Rule catalog\n\n");
    if rules.is_empty() {
        out.push_str("No rules.\n");
        return out;
    }

    out.push_str("| Priority | Rule | Conditions | Decision | Reason |\n");
    out.push_str("|---:|---|---|---|---|\n");
    for r in rules {
        let conditions = if r.conditions.is_empty() {
            "(always)".to_string()
        } else {
            r.conditions
                .iter()
                .map(|c| format!("`{}`", c))
                .collect::<Vec<_>>()
                .join(" AND ")
        };
        out.push_str(&format!(
            "| {} | {} | {} | `{}` | {} |\n",
            r.priority,
            escape_cell(&r.name),
            conditions,
            r.decision.code(),
            escape_cell(&r.reason)
        ));
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
