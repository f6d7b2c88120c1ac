//! Render use cases over in-memory outcomes and stores.

use bursar_domain::RuleStore;
use bursar_render::RenderableOutcome;

use crate::rules::list_rules;

pub fn render_text(outcome: &RenderableOutcome) -> String {
    bursar_render::render_text(outcome)
}

pub fn render_markdown(outcome: &RenderableOutcome) -> String {
    bursar_render::render_markdown(outcome)
}

pub fn render_rules(store: &RuleStore) -> String {
    bursar_render::render_rules_markdown(&list_rules(store))
}
