//! Rendering for decision outcomes and rule catalogs.
//!
//! This is the only place user-facing labels live; the evaluator never formats anything.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::{render_markdown, render_rules_markdown};
pub use model::{RenderableDecision, RenderableOutcome, RenderableRule, Tone};
pub use text::render_text;
