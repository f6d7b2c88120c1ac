#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableDecision {
    AwardFull,
    AwardPartial,
    Review,
    Reject,
    NoDecision,
}

/// Presentation style of a decision message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
    Neutral,
}

impl RenderableDecision {
    pub fn label(self) -> &'static str {
        match self {
            RenderableDecision::AwardFull => "FULL SCHOLARSHIP AWARDED",
            RenderableDecision::AwardPartial => "PARTIAL SCHOLARSHIP AWARDED",
            RenderableDecision::Review => "REVIEW REQUIRED",
            RenderableDecision::Reject => "APPLICATION REJECTED",
            RenderableDecision::NoDecision => "No rule matched the applicant's profile.",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RenderableDecision::AwardFull => Tone::Success,
            RenderableDecision::AwardPartial => Tone::Info,
            RenderableDecision::Review => Tone::Warning,
            RenderableDecision::Reject => Tone::Error,
            RenderableDecision::NoDecision => Tone::Neutral,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            RenderableDecision::AwardFull => "AWARD_FULL",
            RenderableDecision::AwardPartial => "AWARD_PARTIAL",
            RenderableDecision::Review => "REVIEW",
            RenderableDecision::Reject => "REJECT",
            RenderableDecision::NoDecision => "NO_DECISION",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableOutcome {
    pub decision: RenderableDecision,
    pub rule: Option<String>,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRule {
    pub name: String,
    pub priority: i64,
    /// Human-readable conditions, e.g. `cgpa >= 3.7`.
    pub conditions: Vec<String>,
    pub decision: RenderableDecision,
    pub reason: String,
}
