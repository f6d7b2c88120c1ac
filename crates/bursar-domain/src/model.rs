use bursar_types::{Decision, Field, FieldValue};
use std::fmt;
use std::str::FromStr;

/// Comparison operators a condition may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
}

impl CmpOp {
    pub const ALL: [CmpOp; 5] = [CmpOp::Ge, CmpOp::Le, CmpOp::Gt, CmpOp::Lt, CmpOp::Eq];

    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Eq => "==",
        }
    }

    /// `lhs <op> rhs` with the type's own comparison semantics (IEEE for floats).
    pub fn apply<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Eq => lhs == rhs,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0} (expected >=|<=|>|<|==)")]
pub struct UnknownOperator(pub String);

impl FromStr for CmpOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CmpOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Literal right-hand side of a condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    Integer(i64),
    Float(f64),
}

impl Threshold {
    pub fn as_f64(self) -> f64 {
        match self {
            Threshold::Integer(v) => v as f64,
            Threshold::Float(v) => v,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Integer(v) => write!(f, "{v}"),
            Threshold::Float(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub field: Field,
    pub op: CmpOp,
    pub threshold: Threshold,
}

impl Condition {
    pub fn new(field: Field, op: CmpOp, threshold: Threshold) -> Self {
        Self {
            field,
            op,
            threshold,
        }
    }

    /// Integer against integer compares exactly; anything involving a float compares as `f64`.
    pub fn holds(&self, value: FieldValue) -> bool {
        match (value, self.threshold) {
            (FieldValue::Integer(lhs), Threshold::Integer(rhs)) => self.op.apply(lhs, rhs),
            (lhs, rhs) => self.op.apply(lhs.as_f64(), rhs.as_f64()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.threshold)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub decision: Decision,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub name: String,
    /// Higher is evaluated earlier.
    pub priority: i64,
    /// AND-combined, checked in order.
    pub conditions: Vec<Condition>,
    pub action: Action,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        priority: i64,
        conditions: Vec<Condition>,
        decision: Decision,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            conditions,
            action: Action {
                decision,
                reason: reason.into(),
            },
        }
    }
}
