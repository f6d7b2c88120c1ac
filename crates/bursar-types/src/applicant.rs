use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The applicant attributes a rule condition may reference.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Cgpa,
    FamilyIncome,
    CoCurricularScore,
    DisciplinaryActions,
}

/// Numeric shape of a field; decides which thresholds are compatible with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Integer,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Cgpa,
        Field::FamilyIncome,
        Field::CoCurricularScore,
        Field::DisciplinaryActions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Cgpa => "cgpa",
            Field::FamilyIncome => "family_income",
            Field::CoCurricularScore => "co_curricular_score",
            Field::DisciplinaryActions => "disciplinary_actions",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Cgpa | Field::FamilyIncome => FieldKind::Float,
            Field::CoCurricularScore | Field::DisciplinaryActions => FieldKind::Integer,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0} (expected cgpa|family_income|co_curricular_score|disciplinary_actions)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field's value as seen by condition evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Integer(v) => v as f64,
            FieldValue::Float(v) => v,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Anything the evaluator can read applicant fields from.
///
/// `None` means the field is absent. That is a caller contract violation, never a
/// false condition.
pub trait FieldSource {
    fn field_value(&self, field: Field) -> Option<FieldValue>;
}

/// A fully populated applicant, as collected by a form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Applicant {
    /// Cumulative GPA, 0.0 to 4.0.
    pub cgpa: f64,
    /// Monthly family income.
    pub family_income: f64,
    /// Co-curricular score, 0 to 100.
    pub co_curricular_score: u32,
    /// Number of disciplinary actions, 0 to 10.
    pub disciplinary_actions: u32,
}

impl FieldSource for Applicant {
    fn field_value(&self, field: Field) -> Option<FieldValue> {
        Some(match field {
            Field::Cgpa => FieldValue::Float(self.cgpa),
            Field::FamilyIncome => FieldValue::Float(self.family_income),
            Field::CoCurricularScore => FieldValue::Integer(i64::from(self.co_curricular_score)),
            Field::DisciplinaryActions => {
                FieldValue::Integer(i64::from(self.disciplinary_actions))
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("applicant record must be a JSON object")]
    NotAnObject,
    #[error("field '{field}' must be {expected}, got {found}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
        found: String,
    },
}

/// A loosely-typed applicant where any field may be missing.
///
/// Built from raw input such as a JSON object; unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantRecord {
    values: BTreeMap<Field, FieldValue>,
}

impl ApplicantRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: FieldValue) -> Self {
        self.values.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: Field) -> Option<FieldValue> {
        self.values.get(&field).copied()
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.values.contains_key(f))
            .collect()
    }

    pub fn from_json(value: &JsonValue) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;
        let mut record = ApplicantRecord::new();

        for field in Field::ALL {
            let Some(raw) = obj.get(field.as_str()) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }
            let parsed = match field.kind() {
                FieldKind::Integer => raw.as_i64().map(FieldValue::Integer),
                FieldKind::Float => raw.as_f64().map(FieldValue::Float),
            };
            let parsed = parsed.ok_or_else(|| RecordError::TypeMismatch {
                field,
                expected: match field.kind() {
                    FieldKind::Integer => "an integer",
                    FieldKind::Float => "a number",
                },
                found: raw.to_string(),
            })?;
            record.insert(field, parsed);
        }

        Ok(record)
    }
}

impl From<&Applicant> for ApplicantRecord {
    fn from(applicant: &Applicant) -> Self {
        let mut record = ApplicantRecord::new();
        for field in Field::ALL {
            if let Some(v) = applicant.field_value(field) {
                record.insert(field, v);
            }
        }
        record
    }
}

impl FieldSource for ApplicantRecord {
    fn field_value(&self, field: Field) -> Option<FieldValue> {
        self.get(field)
    }
}
