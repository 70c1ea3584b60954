use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;

/// What kind of value a vitals field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Any finite number.
    Numeric,
    /// One of a fixed set of numeric codes.
    Categorical,
}

/// Requirement for a single vitals field within a profile.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Permitted codes, for categorical fields.
    pub codes: Option<Vec<f64>>,
}

impl FieldSpec {
    pub fn numeric(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Numeric,
            codes: None,
        }
    }

    pub fn categorical(name: &str, codes: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Categorical,
            codes: Some(codes.to_vec()),
        }
    }
}

/// A single field failure found while validating a submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    /// The submitted value, absent when the field was missing entirely.
    pub provided: Option<Value>,
    pub message: String,
}

/// Parse a raw vitals value as a finite number.
///
/// Web forms submit strings, so numeric strings are accepted alongside
/// JSON numbers. Anything else — or a non-finite parse — is rejected.
pub fn numeric_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Validated numeric view of a submission, keyed by canonical field name.
///
/// Produced by [`AssessmentProfile::parse`](crate::AssessmentProfile::parse)
/// after validation guaranteed every required field present and finite;
/// an absent field reads as 0.
#[derive(Debug, Clone, Default)]
pub struct ParsedVitals(BTreeMap<String, f64>);

impl ParsedVitals {
    pub(crate) fn insert(&mut self, field: String, value: f64) {
        self.0.insert(field, value);
    }

    pub fn get(&self, field: &str) -> f64 {
        self.0.get(field).copied().unwrap_or_default()
    }
}
