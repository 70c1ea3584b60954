use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::assessment_type::AssessmentType;
use super::vitals::VitalsInput;

/// One completed assessment. Immutable once created; owned by the
/// submitting user's history collection.
///
/// The vitals are flattened into the serialized document, so a stored
/// record reads as one flat object: the input fields alongside the
/// prediction outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub assessment_type: AssessmentType,
    #[serde(flatten)]
    pub vitals: VitalsInput,
    /// Free-text label returned by the prediction service, verbatim.
    pub prediction: String,
    pub is_risky: bool,
    pub risk_score: u8,
    pub advisory: String,
    /// Wall-clock instant of assembly, serialized as ISO-8601. Decoding is
    /// lenient: a missing or unparsable value becomes `None`, so a foreign
    /// or legacy document cannot break the read path.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub recorded_at: Option<jiff::Timestamp>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<jiff::Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    })
}
