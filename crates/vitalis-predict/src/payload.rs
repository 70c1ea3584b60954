//! Request payload construction.

use serde_json::{Map, Value};

use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::vitals::VitalsInput;

/// Key carrying the model selector in the predict request body.
pub const MODEL_TYPE_KEY: &str = "model_type";

/// Build the JSON body for a predict call: the model selector plus the
/// submitted vitals under their canonical field names, values verbatim.
pub fn predict_payload(assessment_type: AssessmentType, vitals: &VitalsInput) -> Value {
    let mut body = Map::new();
    body.insert(
        MODEL_TYPE_KEY.to_string(),
        Value::String(assessment_type.as_str().to_string()),
    );
    for (field, value) in vitals.iter() {
        body.insert(field.clone(), value.clone());
    }
    Value::Object(body)
}
