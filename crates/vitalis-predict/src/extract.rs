//! Response label extraction.

use serde::Deserialize;

use crate::error::PredictError;

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Option<String>,
}

/// Pull the prediction label out of a response body.
///
/// A body that is not JSON fails with `ResponseParse`; a JSON body whose
/// `prediction` field is absent, null, or blank fails with
/// `MissingLabel` — a label-less response is an upstream failure, never
/// a placeholder label.
pub fn prediction_label(body: &[u8]) -> Result<String, PredictError> {
    let parsed: PredictResponse =
        serde_json::from_slice(body).map_err(|e| PredictError::ResponseParse(e.to_string()))?;

    match parsed.prediction {
        Some(label) if !label.trim().is_empty() => Ok(label),
        _ => Err(PredictError::MissingLabel),
    }
}
