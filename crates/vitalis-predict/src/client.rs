use std::time::Duration;

use tracing::info;

use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::vitals::VitalsInput;

use crate::error::PredictError;
use crate::extract;
use crate::payload::predict_payload;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the prediction model service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Build a client for the service at `base_url` with the default
    /// request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PredictError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PredictError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request a prediction label for a submission.
    ///
    /// Any failure here means the engine is never invoked for this
    /// submission: the caller surfaces an "unable to connect" outcome,
    /// and no record is created. Retries, if any, belong to the caller's
    /// infrastructure, not this client.
    pub async fn predict(
        &self,
        assessment_type: AssessmentType,
        vitals: &VitalsInput,
    ) -> Result<String, PredictError> {
        let url = format!("{}/predict", self.base_url);
        let body = predict_payload(assessment_type, vitals);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PredictError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PredictError::ResponseParse(e.to_string()))?;
        let label = extract::prediction_label(&bytes)?;

        info!(%assessment_type, label = %label, "prediction received");

        Ok(label)
    }
}
