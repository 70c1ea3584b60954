use axum::extract::{Path, State};
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitalis_audit::events::AuditEvent;
use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::record::AssessmentRecord;
use vitalis_core::models::vitals::VitalsInput;
use vitalis_engine::history::sort_for_display;
use vitalis_engine::profile_for;
use vitalis_engine::record::build_record;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateAssessmentRequest {
    pub assessment_type: AssessmentType,
    pub vitals: VitalsInput,
}

#[derive(Serialize)]
pub struct CreateAssessmentResponse {
    pub record: AssessmentRecord,
    /// False when the record was computed but could not be persisted.
    /// The record in this response is still the session's source of
    /// truth for display.
    pub stored: bool,
    pub storage_error: Option<String>,
}

pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateAssessmentRequest>,
) -> Result<Json<CreateAssessmentResponse>, ApiError> {
    let profile = profile_for(request.assessment_type);

    // Invalid vitals block the submission before any external call.
    let errors = profile.validate(&request.vitals);
    if !errors.is_empty() {
        let detail = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::BadRequest(detail));
    }

    // External prediction call. On failure the engine is bypassed and no
    // record is created.
    let label = state
        .predict
        .predict(request.assessment_type, &request.vitals)
        .await?;

    let record = build_record(
        request.assessment_type,
        request.vitals,
        &label,
        Timestamp::now(),
    )?;

    let (stored, storage_error) =
        match vitalis_storage::history::append_record(&state.s3, &state.bucket, &user.sub, &record)
            .await
        {
            Ok(()) => (true, None),
            Err(e) => {
                tracing::error!(error = %e, record_id = %record.id, "failed to persist record");
                (false, Some(e.to_string()))
            }
        };

    AuditEvent::new("create", "assessment", record.id.to_string(), user.sub).emit();

    Ok(Json(CreateAssessmentResponse {
        record,
        stored,
        storage_error,
    }))
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let records =
        vitalis_storage::history::list_records(&state.s3, &state.bucket, &user.sub).await?;
    Ok(Json(sort_for_display(records)))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    vitalis_storage::history::delete_record(&state.s3, &state.bucket, &user.sub, id).await?;
    AuditEvent::new("delete", "assessment", id.to_string(), user.sub).emit();
    Ok(Json(()))
}
