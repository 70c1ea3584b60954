use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_engine::validation::FieldSpec;
use vitalis_engine::{all_profiles, profile_for};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ProfileSummary {
    id: &'static str,
    name: String,
}

#[derive(Serialize)]
pub struct ProfileDetail {
    id: &'static str,
    name: String,
    fields: Vec<FieldSpec>,
}

pub async fn list_profiles() -> Json<Vec<ProfileSummary>> {
    let profiles: Vec<ProfileSummary> = all_profiles()
        .iter()
        .map(|p| ProfileSummary {
            id: p.assessment_type().as_str(),
            name: p.name().to_string(),
        })
        .collect();
    Json(profiles)
}

pub async fn get_profile_detail(
    Path(id): Path<String>,
) -> Result<Json<ProfileDetail>, ApiError> {
    let assessment_type: AssessmentType = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("unknown assessment type: {id}")))?;
    let profile = profile_for(assessment_type);

    Ok(Json(ProfileDetail {
        id: assessment_type.as_str(),
        name: profile.name().to_string(),
        fields: profile.fields().to_vec(),
    }))
}
