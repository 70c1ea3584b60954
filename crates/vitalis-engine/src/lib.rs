//! vitalis-engine
//!
//! The deterministic risk engine: assessment profiles (required fields
//! and scoring weights per assessment type), the label classifier, the
//! risk scorer, the advisory generator, record assembly, and history
//! ordering. Pure data and pure functions — no I/O, no clock, no shared
//! mutable state, so concurrent invocation needs no locking.

pub mod advisory;
pub mod classifier;
pub mod error;
pub mod history;
pub mod profiles;
pub mod record;
pub mod scoring;
pub mod validation;

use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::vitals::VitalsInput;

use error::EngineError;
use validation::{numeric_value, FieldKind, FieldSpec, ParsedVitals, ValidationError};

/// Trait implemented by each assessment profile.
pub trait AssessmentProfile: Send + Sync {
    /// The assessment type this profile scores.
    fn assessment_type(&self) -> AssessmentType;

    /// Human-readable name (e.g., "Diabetes Prediction").
    fn name(&self) -> &str;

    /// The fields this profile requires, with their kinds and permitted
    /// categorical codes.
    fn fields(&self) -> &[FieldSpec];

    /// Weighted base score over validated vitals. The cap and the
    /// classification adjustment are applied by [`scoring::risk_score`].
    fn base_score(&self, vitals: &ParsedVitals) -> f64;

    /// Validate raw vitals against this profile's field specs. Returns
    /// every field error, not just the first.
    fn validate(&self, vitals: &VitalsInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for spec in self.fields() {
            let Some(raw) = vitals.get(&spec.name) else {
                errors.push(ValidationError {
                    field: spec.name.clone(),
                    provided: None,
                    message: format!(
                        "{}: required field '{}' is missing",
                        self.name(),
                        spec.name,
                    ),
                });
                continue;
            };
            let Some(value) = numeric_value(raw) else {
                errors.push(ValidationError {
                    field: spec.name.clone(),
                    provided: Some(raw.clone()),
                    message: format!(
                        "{}: field '{}' is not a finite number",
                        self.name(),
                        spec.name,
                    ),
                });
                continue;
            };
            if spec.kind == FieldKind::Categorical
                && let Some(codes) = &spec.codes
                && !codes.contains(&value)
            {
                errors.push(ValidationError {
                    field: spec.name.clone(),
                    provided: Some(raw.clone()),
                    message: format!(
                        "{}: field '{}' must be one of {:?}, got {}",
                        self.name(),
                        spec.name,
                        codes,
                        value,
                    ),
                });
            }
        }
        errors
    }

    /// Parse and validate, yielding the numeric view scoring reads from.
    fn parse(&self, vitals: &VitalsInput) -> Result<ParsedVitals, EngineError> {
        let errors = self.validate(vitals);
        if !errors.is_empty() {
            return Err(EngineError::InvalidInput(errors));
        }

        let mut parsed = ParsedVitals::default();
        for spec in self.fields() {
            if let Some(value) = vitals.get(&spec.name).and_then(numeric_value) {
                parsed.insert(spec.name.clone(), value);
            }
        }
        Ok(parsed)
    }
}

/// Return all registered assessment profiles.
pub fn all_profiles() -> Vec<Box<dyn AssessmentProfile>> {
    vec![
        Box::new(profiles::diabetes::Diabetes),
        Box::new(profiles::heart::Heart),
        Box::new(profiles::hypertension::Hypertension),
    ]
}

/// Look up the profile for an assessment type.
pub fn profile_for(assessment_type: AssessmentType) -> Box<dyn AssessmentProfile> {
    match assessment_type {
        AssessmentType::Diabetes => Box::new(profiles::diabetes::Diabetes),
        AssessmentType::Heart => Box::new(profiles::heart::Heart),
        AssessmentType::Hypertension => Box::new(profiles::hypertension::Hypertension),
    }
}
