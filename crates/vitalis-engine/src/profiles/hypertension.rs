use std::sync::LazyLock;

use vitalis_core::fields;
use vitalis_core::models::assessment_type::AssessmentType;

use crate::validation::{FieldSpec, ParsedVitals};
use crate::AssessmentProfile;

/// Hypertension risk: blood-pressure-dominated weighting. Max heart rate
/// is collected and validated but carries no weight in the score.
pub struct Hypertension;

impl AssessmentProfile for Hypertension {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Hypertension
    }

    fn name(&self) -> &str {
        "Hypertension Prediction"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                FieldSpec::numeric(fields::AGE),
                FieldSpec::numeric(fields::BLOOD_PRESSURE),
                FieldSpec::numeric(fields::CHOLESTEROL),
                FieldSpec::numeric(fields::MAX_HEART_RATE),
            ]
        });
        &FIELDS
    }

    fn base_score(&self, vitals: &ParsedVitals) -> f64 {
        vitals.get(fields::AGE) * 0.3
            + vitals.get(fields::BLOOD_PRESSURE) * 0.5
            + vitals.get(fields::CHOLESTEROL) * 0.2
    }
}
