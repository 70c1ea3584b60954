use std::sync::LazyLock;

use vitalis_core::fields;
use vitalis_core::models::assessment_type::AssessmentType;

use crate::validation::{FieldSpec, ParsedVitals};
use crate::AssessmentProfile;

/// Diabetes risk: glucose-dominated weighting.
pub struct Diabetes;

impl AssessmentProfile for Diabetes {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Diabetes
    }

    fn name(&self) -> &str {
        "Diabetes Prediction"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                FieldSpec::numeric(fields::AGE),
                FieldSpec::numeric(fields::BLOOD_PRESSURE),
                FieldSpec::numeric(fields::GLUCOSE),
                FieldSpec::numeric(fields::BMI),
            ]
        });
        &FIELDS
    }

    fn base_score(&self, vitals: &ParsedVitals) -> f64 {
        vitals.get(fields::AGE) * 0.3
            + vitals.get(fields::GLUCOSE) * 0.5
            + vitals.get(fields::BMI) * 0.2
    }
}
