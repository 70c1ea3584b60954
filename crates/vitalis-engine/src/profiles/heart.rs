use std::sync::LazyLock;

use vitalis_core::fields;
use vitalis_core::models::assessment_type::AssessmentType;

use crate::validation::{FieldSpec, ParsedVitals};
use crate::AssessmentProfile;

/// Heart-disease risk: cholesterol-weighted, with a flat bonus for male
/// patients. Chest pain type is collected and validated but carries no
/// weight in the score.
pub struct Heart;

impl AssessmentProfile for Heart {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Heart
    }

    fn name(&self) -> &str {
        "Heart Disease Prediction"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                FieldSpec::numeric(fields::AGE),
                FieldSpec::numeric(fields::BLOOD_PRESSURE),
                FieldSpec::numeric(fields::CHOLESTEROL),
                FieldSpec::numeric(fields::MAX_HEART_RATE),
                FieldSpec::categorical(fields::SEX, &[fields::SEX_FEMALE, fields::SEX_MALE]),
                FieldSpec::categorical(fields::CHEST_PAIN_TYPE, &[0.0, 1.0, 2.0, 3.0]),
            ]
        });
        &FIELDS
    }

    fn base_score(&self, vitals: &ParsedVitals) -> f64 {
        let sex_bonus = if vitals.get(fields::SEX) == fields::SEX_MALE {
            5.0
        } else {
            0.0
        };
        vitals.get(fields::AGE) * 0.25
            + vitals.get(fields::CHOLESTEROL) * 0.4
            + vitals.get(fields::MAX_HEART_RATE) * 0.25
            + sex_bonus
    }
}
