//! Advisory selection.

use vitalis_core::models::assessment_type::AssessmentType;

pub const DIABETES_ADVISORY: &str = "Monitor glucose and consult a doctor.";
pub const HEART_ADVISORY: &str = "Maintain a heart-healthy diet and exercise.";
pub const HYPERTENSION_ADVISORY: &str = "Monitor BP and consult your doctor.";
pub const DEFAULT_ADVISORY: &str = "Keep a healthy lifestyle.";

/// Pick the advisory for a prediction outcome. First match wins.
///
/// Dispatch is on label content, not the requested assessment type: a
/// diabetes submission whose label mentions "heart" gets the heart
/// advisory. The type parameter documents the seam and keeps the
/// signature stable should type-aware advisories ever land.
pub fn advise(label: &str, _assessment_type: AssessmentType, is_risky: bool) -> &'static str {
    let lower = label.to_lowercase();
    if lower.contains("diabetes") && is_risky {
        DIABETES_ADVISORY
    } else if lower.contains("heart") && is_risky {
        HEART_ADVISORY
    } else if lower.contains("hypertension") && is_risky {
        HYPERTENSION_ADVISORY
    } else {
        DEFAULT_ADVISORY
    }
}
