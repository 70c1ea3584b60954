use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_engine::advisory::{
    advise, DEFAULT_ADVISORY, DIABETES_ADVISORY, HEART_ADVISORY, HYPERTENSION_ADVISORY,
};

#[test]
fn risky_labels_pick_their_condition() {
    assert_eq!(
        advise("High risk of Diabetes", AssessmentType::Diabetes, true),
        DIABETES_ADVISORY,
    );
    assert_eq!(
        advise("Heart Disease detected", AssessmentType::Heart, true),
        HEART_ADVISORY,
    );
    assert_eq!(
        advise("Hypertension detected", AssessmentType::Hypertension, true),
        HYPERTENSION_ADVISORY,
    );
}

#[test]
fn diabetes_rule_wins_over_heart() {
    assert_eq!(
        advise("diabetes with heart involvement", AssessmentType::Heart, true),
        DIABETES_ADVISORY,
    );
}

#[test]
fn dispatch_follows_the_label_not_the_requested_type() {
    // A diabetes submission whose label mentions only "heart" gets the
    // heart advisory.
    assert_eq!(
        advise("heart trouble likely", AssessmentType::Diabetes, true),
        HEART_ADVISORY,
    );
}

#[test]
fn healthy_outcome_gets_the_default() {
    assert_eq!(
        advise("Negative for Diabetes", AssessmentType::Diabetes, false),
        DEFAULT_ADVISORY,
    );
}

#[test]
fn unrelated_label_gets_the_default() {
    assert_eq!(advise("inconclusive", AssessmentType::Heart, true), DEFAULT_ADVISORY);
}

#[test]
fn label_matching_is_case_insensitive() {
    assert_eq!(
        advise("DIABETES", AssessmentType::Diabetes, true),
        DIABETES_ADVISORY,
    );
}
