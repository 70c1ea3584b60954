use vitalis_core::fields;
use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::vitals::VitalsInput;
use vitalis_engine::error::EngineError;
use vitalis_engine::profile_for;
use vitalis_engine::scoring::risk_score;

fn diabetes_vitals(age: f64, glucose: f64, bmi: f64) -> VitalsInput {
    VitalsInput::new()
        .with(fields::AGE, age)
        .with(fields::BLOOD_PRESSURE, 80.0)
        .with(fields::GLUCOSE, glucose)
        .with(fields::BMI, bmi)
}

fn heart_vitals(age: f64, cholesterol: f64, max_heart_rate: f64, sex: f64) -> VitalsInput {
    VitalsInput::new()
        .with(fields::AGE, age)
        .with(fields::BLOOD_PRESSURE, 120.0)
        .with(fields::CHOLESTEROL, cholesterol)
        .with(fields::MAX_HEART_RATE, max_heart_rate)
        .with(fields::SEX, sex)
        .with(fields::CHEST_PAIN_TYPE, 0.0)
}

fn score(assessment_type: AssessmentType, vitals: &VitalsInput, is_risky: bool) -> u8 {
    let profile = profile_for(assessment_type);
    risk_score(profile.as_ref(), vitals, is_risky).expect("vitals should validate")
}

#[test]
fn diabetes_formula_when_risky() {
    // 40*0.3 + 120*0.5 + 28*0.2 = 77.6, rounded to 78, no adjustment.
    let vitals = diabetes_vitals(40.0, 120.0, 28.0);
    assert_eq!(score(AssessmentType::Diabetes, &vitals, true), 78);
}

#[test]
fn healthy_classification_subtracts_twenty() {
    let vitals = diabetes_vitals(40.0, 120.0, 28.0);
    assert_eq!(score(AssessmentType::Diabetes, &vitals, false), 58);
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 45*0.3 + 100*0.5 + 25*0.2 = 68.5, rounds up to 69.
    let vitals = diabetes_vitals(45.0, 100.0, 25.0);
    assert_eq!(score(AssessmentType::Diabetes, &vitals, true), 69);
}

#[test]
fn raw_sum_is_capped_before_rounding() {
    // 40*0.3 + 250*0.5 + 28*0.2 = 142.6, capped at 100.
    let vitals = diabetes_vitals(40.0, 250.0, 28.0);
    assert_eq!(score(AssessmentType::Diabetes, &vitals, true), 100);
    // The healthy adjustment applies after the cap.
    assert_eq!(score(AssessmentType::Diabetes, &vitals, false), 80);
}

#[test]
fn adjustment_floors_at_zero() {
    // 10*0.3 + 10*0.5 + 10*0.2 = 10, minus 20 floors at 0.
    let vitals = diabetes_vitals(10.0, 10.0, 10.0);
    assert_eq!(score(AssessmentType::Diabetes, &vitals, false), 0);
}

#[test]
fn heart_formula_includes_male_bonus() {
    // 50*0.25 + 100*0.4 + 100*0.25 = 77.5; male adds 5 → 82.5 → 83.
    let male = heart_vitals(50.0, 100.0, 100.0, fields::SEX_MALE);
    assert_eq!(score(AssessmentType::Heart, &male, true), 83);

    let female = heart_vitals(50.0, 100.0, 100.0, fields::SEX_FEMALE);
    assert_eq!(score(AssessmentType::Heart, &female, true), 78);
}

#[test]
fn chest_pain_type_does_not_affect_heart_score() {
    let mut typical = heart_vitals(50.0, 100.0, 100.0, fields::SEX_MALE);
    typical.set(fields::CHEST_PAIN_TYPE, 0.0);
    let mut asymptomatic = heart_vitals(50.0, 100.0, 100.0, fields::SEX_MALE);
    asymptomatic.set(fields::CHEST_PAIN_TYPE, 3.0);

    assert_eq!(
        score(AssessmentType::Heart, &typical, true),
        score(AssessmentType::Heart, &asymptomatic, true),
    );
}

#[test]
fn hypertension_formula() {
    // 40*0.3 + 130*0.5 + 150*0.2 = 107, capped at 100.
    let vitals = VitalsInput::new()
        .with(fields::AGE, 40.0)
        .with(fields::BLOOD_PRESSURE, 130.0)
        .with(fields::CHOLESTEROL, 150.0)
        .with(fields::MAX_HEART_RATE, 90.0);
    assert_eq!(score(AssessmentType::Hypertension, &vitals, true), 100);
    assert_eq!(score(AssessmentType::Hypertension, &vitals, false), 80);
}

#[test]
fn numeric_strings_are_accepted() {
    // Web forms submit strings; "120" scores the same as 120.
    let vitals = VitalsInput::new()
        .with(fields::AGE, "40")
        .with(fields::BLOOD_PRESSURE, "80")
        .with(fields::GLUCOSE, "120")
        .with(fields::BMI, "28");
    assert_eq!(score(AssessmentType::Diabetes, &vitals, true), 78);
}

#[test]
fn score_is_monotonic_in_glucose() {
    let mut previous = 0;
    for glucose in [60.0, 90.0, 120.0, 150.0, 250.0] {
        let vitals = diabetes_vitals(40.0, glucose, 28.0);
        let current = score(AssessmentType::Diabetes, &vitals, true);
        assert!(current >= previous, "score decreased at glucose={glucose}");
        previous = current;
    }
}

#[test]
fn missing_required_field_fails() {
    let vitals = VitalsInput::new()
        .with(fields::AGE, 40.0)
        .with(fields::BLOOD_PRESSURE, 80.0)
        .with(fields::BMI, 28.0);
    let profile = profile_for(AssessmentType::Diabetes);

    let err = risk_score(profile.as_ref(), &vitals, true).unwrap_err();
    let EngineError::InvalidInput(errors) = err;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, fields::GLUCOSE);
}

#[test]
fn non_numeric_field_fails() {
    let vitals = diabetes_vitals(40.0, 120.0, 28.0).with(fields::GLUCOSE, "not a number");
    let profile = profile_for(AssessmentType::Diabetes);
    assert!(risk_score(profile.as_ref(), &vitals, true).is_err());
}

#[test]
fn unrecognized_categorical_code_fails() {
    let vitals = heart_vitals(50.0, 100.0, 100.0, 3.0);
    let profile = profile_for(AssessmentType::Heart);

    let err = risk_score(profile.as_ref(), &vitals, true).unwrap_err();
    let EngineError::InvalidInput(errors) = err;
    assert_eq!(errors[0].field, fields::SEX);
}

#[test]
fn validation_reports_every_failing_field() {
    let vitals = VitalsInput::new().with(fields::AGE, "forty");
    let profile = profile_for(AssessmentType::Diabetes);

    let errors = profile.validate(&vitals);
    // One bad parse plus three missing fields.
    assert_eq!(errors.len(), 4);
}
