use vitalis_engine::classifier::classify;

#[test]
fn risky_term_without_negation_is_risky() {
    assert!(classify("High risk of Heart Disease"));
}

#[test]
fn negation_suppresses_risky_term() {
    assert!(!classify("Negative for Diabetes"));
}

#[test]
fn case_is_ignored() {
    assert!(classify("DIABETES DETECTED"));
    assert!(!classify("HEALTHY"));
}

#[test]
fn empty_label_is_healthy() {
    assert!(!classify(""));
}

#[test]
fn label_without_risky_terms_is_healthy() {
    assert!(!classify("all clear"));
}

#[test]
fn matching_is_substring_not_whole_word() {
    // "norisk" carries the risky term "risk", but the leading "no"
    // matches as a substring and suppresses it.
    assert!(!classify("norisk"));
    // "highly" matches via the embedded "high".
    assert!(classify("highly elevated"));
}

#[test]
fn negation_wins_regardless_of_position() {
    assert!(!classify("diabetes: not detected"));
    assert!(!classify("normal heart function"));
    assert!(!classify("hypertension risk is negative"));
}

#[test]
fn every_risky_term_triggers_alone() {
    for label in [
        "diabetes",
        "heart",
        "hypertension",
        "disease",
        "risk",
        "high",
        "positive",
    ] {
        assert!(classify(label), "expected '{label}' to classify as risky");
    }
}

#[test]
fn every_negation_term_suppresses() {
    for negation in ["no", "not", "normal", "healthy", "negative"] {
        let label = format!("diabetes {negation}");
        assert!(!classify(&label), "expected '{label}' to classify as healthy");
    }
}
