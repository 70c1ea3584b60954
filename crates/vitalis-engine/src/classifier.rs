//! Keyword classifier over the free-text prediction label.

/// Terms whose presence marks a label as risky.
const RISKY_TERMS: [&str; 7] = [
    "diabetes",
    "heart",
    "hypertension",
    "disease",
    "risk",
    "high",
    "positive",
];

/// Terms whose presence overrides every risky term, regardless of
/// position or grammar.
const NEGATION_TERMS: [&str; 5] = ["no", "not", "normal", "healthy", "negative"];

/// Classify a prediction label as risky (`true`) or healthy (`false`).
///
/// The label is lower-cased and matched by substring: risky iff at least
/// one risky term appears and no negation term does. Matching is
/// substring, not whole-word — "norisk" reads as negated via "no".
/// Any input is accepted; the empty string classifies as healthy.
pub fn classify(label: &str) -> bool {
    let lower = label.to_lowercase();
    RISKY_TERMS.iter().any(|term| lower.contains(term))
        && !NEGATION_TERMS.iter().any(|term| lower.contains(term))
}
