//! Assessment record assembly.

use jiff::Timestamp;
use uuid::Uuid;

use vitalis_core::models::assessment_type::AssessmentType;
use vitalis_core::models::record::AssessmentRecord;
use vitalis_core::models::vitals::VitalsInput;

use crate::error::EngineError;
use crate::{advisory, classifier, profile_for, scoring};

/// Assemble an immutable [`AssessmentRecord`] from a submission and its
/// prediction label: classify, score, advise.
///
/// The caller supplies the wall-clock instant — the engine reads no
/// clock and performs no I/O. Fails without producing a record when the
/// vitals are invalid for the selected profile; persistence is the
/// caller's responsibility.
pub fn build_record(
    assessment_type: AssessmentType,
    vitals: VitalsInput,
    label: &str,
    recorded_at: Timestamp,
) -> Result<AssessmentRecord, EngineError> {
    let profile = profile_for(assessment_type);

    let is_risky = classifier::classify(label);
    let risk_score = scoring::risk_score(profile.as_ref(), &vitals, is_risky)?;
    let advisory = advisory::advise(label, assessment_type, is_risky);

    Ok(AssessmentRecord {
        id: Uuid::new_v4(),
        assessment_type,
        vitals,
        prediction: label.to_string(),
        is_risky,
        risk_score,
        advisory: advisory.to_string(),
        recorded_at: Some(recorded_at),
    })
}
