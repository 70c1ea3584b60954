//! Risk scoring: weighted base score, capped, rounded, adjusted by the
//! classification outcome.

use vitalis_core::models::vitals::VitalsInput;

use crate::error::EngineError;
use crate::AssessmentProfile;

/// Points removed from the rounded score when the label classified as
/// healthy.
const HEALTHY_ADJUSTMENT: f64 = 20.0;

/// Compute the 0–100 risk score for a submission.
///
/// The profile's weighted sum is capped at 100 *before* rounding
/// (half-away-from-zero); when the classification came back healthy,
/// 20 points come off the rounded score, floored at 0. Fails when the
/// vitals do not validate against the profile.
pub fn risk_score(
    profile: &dyn AssessmentProfile,
    vitals: &VitalsInput,
    is_risky: bool,
) -> Result<u8, EngineError> {
    let parsed = profile.parse(vitals)?;

    let capped = profile.base_score(&parsed).min(100.0);
    let mut score = capped.round();
    if !is_risky {
        score = (score - HEALTHY_ADJUSTMENT).max(0.0);
    }

    Ok(score as u8)
}
