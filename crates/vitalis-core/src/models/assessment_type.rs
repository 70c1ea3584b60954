use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The three supported health-risk domains. Each has its own required
/// vitals and scoring formula, defined by its assessment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AssessmentType {
    Diabetes,
    Heart,
    Hypertension,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 3] = [
        AssessmentType::Diabetes,
        AssessmentType::Heart,
        AssessmentType::Hypertension,
    ];

    /// Canonical lower-case identifier, matching the serialized form and
    /// the prediction service's model selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Diabetes => "diabetes",
            AssessmentType::Heart => "heart",
            AssessmentType::Hypertension => "hypertension",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diabetes" => Ok(AssessmentType::Diabetes),
            "heart" => Ok(AssessmentType::Heart),
            "hypertension" => Ok(AssessmentType::Hypertension),
            other => Err(CoreError::UnknownAssessmentType(other.to_string())),
        }
    }
}
