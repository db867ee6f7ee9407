use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::labels::{
    Activity, BiomarkerInterpretation, BiomarkerStatus, ClinicalAction, Confidence, Diagnosis,
    FollowUp, RequiredTest, RuleId, Severity,
};

/// Positivity of the three ATN biomarker groups. Unknown counts as negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AtnProfile {
    pub amyloid: bool,
    pub tau: bool,
    pub neurodegeneration: bool,
}

impl AtnProfile {
    /// Number of positive groups, 0 to 3.
    pub fn positive_count(&self) -> usize {
        [self.amyloid, self.tau, self.neurodegeneration]
            .into_iter()
            .filter(|&positive| positive)
            .count()
    }
}

impl fmt::Display for AtnProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |positive: bool| if positive { '+' } else { '-' };
        write!(
            f,
            "A{}T{}N{}",
            sign(self.amyloid),
            sign(self.tau),
            sign(self.neurodegeneration)
        )
    }
}

/// Output of one evaluation. Assembled once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub severity: Option<Severity>,
    pub biomarker_status: BTreeSet<BiomarkerStatus>,
    pub diagnosis: BTreeSet<Diagnosis>,
    pub recommended_activities: BTreeSet<Activity>,
    pub recommended_actions: BTreeSet<ClinicalAction>,
    pub follow_up: FollowUp,
    pub required_tests: BTreeSet<RequiredTest>,
    pub atn_profile: AtnProfile,
    pub confidence: Confidence,
    pub interpretation: BiomarkerInterpretation,
    /// Diagnostic rules that fired, in evaluation order.
    pub fired_rules: Vec<RuleId>,
}
