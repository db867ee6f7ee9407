use std::collections::BTreeSet;

use adss_core::models::labels::{Activity, ClinicalAction, FollowUp, RequiredTest, Severity};
use adss_core::models::result::ClassificationResult;

use crate::biomarker::Biomarkers;
use crate::diagnosis::Diagnoses;
use crate::interpret;

/// Stage outputs gathered for assembly.
pub struct Stages {
    pub severity: Option<Severity>,
    pub biomarkers: Biomarkers,
    pub diagnoses: Diagnoses,
    pub activities: BTreeSet<Activity>,
    pub actions: BTreeSet<ClinicalAction>,
    pub follow_up: FollowUp,
    pub required_tests: BTreeSet<RequiredTest>,
}

/// Aggregate the stage outputs. Confidence and interpretation are read
/// straight off the ATN profile.
pub fn assemble(stages: Stages) -> ClassificationResult {
    let atn_profile = stages.biomarkers.profile();
    ClassificationResult {
        severity: stages.severity,
        biomarker_status: stages.biomarkers.status,
        diagnosis: stages.diagnoses.labels,
        recommended_activities: stages.activities,
        recommended_actions: stages.actions,
        follow_up: stages.follow_up,
        required_tests: stages.required_tests,
        atn_profile,
        confidence: interpret::confidence(&atn_profile),
        interpretation: interpret::interpret(&atn_profile),
        fired_rules: stages.diagnoses.fired,
    }
}
