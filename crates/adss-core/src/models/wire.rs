//! JSON shapes of the `/diagnose` endpoint.
//!
//! Field names follow the front-end intake form, which predates the
//! internal naming in [`PatientFacts`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::labels::{
    Activity, BiomarkerStatus, ClinicalAction, Confidence, Diagnosis, FollowUp, RequiredTest, RuleId,
    Severity,
};
use super::patient::PatientFacts;
use super::result::ClassificationResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnoseRequest {
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub mmse_score: Option<i32>,
    #[serde(default)]
    pub moca_score: Option<i32>,
    #[serde(default)]
    pub faq_score: Option<i32>,
    #[serde(default)]
    pub ad8_score: Option<i32>,
    #[serde(default)]
    pub ab42_40_score: Option<f64>,
    #[serde(default)]
    pub ab42_score: Option<f64>,
    #[serde(default)]
    pub ptau_ab42_score: Option<f64>,
    #[serde(default)]
    pub ptau181_score: Option<f64>,
    #[serde(default)]
    pub t_tau_score: Option<f64>,
    #[serde(default)]
    pub hippocampal_vol: Option<f64>,
    #[serde(default)]
    pub imaging_method: Vec<String>,
    #[serde(default)]
    pub behavior_change: bool,
    #[serde(default)]
    pub has_other_diseases: bool,
    #[serde(default)]
    pub is_independent: Option<bool>,
}

impl From<DiagnoseRequest> for PatientFacts {
    fn from(req: DiagnoseRequest) -> Self {
        PatientFacts {
            age: req.age,
            mmse_score: req.mmse_score,
            moca_score: req.moca_score,
            faq_score: req.faq_score,
            ad8_score: req.ad8_score,
            imaging_methods: req.imaging_method.into_iter().collect(),
            amyloid_ratio_42_40: req.ab42_40_score,
            amyloid_42: req.ab42_score,
            ptau_over_ab42: req.ptau_ab42_score,
            ptau_181: req.ptau181_score,
            t_tau: req.t_tau_score,
            hippocampal_volume: req.hippocampal_vol,
            is_independent: req.is_independent,
            behavior_change: req.behavior_change,
            has_other_diseases: req.has_other_diseases,
        }
    }
}

/// Response body. Every label list is sorted; `severity` holds at most one entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnoseResponse {
    pub diagnosis: Vec<Diagnosis>,
    pub severity: Vec<Severity>,
    pub clinical_status: Vec<BiomarkerStatus>,
    pub recommended_activities: Vec<Activity>,
    pub recommended_actions: Vec<ClinicalAction>,
    pub atn_profile: String,
    pub confidence: Confidence,
    /// Human-readable reading of the ATN profile.
    pub interpretation: String,
    pub follow_up: FollowUp,
    pub required_tests: Vec<RequiredTest>,
    pub fired_rules: Vec<RuleId>,
}

impl From<ClassificationResult> for DiagnoseResponse {
    fn from(result: ClassificationResult) -> Self {
        DiagnoseResponse {
            diagnosis: result.diagnosis.into_iter().collect(),
            severity: result.severity.into_iter().collect(),
            clinical_status: result.biomarker_status.into_iter().collect(),
            recommended_activities: result.recommended_activities.into_iter().collect(),
            recommended_actions: result.recommended_actions.into_iter().collect(),
            atn_profile: result.atn_profile.to_string(),
            confidence: result.confidence,
            interpretation: result.interpretation.description().to_string(),
            follow_up: result.follow_up,
            required_tests: result.required_tests.into_iter().collect(),
            fired_rules: result.fired_rules,
        }
    }
}
