use std::collections::BTreeSet;

use adss_core::models::labels::{
    Activity, BiomarkerInterpretation, BiomarkerStatus, ClinicalAction, Confidence, Diagnosis,
    FollowUp, RequiredTest, RuleId, Severity,
};
use adss_core::models::patient::PatientFacts;
use adss_core::models::result::{AtnProfile, ClassificationResult};
use adss_core::models::wire::{DiagnoseRequest, DiagnoseResponse};

#[test]
fn request_maps_form_fields_onto_facts() {
    let body = r#"{
        "age": 71,
        "mmse_score": 23,
        "ab42_40_score": 0.05,
        "ab42_score": 480,
        "t_tau_score": 400.5,
        "imaging_method": ["Elecsys", "Innotest", "Elecsys"],
        "behavior_change": true,
        "is_independent": true
    }"#;

    let request: DiagnoseRequest = serde_json::from_str(body).unwrap();
    let facts = PatientFacts::from(request);

    assert_eq!(facts.age, Some(71));
    assert_eq!(facts.mmse_score, Some(23));
    assert_eq!(facts.amyloid_ratio_42_40, Some(0.05));
    assert_eq!(facts.amyloid_42, Some(480.0));
    assert_eq!(facts.t_tau, Some(400.5));
    assert_eq!(facts.imaging_methods.len(), 2);
    assert!(facts.uses_method("Innotest"));
    assert!(facts.behavior_change);
    assert!(!facts.has_other_diseases);
    assert_eq!(facts.is_independent, Some(true));
}

#[test]
fn empty_request_means_all_unknown() {
    let request: DiagnoseRequest = serde_json::from_str("{}").unwrap();
    let facts = PatientFacts::from(request);
    assert_eq!(facts, PatientFacts::default());
}

#[test]
fn null_independence_stays_unknown() {
    let request: DiagnoseRequest =
        serde_json::from_str(r#"{"is_independent": null, "imaging_method": []}"#).unwrap();
    assert_eq!(PatientFacts::from(request).is_independent, None);
}

#[test]
fn response_flattens_result_into_lists() {
    let result = ClassificationResult {
        severity: Some(Severity::Mild),
        biomarker_status: BTreeSet::from([BiomarkerStatus::AmyloidPositive]),
        diagnosis: BTreeSet::from([Diagnosis::MCI, Diagnosis::AlzheimersContinuum]),
        recommended_activities: BTreeSet::from([Activity::CognitiveTraining]),
        recommended_actions: BTreeSet::from([ClinicalAction::NeurologistReferral]),
        follow_up: FollowUp::TwelveMonths,
        required_tests: BTreeSet::from([
            RequiredTest::BasicMetabolicPanel,
            RequiredTest::AnnualCognitiveAssessment,
            RequiredTest::TauWorkup,
        ]),
        atn_profile: AtnProfile {
            amyloid: true,
            tau: false,
            neurodegeneration: false,
        },
        confidence: Confidence::Medium,
        interpretation: BiomarkerInterpretation::AlzheimersPathologicChange,
        fired_rules: vec![RuleId::AmyloidContinuum, RuleId::MciDueToAd],
    };

    let response = DiagnoseResponse::from(result);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["severity"], serde_json::json!(["Mild"]));
    assert_eq!(
        json["diagnosis"],
        serde_json::json!(["AlzheimersContinuum", "MCI"])
    );
    assert_eq!(json["clinical_status"], serde_json::json!(["AmyloidPositive"]));
    assert_eq!(json["atn_profile"], "A+T-N-");
    assert_eq!(json["follow_up"], "TwelveMonths");
    assert_eq!(json["confidence"], "Medium");
    assert_eq!(json["interpretation"], "Alzheimer's pathologic change");
    assert_eq!(
        json["required_tests"],
        serde_json::json!(["AnnualCognitiveAssessment", "TauWorkup", "BasicMetabolicPanel"])
    );
    assert_eq!(
        json["fired_rules"],
        serde_json::json!(["amyloid_continuum", "mci_due_to_ad"])
    );
}

#[test]
fn absent_severity_is_an_empty_list() {
    let result = ClassificationResult {
        severity: None,
        biomarker_status: BTreeSet::new(),
        diagnosis: BTreeSet::new(),
        recommended_activities: BTreeSet::new(),
        recommended_actions: BTreeSet::new(),
        follow_up: FollowUp::Annual,
        required_tests: BTreeSet::new(),
        atn_profile: AtnProfile::default(),
        confidence: Confidence::Low,
        interpretation: BiomarkerInterpretation::Atypical,
        fired_rules: Vec::new(),
    };
    let response = DiagnoseResponse::from(result);
    assert!(response.severity.is_empty());
}
