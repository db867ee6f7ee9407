//! End-to-end evaluation of whole encounters.

use std::collections::BTreeSet;

use adss_core::models::labels::{
    Activity, BiomarkerInterpretation, BiomarkerStatus, Confidence, Diagnosis, FollowUp,
    RequiredTest, RuleId, Severity,
};
use adss_core::models::patient::PatientFacts;
use adss_rules::error::RuleError;
use adss_rules::{EngineOptions, evaluate, evaluate_with, get_assay};

fn elecsys() -> BTreeSet<String> {
    BTreeSet::from(["Elecsys".to_string()])
}

#[test]
fn severe_dependent_ad_patient() {
    let facts = PatientFacts {
        mmse_score: Some(5),
        is_independent: Some(false),
        imaging_methods: elecsys(),
        amyloid_ratio_42_40: Some(0.05),
        ptau_over_ab42: Some(0.03),
        ..Default::default()
    };

    let result = evaluate(&facts).unwrap();

    assert_eq!(result.severity, Some(Severity::Severe));
    assert!(result.biomarker_status.contains(&BiomarkerStatus::AmyloidPositive));
    assert!(result.biomarker_status.contains(&BiomarkerStatus::TauPositive));
    assert!(result.diagnosis.contains(&Diagnosis::AlzheimersContinuum));
    assert!(result.diagnosis.contains(&Diagnosis::ADDementia));
    assert_eq!(
        result.recommended_activities,
        BTreeSet::from([
            Activity::AuditoryStimulation,
            Activity::OlfactoryStimulation,
            Activity::TactileStimulation,
            Activity::VisualStimulation,
        ])
    );
    assert_eq!(result.follow_up, FollowUp::ThreeMonths);
    assert_eq!(result.atn_profile.to_string(), "A+T+N-");
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.interpretation, BiomarkerInterpretation::Atypical);
    assert!(!result.required_tests.contains(&RequiredTest::TauWorkup));
}

#[test]
fn independent_mild_patient_with_unknown_tau() {
    let facts = PatientFacts {
        mmse_score: Some(23),
        is_independent: Some(true),
        imaging_methods: elecsys(),
        amyloid_ratio_42_40: Some(0.05),
        ..Default::default()
    };

    let result = evaluate(&facts).unwrap();

    assert!(result.biomarker_status.contains(&BiomarkerStatus::AmyloidPositive));
    assert!(result.diagnosis.contains(&Diagnosis::AlzheimersContinuum));
    assert!(result.diagnosis.contains(&Diagnosis::MCI));
    assert_eq!(result.severity, Some(Severity::Mild));
    assert_eq!(
        result.recommended_activities,
        BTreeSet::from([
            Activity::CognitiveTraining,
            Activity::PhysicalExercise,
            Activity::SocialActivity,
        ])
    );
    assert_eq!(
        result.fired_rules,
        vec![RuleId::AmyloidContinuum, RuleId::MciDueToAd]
    );
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(
        result.interpretation,
        BiomarkerInterpretation::AlzheimersPathologicChange
    );
    assert!(result.required_tests.contains(&RequiredTest::TauWorkup));
    assert!(!result.required_tests.contains(&RequiredTest::AmyloidWorkup));
}

#[test]
fn biomarker_negative_patient_with_behaviour_change() {
    let facts = PatientFacts {
        mmse_score: Some(27),
        behavior_change: true,
        imaging_methods: elecsys(),
        amyloid_ratio_42_40: Some(0.3),
        ptau_over_ab42: Some(0.01),
        hippocampal_volume: Some(7.1),
        ..Default::default()
    };

    let result = evaluate(&facts).unwrap();

    assert_eq!(
        result.diagnosis,
        BTreeSet::from([Diagnosis::SubjectiveCognitiveDecline])
    );
    assert_eq!(result.severity, None);
    assert!(result.recommended_activities.is_empty());
    assert_eq!(result.follow_up, FollowUp::Annual);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.required_tests.len(), 4);
}

#[test]
fn evaluation_is_deterministic() {
    let facts = PatientFacts {
        age: Some(74),
        mmse_score: Some(18),
        is_independent: Some(false),
        imaging_methods: BTreeSet::from(["Innotest".to_string(), "Elecsys".to_string()]),
        amyloid_42: Some(420.0),
        ptau_181: Some(75.0),
        t_tau: Some(410.0),
        hippocampal_volume: Some(5.5),
        behavior_change: true,
        ..Default::default()
    };

    let first = evaluate(&facts).unwrap();
    let second = evaluate(&facts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn evaluations_do_not_leak_into_each_other() {
    let positive = PatientFacts {
        imaging_methods: elecsys(),
        amyloid_ratio_42_40: Some(0.02),
        ..Default::default()
    };
    let empty = PatientFacts::default();

    let before = evaluate(&empty).unwrap();
    evaluate(&positive).unwrap();
    let after = evaluate(&empty).unwrap();
    assert_eq!(before, after);
}

#[test]
fn out_of_range_readings_are_rejected_not_clamped() {
    let facts = PatientFacts {
        age: Some(-3),
        mmse_score: Some(31),
        ..Default::default()
    };

    let Err(RuleError::InvalidInput(errors)) = evaluate(&facts) else {
        panic!("expected invalid input");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["age", "mmse_score"]);
}

#[test]
fn faq_fallback_changes_outcome_only_when_enabled() {
    let facts = PatientFacts {
        mmse_score: Some(22),
        faq_score: Some(3),
        imaging_methods: elecsys(),
        amyloid_ratio_42_40: Some(0.05),
        ..Default::default()
    };

    let canonical = evaluate(&facts).unwrap();
    assert!(!canonical.diagnosis.contains(&Diagnosis::MCI));

    let with_fallback = evaluate_with(&facts, &EngineOptions { faq_fallback: true }).unwrap();
    assert!(with_fallback.diagnosis.contains(&Diagnosis::MCI));
}

#[test]
fn registry_resolves_known_assays() {
    assert_eq!(get_assay("Innotest").unwrap().name(), "Innotest (ELISA-based CSF)");
    assert!(get_assay("MRIFreesurfer").is_some());
    assert!(get_assay("elecsys").is_none());
}
