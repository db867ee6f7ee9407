use adss_core::models::labels::{BiomarkerInterpretation, BiomarkerStatus, Diagnosis, RuleId, Severity};
use adss_core::models::result::AtnProfile;

#[test]
fn labels_serialize_as_variant_names() {
    let json = serde_json::to_string(&BiomarkerStatus::AmyloidPositive).unwrap();
    assert_eq!(json, "\"AmyloidPositive\"");

    let json = serde_json::to_string(&Diagnosis::MCI).unwrap();
    assert_eq!(json, "\"MCI\"");
}

#[test]
fn labels_parse_from_their_names() {
    assert_eq!("Severe".parse::<Severity>().unwrap(), Severity::Severe);
    assert_eq!(
        "SubjectiveCognitiveDecline".parse::<Diagnosis>().unwrap(),
        Diagnosis::SubjectiveCognitiveDecline
    );
}

#[test]
fn unknown_label_is_rejected() {
    let err = "Catastrophic".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown severity label: Catastrophic");
}

#[test]
fn every_rule_concludes_a_distinct_category() {
    let mut concluded: Vec<Diagnosis> = RuleId::ALL.iter().map(|r| r.concludes()).collect();
    concluded.sort();
    concluded.dedup();
    assert_eq!(concluded.len(), RuleId::ALL.len());
    assert_eq!(concluded.len(), Diagnosis::ALL.len());
}

#[test]
fn rule_ids_serialize_snake_case() {
    let json = serde_json::to_string(&RuleId::MciDueToAd).unwrap();
    assert_eq!(json, "\"mci_due_to_ad\"");
    assert_eq!(RuleId::MciDueToAd.to_string(), "mci_due_to_ad");
}

#[test]
fn atn_profile_renders_signs() {
    let profile = AtnProfile {
        amyloid: true,
        tau: false,
        neurodegeneration: true,
    };
    assert_eq!(profile.to_string(), "A+T-N+");
    assert_eq!(AtnProfile::default().to_string(), "A-T-N-");
}

#[test]
fn atn_profile_counts_positive_groups() {
    let profile = AtnProfile {
        amyloid: true,
        tau: false,
        neurodegeneration: true,
    };
    assert_eq!(profile.positive_count(), 2);
    assert_eq!(AtnProfile::default().positive_count(), 0);
}

#[test]
fn interpretations_carry_readable_text() {
    assert_eq!(
        BiomarkerInterpretation::SuspectedNonAdPathology.description(),
        "Suspected non-AD pathology"
    );
    assert_eq!(
        BiomarkerInterpretation::TypicalAlzheimers.to_string(),
        "TypicalAlzheimers"
    );
}
