use adss_core::models::patient::PatientFacts;
use adss_rules::validate::{self, validate};

#[test]
fn absent_readings_are_valid() {
    assert!(validate(&PatientFacts::default()).is_ok());
}

#[test]
fn boundary_values_are_accepted() {
    let facts = PatientFacts {
        age: Some(0),
        mmse_score: Some(30),
        ad8_score: Some(8),
        amyloid_ratio_42_40: Some(1.0),
        amyloid_42: Some(0.0),
        hippocampal_volume: Some(20.0),
        ..Default::default()
    };
    assert!(validate(&facts).is_ok());
}

#[test]
fn each_bad_field_is_reported() {
    let facts = PatientFacts {
        ad8_score: Some(9),
        ptau_over_ab42: Some(-0.1),
        t_tau: Some(-1.0),
        ..Default::default()
    };
    let errors = validate(&facts).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].field, "ad8_score");
    assert_eq!(errors[0].message, "ad8_score 9 is outside range [0, 8]");
    assert_eq!(errors[2].message, "t_tau_score -1 is outside range [0, ∞)");
}

#[test]
fn non_finite_readings_are_rejected() {
    let facts = PatientFacts {
        hippocampal_volume: Some(f64::NAN),
        amyloid_42: Some(f64::INFINITY),
        ..Default::default()
    };
    assert_eq!(validate(&facts).unwrap_err().len(), 2);
}

#[test]
fn ranges_include_their_ends() {
    assert!(validate::MMSE.contains(0.0));
    assert!(validate::MMSE.contains(30.0));
    assert!(!validate::MMSE.contains(30.5));
    assert!(validate::CONCENTRATION.contains(1.0e6));
}
