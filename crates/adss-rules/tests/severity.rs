use adss_core::models::labels::Severity;
use adss_rules::severity::stage;

#[test]
fn mmse_bands() {
    assert_eq!(stage(Some(0)), Some(Severity::Severe));
    assert_eq!(stage(Some(8)), Some(Severity::Severe));
    assert_eq!(stage(Some(9)), Some(Severity::Severe));
    assert_eq!(stage(Some(10)), Some(Severity::Moderate));
    assert_eq!(stage(Some(20)), Some(Severity::Moderate));
    assert_eq!(stage(Some(21)), Some(Severity::Mild));
    assert_eq!(stage(Some(22)), Some(Severity::Mild));
    assert_eq!(stage(Some(24)), Some(Severity::Mild));
}

#[test]
fn high_or_missing_mmse_has_no_severity() {
    assert_eq!(stage(Some(25)), None);
    assert_eq!(stage(Some(28)), None);
    assert_eq!(stage(Some(30)), None);
    assert_eq!(stage(None), None);
}
