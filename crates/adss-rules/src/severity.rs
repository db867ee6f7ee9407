use adss_core::models::labels::Severity;

use crate::cutoffs::{
    MMSE_MILD_MAX, MMSE_MILD_MIN, MMSE_MODERATE_MAX, MMSE_MODERATE_MIN, MMSE_SEVERE_MAX,
};

/// Stage severity from the MMSE score. Scores of 25 and above, or a missing
/// score, carry no severity.
pub fn stage(mmse_score: Option<i32>) -> Option<Severity> {
    match mmse_score? {
        score if score <= MMSE_SEVERE_MAX => Some(Severity::Severe),
        MMSE_MODERATE_MIN..=MMSE_MODERATE_MAX => Some(Severity::Moderate),
        MMSE_MILD_MIN..=MMSE_MILD_MAX => Some(Severity::Mild),
        _ => None,
    }
}
