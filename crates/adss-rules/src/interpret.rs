//! Summary readings of the ATN profile.

use adss_core::models::labels::{BiomarkerInterpretation, Confidence};
use adss_core::models::result::AtnProfile;

/// High with two or more positive groups, Medium with one, Low with none.
pub fn confidence(profile: &AtnProfile) -> Confidence {
    match profile.positive_count() {
        0 => Confidence::Low,
        1 => Confidence::Medium,
        _ => Confidence::High,
    }
}

/// First matching reading wins. A group that is not positive counts as
/// negative here, so `A+T+N-` falls through to `Atypical`.
pub fn interpret(profile: &AtnProfile) -> BiomarkerInterpretation {
    match (profile.amyloid, profile.tau, profile.neurodegeneration) {
        (true, true, true) => BiomarkerInterpretation::TypicalAlzheimers,
        (true, false, _) => BiomarkerInterpretation::AlzheimersPathologicChange,
        (false, _, true) => BiomarkerInterpretation::SuspectedNonAdPathology,
        _ => BiomarkerInterpretation::Atypical,
    }
}
