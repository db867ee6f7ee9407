use adss_core::models::patient::PatientFacts;

use crate::Assay;
use crate::cutoffs::{ELECSYS_AB42_40_MAX, ELECSYS_PTAU_AB42_ABOVE};

/// Roche Elecsys CSF immunoassay. Preferred source for amyloid and tau.
pub struct Elecsys;

impl Assay for Elecsys {
    fn id(&self) -> &str {
        "Elecsys"
    }

    fn name(&self) -> &str {
        "Elecsys (CSF immunoassay)"
    }

    fn amyloid(&self, facts: &PatientFacts) -> Option<bool> {
        facts
            .amyloid_ratio_42_40
            .map(|ratio| ratio <= ELECSYS_AB42_40_MAX)
    }

    fn tau(&self, facts: &PatientFacts) -> Option<bool> {
        facts
            .ptau_over_ab42
            .map(|ratio| ratio > ELECSYS_PTAU_AB42_ABOVE)
    }
}
