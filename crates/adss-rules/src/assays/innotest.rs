use adss_core::models::patient::PatientFacts;

use crate::Assay;
use crate::cutoffs::{INNOTEST_AB42_BELOW, INNOTEST_PTAU181_ABOVE, INNOTEST_TTAU_MIN};

/// Fujirebio Innotest ELISA. Fallback for amyloid and tau; the only assay
/// that scores neurodegeneration from total tau.
pub struct Innotest;

impl Assay for Innotest {
    fn id(&self) -> &str {
        "Innotest"
    }

    fn name(&self) -> &str {
        "Innotest (ELISA-based CSF)"
    }

    fn amyloid(&self, facts: &PatientFacts) -> Option<bool> {
        facts.amyloid_42.map(|ab42| ab42 < INNOTEST_AB42_BELOW)
    }

    fn tau(&self, facts: &PatientFacts) -> Option<bool> {
        facts.ptau_181.map(|ptau| ptau > INNOTEST_PTAU181_ABOVE)
    }

    fn neurodegeneration(&self, facts: &PatientFacts) -> Option<bool> {
        facts.t_tau.map(|ttau| ttau >= INNOTEST_TTAU_MIN)
    }
}
