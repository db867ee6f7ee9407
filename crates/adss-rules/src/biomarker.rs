//! ATN biomarker classification.

use std::collections::BTreeSet;

use adss_core::models::labels::BiomarkerStatus;
use adss_core::models::patient::PatientFacts;
use adss_core::models::result::AtnProfile;
use tracing::debug;

use crate::cutoffs::HIPPOCAMPAL_VOLUME_BELOW;
use crate::{Assay, all_assays, get_assay};

/// Positivity flags plus the status labels they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biomarkers {
    pub amyloid_positive: bool,
    pub tau_positive: bool,
    pub neuro_positive: bool,
    pub status: BTreeSet<BiomarkerStatus>,
}

impl Biomarkers {
    pub fn profile(&self) -> AtnProfile {
        AtnProfile {
            amyloid: self.amyloid_positive,
            tau: self.tau_positive,
            neurodegeneration: self.neuro_positive,
        }
    }
}

/// Classify amyloid, tau and neurodegeneration for one encounter.
///
/// Amyloid and tau take the verdict of the first listed assay, in preference
/// order, that has the reading it needs. Neurodegeneration is positive if
/// any of its rules fires; hippocampal volume is checked regardless of the
/// listed methods.
pub fn classify(facts: &PatientFacts) -> Biomarkers {
    let assays = listed_assays(facts);

    let amyloid_positive = first_applicable(&assays, "amyloid", |a| a.amyloid(facts));
    let tau_positive = first_applicable(&assays, "tau", |a| a.tau(facts));

    let by_assay = assays
        .iter()
        .any(|a| a.neurodegeneration(facts) == Some(true));
    let by_volume = facts
        .hippocampal_volume
        .is_some_and(|volume| volume < HIPPOCAMPAL_VOLUME_BELOW);
    let neuro_positive = by_assay || by_volume;

    let mut status = BTreeSet::new();
    status.insert(if amyloid_positive {
        BiomarkerStatus::AmyloidPositive
    } else {
        BiomarkerStatus::AmyloidNegative
    });
    if tau_positive {
        status.insert(BiomarkerStatus::TauPositive);
    }
    if neuro_positive {
        status.insert(BiomarkerStatus::NeurodegenerationPositive);
    }

    Biomarkers {
        amyloid_positive,
        tau_positive,
        neuro_positive,
        status,
    }
}

/// Assays named in the facts, in registry preference order.
fn listed_assays(facts: &PatientFacts) -> Vec<Box<dyn Assay>> {
    for method in &facts.imaging_methods {
        if get_assay(method).is_none() {
            debug!(method = %method, "ignoring unrecognised imaging method");
        }
    }

    all_assays()
        .into_iter()
        .filter(|a| facts.uses_method(a.id()))
        .collect()
}

fn first_applicable(
    assays: &[Box<dyn Assay>],
    marker: &str,
    verdict: impl Fn(&dyn Assay) -> Option<bool>,
) -> bool {
    for assay in assays {
        if let Some(positive) = verdict(assay.as_ref()) {
            debug!(marker, assay = assay.id(), positive, "biomarker determined");
            return positive;
        }
    }
    false
}
