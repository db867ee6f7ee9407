//! Diagnostic categories from ATN positivity, cognition and independence.
//!
//! Rules are additive and none is terminal. A rule whose condition needs an
//! unknown value (independence unset, MMSE missing) simply does not fire.

use std::collections::BTreeSet;

use adss_core::models::labels::{Diagnosis, RuleId};
use adss_core::models::patient::PatientFacts;
use serde::Serialize;
use tracing::debug;

use crate::EngineOptions;
use crate::biomarker::Biomarkers;
use crate::cutoffs::{
    FAQ_INDEPENDENT_BELOW, MMSE_ASYMPTOMATIC_MIN, MMSE_MCI_MAX, MMSE_MCI_MIN, MMSE_SCD_MIN,
};

/// Everything the diagnostic rules read.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs {
    pub amyloid_positive: bool,
    pub tau_positive: bool,
    pub neuro_positive: bool,
    pub is_independent: Option<bool>,
    pub mmse_score: Option<i32>,
    pub behavior_change: bool,
}

impl RuleInputs {
    pub fn new(biomarkers: &Biomarkers, facts: &PatientFacts, options: &EngineOptions) -> Self {
        Self {
            amyloid_positive: biomarkers.amyloid_positive,
            tau_positive: biomarkers.tau_positive,
            neuro_positive: biomarkers.neuro_positive,
            is_independent: resolve_independence(facts, options),
            mmse_score: facts.mmse_score,
            behavior_change: facts.behavior_change,
        }
    }
}

/// Categories reached and the rules that reached them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnoses {
    pub labels: BTreeSet<Diagnosis>,
    pub fired: Vec<RuleId>,
}

/// The direct flag wins whenever it is set. Without it, the FAQ score is
/// consulted only if the fallback is switched on.
pub fn resolve_independence(facts: &PatientFacts, options: &EngineOptions) -> Option<bool> {
    match (facts.is_independent, facts.faq_score) {
        (Some(flag), _) => Some(flag),
        (None, Some(faq)) if options.faq_fallback => Some(faq < FAQ_INDEPENDENT_BELOW),
        _ => None,
    }
}

pub fn diagnose(inputs: &RuleInputs) -> Diagnoses {
    let in_continuum = inputs.amyloid_positive;
    let any_marker = inputs.amyloid_positive || inputs.tau_positive || inputs.neuro_positive;
    let mmse_in = |lo: i32, hi: i32| inputs.mmse_score.is_some_and(|s| (lo..=hi).contains(&s));
    let mmse_from = |lo: i32| inputs.mmse_score.is_some_and(|s| s >= lo);

    let verdicts = [
        (RuleId::AmyloidContinuum, in_continuum),
        (
            RuleId::AdDementia,
            in_continuum && inputs.tau_positive && inputs.is_independent == Some(false),
        ),
        (
            RuleId::MciDueToAd,
            in_continuum
                && inputs.is_independent == Some(true)
                && mmse_in(MMSE_MCI_MIN, MMSE_MCI_MAX),
        ),
        (
            RuleId::NonAdDementia,
            !inputs.amyloid_positive
                && (inputs.tau_positive || inputs.neuro_positive)
                && inputs.is_independent == Some(false),
        ),
        (
            RuleId::AsymptomaticAd,
            in_continuum
                && inputs.is_independent == Some(true)
                && mmse_from(MMSE_ASYMPTOMATIC_MIN),
        ),
        (
            RuleId::SubjectiveDecline,
            !any_marker && inputs.behavior_change && mmse_from(MMSE_SCD_MIN),
        ),
    ];

    let mut diagnoses = Diagnoses::default();
    for (rule, fired) in verdicts {
        if fired {
            debug!(rule = %rule, "diagnostic rule fired");
            diagnoses.labels.insert(rule.concludes());
            diagnoses.fired.push(rule);
        }
    }
    diagnoses
}

/// Catalogue entry describing one diagnostic rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescription {
    pub id: RuleId,
    pub concludes: Diagnosis,
    pub condition: &'static str,
}

pub fn describe(rule: RuleId) -> RuleDescription {
    let condition = match rule {
        RuleId::AmyloidContinuum => "amyloid positive",
        RuleId::AdDementia => "in continuum AND tau positive AND not independent",
        RuleId::MciDueToAd => "in continuum AND independent AND MMSE 21-26",
        RuleId::NonAdDementia => {
            "amyloid negative AND (tau OR neurodegeneration positive) AND not independent"
        }
        RuleId::AsymptomaticAd => "in continuum AND independent AND MMSE >= 27",
        RuleId::SubjectiveDecline => {
            "all biomarkers negative AND behaviour change AND MMSE >= 25"
        }
    };
    RuleDescription {
        id: rule,
        concludes: rule.concludes(),
        condition,
    }
}

/// All diagnostic rules, in evaluation order.
pub fn catalogue() -> Vec<RuleDescription> {
    RuleId::ALL.iter().copied().map(describe).collect()
}
