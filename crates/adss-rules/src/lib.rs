//! adss-rules
//!
//! The diagnostic rule engine. Pure functions only: no I/O, no shared state,
//! nothing retained between calls. Identical facts always produce an
//! identical [`ClassificationResult`].
//!
//! Stages run in a fixed order: validation, biomarker classification,
//! severity staging, diagnostic rules, recommendations, assembly.

pub mod assays;
pub mod assemble;
pub mod biomarker;
pub mod cutoffs;
pub mod diagnosis;
pub mod error;
pub mod interpret;
pub mod recommend;
pub mod severity;
pub mod validate;

use adss_core::models::patient::PatientFacts;
use adss_core::models::result::ClassificationResult;
use tracing::info;

use assemble::Stages;
use diagnosis::RuleInputs;
use error::RuleError;

/// Trait implemented by each biomarker assay method.
///
/// Each hook returns `Some(positive)` when the assay can judge that marker
/// for the given facts, or `None` when the reading it needs is absent.
pub trait Assay: Send + Sync {
    /// Identifier as sent by the intake form (e.g., "Elecsys").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    fn amyloid(&self, _facts: &PatientFacts) -> Option<bool> {
        None
    }

    fn tau(&self, _facts: &PatientFacts) -> Option<bool> {
        None
    }

    fn neurodegeneration(&self, _facts: &PatientFacts) -> Option<bool> {
        None
    }
}

/// Return all registered assays, most preferred first.
pub fn all_assays() -> Vec<Box<dyn Assay>> {
    vec![
        Box::new(assays::elecsys::Elecsys),
        Box::new(assays::innotest::Innotest),
        Box::new(assays::unscored::LUMIPULSE),
        Box::new(assays::unscored::MRI_FREESURFER),
        Box::new(assays::unscored::PLASMA_SIMOA),
    ]
}

/// Look up an assay by ID.
pub fn get_assay(id: &str) -> Option<Box<dyn Assay>> {
    all_assays().into_iter().find(|a| a.id() == id)
}

/// Switches that alter how facts are read. The defaults give the canonical
/// rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Derive independence from the FAQ score when the direct flag is unset.
    pub faq_fallback: bool,
}

/// Evaluate one encounter with the canonical options.
pub fn evaluate(facts: &PatientFacts) -> Result<ClassificationResult, RuleError> {
    evaluate_with(facts, &EngineOptions::default())
}

pub fn evaluate_with(
    facts: &PatientFacts,
    options: &EngineOptions,
) -> Result<ClassificationResult, RuleError> {
    validate::validate(facts).map_err(RuleError::InvalidInput)?;

    let biomarkers = biomarker::classify(facts);
    let severity = severity::stage(facts.mmse_score);
    let diagnoses = diagnosis::diagnose(&RuleInputs::new(&biomarkers, facts, options));
    let activities = recommend::recommend(severity, &diagnoses.labels);
    let actions = recommend::actions(severity, &diagnoses.labels);
    let follow_up = recommend::follow_up(severity);
    let required_tests = recommend::required_tests(&diagnoses.labels, &biomarkers.profile());

    let result = assemble::assemble(Stages {
        severity,
        biomarkers,
        diagnoses,
        activities,
        actions,
        follow_up,
        required_tests,
    });

    info!(
        atn = %result.atn_profile,
        severity = ?result.severity,
        diagnoses = result.diagnosis.len(),
        confidence = %result.confidence,
        rules_fired = result.fired_rules.len(),
        "evaluation complete"
    );

    Ok(result)
}
