use adss_core::models::result::ClassificationResult;

use crate::error::StoreError;
use crate::store::{Entity, Scope};

const PATIENT_CLASS: &str = "Person";
const TEST_CLASS: &str = "ClinicalTest";

/// Individuals a result was recorded onto.
#[derive(Debug, Clone)]
pub struct Projection {
    pub patient: Entity,
    pub test: Entity,
}

/// Record an assembled result in a scope. Biomarker status goes on the
/// clinical test; severity, diagnoses and recommendations on the patient.
pub fn project(
    scope: &mut Scope<'_>,
    patient: &str,
    result: &ClassificationResult,
) -> Result<Projection, StoreError> {
    let patient_entity = scope.create_individual(PATIENT_CLASS, patient)?;
    let test = scope.create_individual(TEST_CLASS, &format!("{patient}_Test"))?;

    for status in &result.biomarker_status {
        scope.assign_label(&test, status.as_str())?;
    }

    let patient_labels = result
        .severity
        .iter()
        .map(|s| s.as_str())
        .chain(result.diagnosis.iter().map(|d| d.as_str()))
        .chain(result.recommended_activities.iter().map(|a| a.as_str()))
        .chain(result.recommended_actions.iter().map(|a| a.as_str()));
    for label in patient_labels {
        scope.assign_label(&patient_entity, label)?;
    }

    Ok(Projection {
        patient: patient_entity,
        test,
    })
}
