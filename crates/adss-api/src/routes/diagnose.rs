use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use adss_audit::events::AuditEvent;
use adss_core::models::patient::PatientFacts;
use adss_core::models::wire::{DiagnoseRequest, DiagnoseResponse};
use adss_store::project::project;

use crate::error::ApiError;
use crate::state::AppState;

/// Classify one encounter.
///
/// The result is also recorded in a per-request scope of the knowledge
/// store, and the labels read back from it go into the audit event. The
/// scope is discarded when the request ends.
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    let store = state.store()?;
    let Json(request) = payload?;

    let facts = PatientFacts::from(request);
    let result = adss_rules::evaluate_with(&facts, &state.options)?;

    let request_id = Uuid::new_v4().to_string();
    let mut scope = store.scope();
    let projection = project(&mut scope, &request_id, &result)?;
    let patient_labels = scope.read_labels(&projection.patient)?;
    let test_labels = scope.read_labels(&projection.test)?;
    drop(scope);

    AuditEvent::new("diagnose", "encounter", &request_id)
        .with_details(json!({
            "atn_profile": result.atn_profile.to_string(),
            "confidence": result.confidence,
            "fired_rules": result.fired_rules,
            "patient_labels": patient_labels,
            "test_labels": test_labels,
        }))
        .emit();

    Ok(Json(DiagnoseResponse::from(result)))
}
