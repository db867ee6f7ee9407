use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    knowledge_store: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let knowledge_store = if state.store.is_some() {
        "loaded"
    } else {
        "unavailable"
    };
    Json(HealthResponse {
        status: "ok",
        knowledge_store,
    })
}
