use axum::Json;
use serde::Serialize;

use adss_rules::all_assays;

#[derive(Serialize)]
pub struct AssaySummary {
    id: String,
    name: String,
}

/// Recognised imaging methods, most preferred first.
pub async fn list_assays() -> Json<Vec<AssaySummary>> {
    let assays = all_assays()
        .iter()
        .map(|a| AssaySummary {
            id: a.id().to_string(),
            name: a.name().to_string(),
        })
        .collect();
    Json(assays)
}
