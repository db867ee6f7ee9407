use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use adss_store::store::Entity;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClassDetail {
    #[serde(flatten)]
    entity: Entity,
    /// The class itself, then each parent up to the root.
    ancestors: Vec<String>,
}

/// Look up a taxonomy class. `*` in the name matches any run of characters.
pub async fn get_class(
    State(state): State<AppState>,
    Path(pattern): Path<String>,
) -> Result<Json<ClassDetail>, ApiError> {
    let store = state.store()?;
    let entity = store
        .find_class(&pattern)?
        .ok_or_else(|| ApiError::NotFound(format!("class not found: {pattern}")))?;

    let ancestors = store
        .ancestors(entity.name())?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(ClassDetail { entity, ancestors }))
}
