use std::path::Path;
use std::sync::Arc;

use adss_rules::EngineOptions;
use adss_store::error::StoreError;
use adss_store::store::KnowledgeStore;
use adss_store::taxonomy::Taxonomy;

use crate::error::ApiError;

const STORE_UNAVAILABLE: &str = "knowledge store failed to load";

/// Shared application state, injected into all route handlers via Axum state.
///
/// `store` is `None` when the taxonomy could not be loaded at startup. The
/// service still answers `/health` in that case, so the fault is visible.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<KnowledgeStore>>,
    pub options: EngineOptions,
}

impl AppState {
    pub fn new(store: Option<KnowledgeStore>, options: EngineOptions) -> Self {
        Self {
            store: store.map(Arc::new),
            options,
        }
    }

    pub fn store(&self) -> Result<&KnowledgeStore, ApiError> {
        self.store
            .as_deref()
            .ok_or_else(|| ApiError::Unavailable(STORE_UNAVAILABLE.to_string()))
    }
}

/// Load the knowledge store from `path`, or from the embedded taxonomy.
pub fn load_store(path: Option<&Path>) -> Result<KnowledgeStore, StoreError> {
    let taxonomy = match path {
        Some(path) => Taxonomy::from_path(path)?,
        None => Taxonomy::embedded()?,
    };
    KnowledgeStore::load(taxonomy)
}
