//! adss-api
//!
//! HTTP surface of the diagnostic engine. Handlers are thin: they decode the
//! intake form, call `adss-rules`, record the result in a scope of the
//! knowledge store and encode the response.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;

use state::AppState;

/// Build the application router. CORS is layered on by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/diagnose", post(routes::diagnose::diagnose))
        // Reference data (static tables)
        .route("/rules", get(routes::rules::list_rules))
        .route("/cutoffs", get(routes::rules::list_cutoffs))
        .route("/assays", get(routes::assays::list_assays))
        .route("/taxonomy/{name}", get(routes::taxonomy::get_class))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
