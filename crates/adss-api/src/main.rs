use adss_api::config::Config;
use adss_api::state::{load_store, AppState};
use adss_rules::EngineOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    // A broken taxonomy keeps the process up; /diagnose then answers 500.
    let store = match load_store(config.taxonomy_path.as_deref()) {
        Ok(store) => {
            tracing::info!(classes = store.class_count(), "taxonomy ready");
            Some(store)
        }
        Err(e) => {
            tracing::error!(error = %e, "knowledge store failed to load");
            None
        }
    };

    let options = EngineOptions {
        faq_fallback: config.faq_fallback,
    };
    let app = adss_api::router(AppState::new(store, options)).layer(config.cors_layer()?);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, faq_fallback = config.faq_fallback, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
}
