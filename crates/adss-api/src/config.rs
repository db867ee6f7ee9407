use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Taxonomy file to load instead of the embedded one.
    pub taxonomy_path: Option<PathBuf>,
    pub faq_fallback: bool,
    pub cors_origins: CorsOrigins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("ADSS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| eyre::eyre!("invalid ADSS_BIND_ADDR: {e}"))?;

        let taxonomy_path = lookup("ADSS_TAXONOMY_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let faq_fallback = match lookup("ADSS_FAQ_FALLBACK") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| eyre::eyre!("invalid ADSS_FAQ_FALLBACK: {raw}"))?,
            None => false,
        };

        let cors_origins = match lookup("ADSS_CORS_ORIGINS") {
            None => CorsOrigins::Any,
            Some(raw) if raw.trim() == "*" => CorsOrigins::Any,
            Some(raw) => CorsOrigins::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        };

        Ok(Self {
            bind_addr,
            taxonomy_path,
            faq_fallback,
            cors_origins,
        })
    }

    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        let origin = match &self.cors_origins {
            CorsOrigins::Any => AllowOrigin::from(Any),
            CorsOrigins::List(origins) => {
                let values = origins
                    .iter()
                    .map(|o| {
                        HeaderValue::from_str(o)
                            .map_err(|e| eyre::eyre!("invalid CORS origin {o}: {e}"))
                    })
                    .collect::<eyre::Result<Vec<_>>>()?;
                AllowOrigin::list(values)
            }
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
