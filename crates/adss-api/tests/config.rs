use std::collections::HashMap;

use adss_api::config::{Config, CorsOrigins};

fn config(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
    assert!(config.taxonomy_path.is_none());
    assert!(!config.faq_fallback);
    assert_eq!(config.cors_origins, CorsOrigins::Any);
    assert!(config.cors_layer().is_ok());
}

#[test]
fn values_are_read_from_the_environment() {
    let config = config(&[
        ("ADSS_BIND_ADDR", "127.0.0.1:9000"),
        ("ADSS_TAXONOMY_PATH", "/etc/adss/taxonomy.json"),
        ("ADSS_FAQ_FALLBACK", "TRUE"),
        ("ADSS_CORS_ORIGINS", "http://localhost:3000, https://triage.example"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(
        config.taxonomy_path.unwrap().to_str(),
        Some("/etc/adss/taxonomy.json")
    );
    assert!(config.faq_fallback);
    assert_eq!(
        config.cors_origins,
        CorsOrigins::List(vec![
            "http://localhost:3000".to_string(),
            "https://triage.example".to_string()
        ])
    );
}

#[test]
fn invalid_values_are_rejected() {
    assert!(config(&[("ADSS_BIND_ADDR", "not-an-address")]).is_err());
    assert!(config(&[("ADSS_FAQ_FALLBACK", "sometimes")]).is_err());
}
