use serde::Serialize;
use stowquote_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Serialize)]
struct ConfigReport {
    server_bind_address: String,
    server_port: u16,
    narrative_api_key: &'static str,
    narrative_base_url: String,
    narrative_primary_model: String,
    narrative_fallback_model: String,
    narrative_timeout_secs: u64,
    quote_templates_dir: String,
    pages_dir: String,
    static_dir: String,
    output_dir: String,
    logging_level: String,
    logging_format: String,
}

/// Prints the effective configuration with the API key redacted.
pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return format!("{{\"command\":\"config\",\"status\":\"error\",\"message\":\"{error}\"}}")
        }
    };

    let report = ConfigReport {
        server_bind_address: config.server.bind_address.clone(),
        server_port: config.server.port,
        narrative_api_key: if config.narrative_enabled() { "configured" } else { "not set" },
        narrative_base_url: config.narrative.base_url.clone(),
        narrative_primary_model: config.narrative.primary_model.clone(),
        narrative_fallback_model: config.narrative.fallback_model.clone(),
        narrative_timeout_secs: config.narrative.timeout_secs,
        quote_templates_dir: config.assets.quote_templates_dir.display().to_string(),
        pages_dir: config.assets.pages_dir.display().to_string(),
        static_dir: config.assets.static_dir.display().to_string(),
        output_dir: config.assets.output_dir.display().to_string(),
        logging_level: config.logging.level.clone(),
        logging_format: format!("{:?}", config.logging.format).to_lowercase(),
    };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|error| format!("config serialization failed: {error}"))
}
