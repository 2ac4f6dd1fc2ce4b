use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use stowquote_core::config::{AppConfig, LoadOptions};
use stowquote_core::document::TemplateStore;
use stowquote_core::pricing::DocumentFamily;
use stowquote_core::quotation::QuotationRequest;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SmokeCheck {
    name: String,
    status: &'static str,
    duration_ms: u128,
    details: String,
}

#[derive(Debug, Serialize)]
struct SmokeReport {
    command: &'static str,
    status: &'static str,
    checks: Vec<SmokeCheck>,
}

/// One reference request per document family, run through the full
/// classify -> compute -> merge -> prune pipeline against the real assets.
const REFERENCE_REQUESTS: &[(&str, DocumentFamily)] = &[
    ("AC", DocumentFamily::Standard),
    ("Chemicals AC", DocumentFamily::Chemical),
    ("KIZAD Open Yard", DocumentFamily::OpenYard),
];

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("smoke", "config_validation", error.to_string(), 2)
        }
    };

    let store = TemplateStore::new(config.assets.quote_templates_dir.clone());
    let today = Utc::now().date_naive();
    let mut checks = Vec::new();
    let mut failed = false;

    for (storage_type, expected_family) in REFERENCE_REQUESTS {
        let started = Instant::now();
        let outcome = run_reference_request(&store, storage_type, *expected_family, today);
        let duration_ms = started.elapsed().as_millis();

        match outcome {
            Ok(details) => checks.push(SmokeCheck {
                name: format!("pipeline_{storage_type}").to_lowercase().replace(' ', "_"),
                status: "pass",
                duration_ms,
                details,
            }),
            Err(details) => {
                failed = true;
                checks.push(SmokeCheck {
                    name: format!("pipeline_{storage_type}").to_lowercase().replace(' ', "_"),
                    status: "fail",
                    duration_ms,
                    details,
                });
            }
        }
    }

    let report = SmokeReport {
        command: "smoke",
        status: if failed { "error" } else { "ok" },
        checks,
    };

    let output = serde_json::to_string_pretty(&report)
        .unwrap_or_else(|error| format!("smoke serialization failed: {error}"));
    CommandResult { exit_code: u8::from(failed), output }
}

fn run_reference_request(
    store: &TemplateStore,
    storage_type: &str,
    expected_family: DocumentFamily,
    today: chrono::NaiveDate,
) -> Result<String, String> {
    let request = QuotationRequest::from_form(
        Some(storage_type),
        Some("10"),
        Some("40"),
        Some("Yes"),
        None,
    )
    .map_err(|error| format!("reference request rejected: {error}"))?;

    let profile = request.profile();
    if profile.family != expected_family {
        return Err(format!(
            "expected family {expected_family:?}, classified as {:?}",
            profile.family
        ));
    }

    let template =
        store.load(profile.family).map_err(|error| format!("template load failed: {error}"))?;

    let document = request
        .assemble_document(&template, &profile, today)
        .map_err(|error| format!("assembly failed: {error}"))?;

    if document.contains_text("{{") {
        return Err("assembled document still carries placeholder tokens".to_string());
    }

    Ok(format!(
        "assembled {} blocks, total {}",
        document.blocks.len(),
        profile.fees.total_fee
    ))
}
