use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use serde_json::Value;
use stowquote_cli::commands::{ask, doctor, quote, smoke};

const TEMPLATE_JSON: &str = r#"{
  "blocks": [
    {"kind": "paragraph", "text": "Quotation issued {{TODAY_DATE}}"},
    {"kind": "paragraph", "text": "{{STORAGE_TYPE}}: {{VOLUME}} {{UNIT}} for {{DAYS}} days"},
    {"kind": "paragraph", "text": "Storage {{STORAGE_FEE}} / WMS {{WMS_STATUS}} {{WMS_FEE}} / Total {{TOTAL_FEE}}"},
    {"kind": "paragraph", "text": "Rate {{UNIT_RATE}}"},
    {"kind": "paragraph", "text": "[VAS_STANDARD]"},
    {"kind": "paragraph", "text": "Standard services"},
    {"kind": "paragraph", "text": "[/VAS_STANDARD]"},
    {"kind": "paragraph", "text": "[VAS_CHEMICAL]"},
    {"kind": "paragraph", "text": "Chemical services"},
    {"kind": "paragraph", "text": "[/VAS_CHEMICAL]"},
    {"kind": "paragraph", "text": "[VAS_OPENYARD]"},
    {"kind": "paragraph", "text": "Yard services"},
    {"kind": "paragraph", "text": "[/VAS_OPENYARD]"}
  ]
}"#;

#[test]
fn quote_reports_the_reference_fee_breakdown() {
    let result = quote::run("AC", "10", "40", true, Some("jane@example.com"));
    assert_eq!(result.exit_code, 0, "expected successful quote computation");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "quote");
    assert_eq!(payload["category"], "AC");
    assert_eq!(payload["months"], 1);
    assert_eq!(payload["storage_fee"], "1000.00");
    assert_eq!(payload["wms_fee"], "1500.00");
    assert_eq!(payload["total_fee"], "2500.00");
    assert_eq!(payload["download_file_name"], "Quotation_jane.docx");
}

#[test]
fn quote_rejects_invalid_numbers_with_a_validation_error() {
    let result = quote::run("AC", "plenty", "40", false, None);
    assert_eq!(result.exit_code, 2, "expected validation failure code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "validation");
}

#[test]
fn ask_routes_catalog_questions_deterministically() {
    let result = ask::run("calculate handling for 50 cbm");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["matched"], true);
    assert!(payload["reply"].as_str().expect("reply").contains("1,000.00 AED"));
}

#[test]
fn ask_reports_unmatched_input_with_the_clarification_reply() {
    let result = ask::run("xylophone lessons on tuesdays");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["matched"], false);
    assert!(payload["reply"].as_str().expect("reply").contains("rephrase"));
}

#[test]
fn doctor_fails_when_template_assets_are_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    with_env(
        &[(
            "STOWQUOTE_ASSETS_QUOTE_TEMPLATES_DIR",
            dir.path().join("empty").to_str().expect("utf8 path"),
        )],
        || {
            let output = doctor::run(true);
            let payload = parse_payload(&output);
            assert_eq!(payload["overall_status"], "fail");

            let checks = payload["checks"].as_array().expect("checks array");
            let templates = checks
                .iter()
                .find(|check| check["name"] == "template_assets")
                .expect("template check present");
            assert_eq!(templates["status"], "fail");
        },
    );
}

#[test]
fn doctor_passes_with_complete_assets() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_template_assets(dir.path());

    with_env(
        &[(
            "STOWQUOTE_ASSETS_QUOTE_TEMPLATES_DIR",
            dir.path().to_str().expect("utf8 path"),
        )],
        || {
            let output = doctor::run(true);
            let payload = parse_payload(&output);
            assert_eq!(payload["overall_status"], "pass");
        },
    );
}

#[test]
fn smoke_runs_every_family_through_the_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_template_assets(dir.path());

    with_env(
        &[(
            "STOWQUOTE_ASSETS_QUOTE_TEMPLATES_DIR",
            dir.path().to_str().expect("utf8 path"),
        )],
        || {
            let result = smoke::run();
            assert_eq!(result.exit_code, 0, "expected all smoke checks to pass: {}", result.output);

            let payload = parse_payload(&result.output);
            let checks = payload["checks"].as_array().expect("checks array");
            assert_eq!(checks.len(), 3);
            assert!(checks.iter().all(|check| check["status"] == "pass"));
        },
    );
}

#[test]
fn smoke_fails_when_an_asset_is_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_template_assets(dir.path());
    fs::remove_file(dir.path().join("chemical.json")).expect("remove asset");

    with_env(
        &[(
            "STOWQUOTE_ASSETS_QUOTE_TEMPLATES_DIR",
            dir.path().to_str().expect("utf8 path"),
        )],
        || {
            let result = smoke::run();
            assert_eq!(result.exit_code, 1, "expected smoke failure: {}", result.output);
        },
    );
}

fn write_template_assets(dir: &std::path::Path) {
    for name in ["standard.json", "chemical.json", "open_yard.json"] {
        fs::write(dir.join(name), TEMPLATE_JSON).expect("write template asset");
    }
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|error| {
        panic!("expected JSON command output, got error {error} for: {output}")
    })
}

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn with_env(vars: &[(&str, &str)], run: impl FnOnce()) {
    let _guard = env_lock().lock().expect("env lock");

    let previous: Vec<(String, Option<String>)> =
        vars.iter().map(|(key, _)| ((*key).to_string(), env::var(key).ok())).collect();

    for (key, value) in vars {
        env::set_var(key, value);
    }

    run();

    for (key, value) in previous {
        match value {
            Some(value) => env::set_var(&key, value),
            None => env::remove_var(&key),
        }
    }
}
