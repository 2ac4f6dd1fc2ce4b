use serde::Serialize;
use stowquote_core::config::{AppConfig, LoadOptions};
use stowquote_core::document::TemplateStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_template_assets(&config));
            checks.push(check_narrative_readiness(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "template_assets",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "narrative_readiness",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let failed = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let overall_status = if failed { CheckStatus::Fail } else { CheckStatus::Pass };
    let summary = if failed {
        "doctor: one or more readiness checks failed".to_string()
    } else {
        "doctor: all readiness checks passed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_template_assets(config: &AppConfig) -> DoctorCheck {
    let store = TemplateStore::new(config.assets.quote_templates_dir.clone());
    let missing = store.missing_assets();

    if missing.is_empty() {
        DoctorCheck {
            name: "template_assets",
            status: CheckStatus::Pass,
            details: format!(
                "all category templates present under `{}`",
                config.assets.quote_templates_dir.display()
            ),
        }
    } else {
        let paths: Vec<String> =
            missing.iter().map(|path| path.display().to_string()).collect();
        DoctorCheck {
            name: "template_assets",
            status: CheckStatus::Fail,
            details: format!("missing template assets: {}", paths.join(", ")),
        }
    }
}

fn check_narrative_readiness(config: &AppConfig) -> DoctorCheck {
    if config.narrative_enabled() {
        DoctorCheck {
            name: "narrative_readiness",
            status: CheckStatus::Pass,
            details: format!(
                "generative fallback enabled ({} -> {})",
                config.narrative.primary_model, config.narrative.fallback_model
            ),
        }
    } else {
        DoctorCheck {
            name: "narrative_readiness",
            status: CheckStatus::Skipped,
            details: "no API key configured; chat fallback is the static clarification reply"
                .to_string(),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
