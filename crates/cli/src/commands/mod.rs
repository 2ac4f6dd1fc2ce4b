pub mod ask;
pub mod config;
pub mod doctor;
pub mod quote;
pub mod smoke;

use serde::Serialize;

/// Outcome of one CLI command: the payload to print and the process exit
/// code. Commands serialize their own typed reports; `failure` covers the
/// shared error shape.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct FailureReport<'a> {
    command: &'a str,
    status: &'static str,
    error_class: &'a str,
    message: String,
}

impl CommandResult {
    pub fn report(output: String) -> Self {
        Self { exit_code: 0, output }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = FailureReport {
            command,
            status: "error",
            error_class,
            message: message.into(),
        };

        let output = serde_json::to_string(&payload).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"{command}\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        });

        Self { exit_code, output }
    }
}
