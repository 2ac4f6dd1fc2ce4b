use serde::Serialize;
use stowquote_core::chat::replies;
use stowquote_core::{default_router, normalize, RouteOutcome};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AskReport {
    command: &'static str,
    status: &'static str,
    matched: bool,
    normalized: String,
    reply: String,
}

/// Deterministic routing only: the CLI never calls the generative
/// collaborator, so unmatched input gets the static clarification reply.
pub fn run(message: &str) -> CommandResult {
    let normalized = normalize(message);

    let (matched, reply) = match default_router().route(&normalized) {
        RouteOutcome::Reply(reply) => (true, reply),
        RouteOutcome::Unmatched => (false, replies::CLARIFICATION.to_owned()),
    };

    let report = AskReport { command: "ask", status: "ok", matched, normalized, reply };

    match serde_json::to_string_pretty(&report) {
        Ok(output) => CommandResult::report(output),
        Err(error) => CommandResult::failure("ask", "serialization", error.to_string(), 1),
    }
}
