//! Ordered two-tier model fallback with per-attempt timeout.
//!
//! Each attempt resolves to an explicit `Result`; control never flows through
//! a raised error. Transient failures (timeout, quota, transport) move the
//! chain to the next tier; a hard failure stops it. Whatever happens, the
//! caller receives a reply string and never a raw collaborator error.

use std::time::Duration;

use stowquote_core::config::NarrativeConfig;
use tracing::warn;

use crate::client::{NarrativeClient, NarrativeError};

/// Returned when every tier fails. The chat client never sees a raw error.
pub const APOLOGY_REPLY: &str =
    "Sorry, I couldn't process that right now. Please try again in a moment.";

pub struct FallbackChain<C> {
    client: C,
    tiers: Vec<String>,
    attempt_timeout: Duration,
}

impl<C: NarrativeClient> FallbackChain<C> {
    /// Fixed two-step chain: primary tier, then one fallback tier. Not an
    /// unbounded retry loop.
    pub fn new(
        client: C,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            client,
            tiers: vec![primary_model.into(), fallback_model.into()],
            attempt_timeout,
        }
    }

    pub fn from_config(client: C, config: &NarrativeConfig) -> Self {
        Self::new(
            client,
            config.primary_model.clone(),
            config.fallback_model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Resolves a reply, falling back across tiers on transient failure and
    /// degrading to the apology reply on total failure.
    pub async fn reply(&self, instruction: &str, user_text: &str) -> String {
        for model in &self.tiers {
            let attempt = tokio::time::timeout(
                self.attempt_timeout,
                self.client.complete(model, instruction, user_text),
            )
            .await;

            let outcome: Result<String, NarrativeError> = match attempt {
                Ok(result) => result,
                Err(_elapsed) => Err(NarrativeError::Timeout {
                    seconds: self.attempt_timeout.as_secs(),
                }),
            };

            match outcome {
                Ok(text) => return text,
                Err(error) if error.is_transient() => {
                    warn!(model = %model, error = %error, "narrative tier failed, trying next");
                }
                Err(error) => {
                    warn!(model = %model, error = %error, "narrative hard failure, giving up");
                    break;
                }
            }
        }

        APOLOGY_REPLY.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::client::{NarrativeClient, NarrativeError};

    use super::{FallbackChain, APOLOGY_REPLY};

    /// Scripted collaborator: pops one outcome per call and records the
    /// models it was asked for.
    struct ScriptedClient {
        outcomes: Mutex<Vec<Result<String, NarrativeError>>>,
        calls: Mutex<Vec<String>>,
        delay: Option<Duration>,
    }

    impl ScriptedClient {
        fn new(outcomes: Vec<Result<String, NarrativeError>>) -> Self {
            Self { outcomes: Mutex::new(outcomes), calls: Mutex::new(Vec::new()), delay: None }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl NarrativeClient for ScriptedClient {
        async fn complete(
            &self,
            model: &str,
            _instruction: &str,
            _user_text: &str,
        ) -> Result<String, NarrativeError> {
            self.calls.lock().expect("lock").push(model.to_owned());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let mut outcomes = self.outcomes.lock().expect("lock");
            if outcomes.is_empty() {
                Err(NarrativeError::Http("script exhausted".into()))
            } else {
                outcomes.remove(0)
            }
        }
    }

    fn chain(client: ScriptedClient) -> FallbackChain<ScriptedClient> {
        FallbackChain::new(client, "tier-pro", "tier-flash", Duration::from_secs(2))
    }

    #[tokio::test]
    async fn primary_success_needs_no_fallback() {
        let chain = chain(ScriptedClient::new(vec![Ok("all good".into())]));
        assert_eq!(chain.reply("instr", "question").await, "all good");
        assert_eq!(chain.client.calls(), vec!["tier-pro"]);
    }

    #[tokio::test]
    async fn quota_error_falls_back_to_the_second_tier() {
        let chain = chain(ScriptedClient::new(vec![
            Err(NarrativeError::Quota("resource exhausted".into())),
            Ok("from the fallback tier".into()),
        ]));

        assert_eq!(chain.reply("instr", "question").await, "from the fallback tier");
        assert_eq!(chain.client.calls(), vec!["tier-pro", "tier-flash"]);
    }

    #[tokio::test]
    async fn total_failure_degrades_to_the_apology() {
        let chain = chain(ScriptedClient::new(vec![
            Err(NarrativeError::Http("boom".into())),
            Err(NarrativeError::Quota("still broken".into())),
        ]));

        assert_eq!(chain.reply("instr", "question").await, APOLOGY_REPLY);
        assert_eq!(chain.client.calls(), vec!["tier-pro", "tier-flash"]);
    }

    #[tokio::test]
    async fn hard_failure_stops_the_chain_immediately() {
        let chain = chain(ScriptedClient::new(vec![
            Err(NarrativeError::InvalidResponse("no candidates".into())),
            Ok("never reached".into()),
        ]));

        assert_eq!(chain.reply("instr", "question").await, APOLOGY_REPLY);
        assert_eq!(chain.client.calls(), vec!["tier-pro"]);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_tiers_are_bounded_by_the_attempt_timeout() {
        let client = ScriptedClient::new(vec![
            Ok("too late to matter".into()),
            Ok("fast tier answer".into()),
        ])
        .with_delay(Duration::from_secs(30));

        let chain = FallbackChain::new(client, "tier-pro", "tier-flash", Duration::from_secs(2));

        // Both attempts sleep past the timeout budget, so neither answer
        // lands and the chain degrades to the apology.
        assert_eq!(chain.reply("instr", "question").await, APOLOGY_REPLY);
        assert_eq!(chain.client.calls(), vec!["tier-pro", "tier-flash"]);
    }
}
