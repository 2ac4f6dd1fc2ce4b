//! HTTP client for a `generateContent`-style generative API.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::client::{NarrativeClient, NarrativeError};

#[derive(Clone)]
pub struct GenerativeHttpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerativeHttpClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: SecretString,
        timeout_secs: u64,
    ) -> Result<Self, NarrativeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|error| NarrativeError::Http(error.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key,
            timeout_secs,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    fn classify_status(status: reqwest::StatusCode, body: &str) -> NarrativeError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || body.contains("RESOURCE_EXHAUSTED")
            || body.contains("quota")
        {
            NarrativeError::Quota(format!("status {status}"))
        } else {
            NarrativeError::Http(format!("status {status}"))
        }
    }
}

#[async_trait]
impl NarrativeClient for GenerativeHttpClient {
    async fn complete(
        &self,
        model: &str,
        instruction: &str,
        user_text: &str,
    ) -> Result<String, NarrativeError> {
        let body = json!({
            "system_instruction": { "parts": [{ "text": instruction }] },
            "contents": [{ "role": "user", "parts": [{ "text": user_text }] }],
        });

        let response = self
            .http
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    NarrativeError::Timeout { seconds: self.timeout_secs }
                } else {
                    NarrativeError::Http(error.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status(status, &body));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|error| NarrativeError::InvalidResponse(error.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                NarrativeError::InvalidResponse("response carried no text candidate".to_owned())
            })
    }
}
