use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use bl_core::ports::AdviceGeneratorPort;

use crate::config::GeminiConfig;

/// Gemini `generateContent` client behind [`AdviceGeneratorPort`].
///
/// Errors (transport, non-2xx, empty candidates) surface as `Err`; the
/// fallback substitution lives in the application layer, not here.
pub struct GeminiAdviceClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiAdviceClient {
    pub fn new(endpoint: String, model: String, api_key: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            endpoint,
            model,
            api_key,
        })
    }

    /// Builds a client from config; `None` when no API key is configured.
    pub fn from_config(cfg: &GeminiConfig) -> Result<Option<Self>> {
        match &cfg.api_key {
            Some(key) => Self::new(
                cfg.endpoint.clone(),
                cfg.model.clone(),
                key.clone(),
                cfg.generation_timeout(),
            )
            .map(Some),
            None => Ok(None),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl AdviceGeneratorPort for GeminiAdviceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("send generateContent request")?;

        let status = response.status();
        if !status.is_success() {
            bail!("generateContent returned {status}");
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("decode generateContent response")?;

        let text = body
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            bail!("generateContent returned no text candidates");
        }

        debug!(model = %self.model, chars = text.len(), "generated advice text");
        Ok(text)
    }
}
