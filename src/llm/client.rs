//! HTTP client for the Gemini generateContent API

use crate::config::LlmConfig;
use crate::error::{InterviewCoachError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text-completion seam. Question generation and answer evaluation depend
/// only on this trait, so tests can script responses.
pub trait LlmProvider {
    fn complete(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
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

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Fails fast when the configured API key variable is not set.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            InterviewCoachError::Configuration(format!(
                "LLM API key not set; export {}",
                config.api_key_env
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                InterviewCoachError::Configuration(format!(
                    "Failed to build LLM HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl LlmProvider for GeminiClient {
    /// One request, one response. Failures surface to the caller, which
    /// owns any retry decision.
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            prompt.len()
        );
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .map(|detail| detail.message)
                .unwrap_or(body);
            return Err(InterviewCoachError::LlmApi(format!(
                "API returned {}: {}",
                status, message
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            InterviewCoachError::LlmApi(format!("Malformed API response: {}", e))
        })?;

        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(InterviewCoachError::LlmApi(
                "API response contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}
