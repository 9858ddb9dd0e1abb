//! Deepgram-backed transcription of recorded answers

use crate::config::SpeechConfig;
use crate::error::{InterviewCoachError, Result};
use crate::text;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Turns recorded audio into answer text.
pub trait SpeechTranscriber {
    fn transcribe(
        &self,
        audio: &[u8],
        mime: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Pre-recorded transcription against the Deepgram listen endpoint.
pub struct DeepgramTranscriber {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ListenResponse {
    results: Option<ListenResults>,
}

#[derive(Debug, Deserialize)]
struct ListenResults {
    #[serde(default)]
    channels: Vec<ListenChannel>,
}

#[derive(Debug, Deserialize)]
struct ListenChannel {
    #[serde(default)]
    alternatives: Vec<ListenAlternative>,
}

#[derive(Debug, Deserialize)]
struct ListenAlternative {
    #[serde(default)]
    transcript: String,
}

impl DeepgramTranscriber {
    /// Build a transcriber if the configured key env var is set. A missing
    /// key is not an error: the caller runs text-only in that case.
    pub fn from_config(config: &SpeechConfig) -> Result<Option<Self>> {
        let api_key = match config.api_key() {
            Some(key) => key,
            None => {
                info!("{} not set, voice answers disabled", config.api_key_env);
                return Ok(None);
            }
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                InterviewCoachError::Configuration(format!(
                    "Failed to build speech HTTP client: {}",
                    e
                ))
            })?;

        Ok(Some(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }))
    }

    /// Read an audio file from disk and transcribe it.
    pub async fn transcribe_file(&self, path: &Path) -> Result<String> {
        let audio = tokio::fs::read(path).await?;
        let mime = mime_for_path(path);
        info!(
            "Transcribing {} ({} bytes, {})",
            path.display(),
            audio.len(),
            mime
        );
        self.transcribe(&audio, mime).await
    }
}

impl SpeechTranscriber for DeepgramTranscriber {
    async fn transcribe(&self, audio: &[u8], mime: &str) -> Result<String> {
        let url = format!("{}?model={}", self.endpoint, self.model);
        debug!("Sending {} audio bytes to {}", audio.len(), url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", mime)
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| {
                InterviewCoachError::Transcription(format!("Speech request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InterviewCoachError::Transcription(format!(
                "Speech API returned {}: {}",
                status, body
            )));
        }

        let listen: ListenResponse = response.json().await.map_err(|e| {
            InterviewCoachError::Transcription(format!("Malformed speech response: {}", e))
        })?;

        let transcript = extract_transcript(&listen).ok_or_else(|| {
            InterviewCoachError::Transcription(
                "Speech API returned an empty transcript".to_string(),
            )
        })?;

        Ok(text::normalize_whitespace(&transcript))
    }
}

fn extract_transcript(response: &ListenResponse) -> Option<String> {
    let transcript = &response
        .results
        .as_ref()?
        .channels
        .first()?
        .alternatives
        .first()?
        .transcript;

    if transcript.trim().is_empty() {
        None
    } else {
        Some(transcript.clone())
    }
}

/// Content type for an audio file, from its extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") | Some("mp4") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}
