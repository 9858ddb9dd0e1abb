//! Configuration management for the interview coach

use crate::error::{InterviewCoachError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub speech: SpeechConfig,
    pub interview: InterviewConfig,
    pub documents: DocumentConfig,
    pub reports: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    pub hr_question_count: usize,
    pub technical_question_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub max_file_size_mb: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub reports_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let reports_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".interview-coach")
            .join("reports");

        Self {
            llm: LlmConfig {
                endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-1.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                timeout_secs: 120,
            },
            speech: SpeechConfig {
                endpoint: "https://api.deepgram.com/v1/listen".to_string(),
                model: "nova-2".to_string(),
                api_key_env: "DEEPGRAM_API_KEY".to_string(),
                timeout_secs: 60,
            },
            interview: InterviewConfig {
                hr_question_count: 5,
                technical_question_count: 5,
            },
            documents: DocumentConfig {
                max_file_size_mb: 10,
            },
            reports: ReportConfig { reports_dir },
        }
    }
}

impl LlmConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl SpeechConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                InterviewCoachError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            InterviewCoachError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("interview-coach")
            .join("config.toml")
    }

    pub fn reports_dir(&self) -> &PathBuf {
        &self.reports.reports_dir
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.documents.max_file_size_mb * 1024 * 1024
    }
}
