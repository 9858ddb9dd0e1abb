//! Error handling for the interview coach application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterviewCoachError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document is empty: {0}")]
    EmptyDocument(String),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("Question generation failed: {0}")]
    Generation(String),

    #[error("Answer evaluation failed: {0}")]
    Evaluation(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Report write failed: {0}")]
    ReportWrite(String),

    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, InterviewCoachError>;

/// Transport-level failures surface as LLM API errors; the calling
/// component wraps them into Generation/Evaluation/Transcription.
impl From<reqwest::Error> for InterviewCoachError {
    fn from(err: reqwest::Error) -> Self {
        InterviewCoachError::LlmApi(err.to_string())
    }
}
