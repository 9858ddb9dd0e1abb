//! Input manager for routing resume files to the right extractor

use crate::error::{InterviewCoachError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::path::Path;

pub struct InputManager {
    max_file_size: u64,
}

impl InputManager {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(InterviewCoachError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = std::fs::metadata(path)?.len();
        if size > self.max_file_size {
            warn!(
                "Rejecting {} ({} bytes over the {} byte limit)",
                path.display(),
                size - self.max_file_size,
                self.max_file_size
            );
            return Err(InterviewCoachError::InvalidInput(format!(
                "File exceeds the maximum size of {} bytes: {}",
                self.max_file_size,
                path.display()
            )));
        }

        // Route to the matching extractor. Unsupported extensions fail
        // before any extraction is attempted.
        let text = match detect_file_type(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx | FileType::Doc => {
                info!("Extracting text from Word document: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(InterviewCoachError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text)
    }
}

fn detect_file_type(path: &Path) -> FileType {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(FileType::from_extension)
        .unwrap_or(FileType::Unknown)
}
