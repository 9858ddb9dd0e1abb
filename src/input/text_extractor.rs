//! Text extraction from the supported resume formats

use crate::error::{InterviewCoachError, Result};
use pulldown_cmark::{html, Parser};
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(InterviewCoachError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            InterviewCoachError::Extraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

/// Reads the main document part out of the docx zip container.
///
/// Legacy `.doc` files are routed here as well; anything that is not a
/// zip archive surfaces an extraction error with the underlying message.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(InterviewCoachError::Io)?;

        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            InterviewCoachError::Extraction(format!(
                "Failed to open Word document '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                InterviewCoachError::Extraction(format!(
                    "No document body in '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                InterviewCoachError::Extraction(format!(
                    "Failed to read document body in '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        // Paragraph and line-break tags become newlines before the
        // remaining markup is stripped.
        let with_breaks = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t");

        Ok(strip_markup(&with_breaks))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(InterviewCoachError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)
            .await
            .map_err(InterviewCoachError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let with_breaks = html_output.replace("<br>", "\n").replace("</p>", "\n\n");
        Ok(strip_markup(&with_breaks))
    }
}

/// Drops every remaining tag, decodes the common entities, and trims the
/// lines. Shared by the markdown and docx paths.
fn strip_markup(input: &str) -> String {
    let re = regex::Regex::new(r"<[^>]*>").expect("Invalid markup regex");
    let stripped = re.replace_all(input, "");

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let lines: Vec<String> = decoded
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}
