//! Resume parsing: section splitting plus contact and skill extraction

use crate::error::{InterviewCoachError, Result};
use crate::input::InputManager;
use crate::resume::{ContactInfo, ResumeData, SkillMatcher};
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Section header vocabulary, tested in order; the first phrase contained
/// in a short line wins and becomes the section key.
const SECTION_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "education",
    "academic background",
    "skills",
    "technical skills",
    "core competencies",
    "projects",
    "personal projects",
    "certifications",
    "certificates",
    "summary",
    "objective",
    "profile",
];

/// A header line has at most this many whitespace-separated tokens.
const MAX_HEADER_TOKENS: usize = 3;

pub struct ResumeParser {
    input: InputManager,
    skills: SkillMatcher,
    email_pattern: Regex,
    phone_pattern: Regex,
}

impl ResumeParser {
    pub fn new(max_file_size: u64) -> Result<Self> {
        let email_pattern = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .map_err(|e| {
                InterviewCoachError::Configuration(format!("Invalid email pattern: {}", e))
            })?;
        let phone_pattern =
            Regex::new(r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
                .map_err(|e| {
                    InterviewCoachError::Configuration(format!("Invalid phone pattern: {}", e))
                })?;

        Ok(Self {
            input: InputManager::new(max_file_size),
            skills: SkillMatcher::new()?,
            email_pattern,
            phone_pattern,
        })
    }

    /// Parse a resume document from disk.
    pub async fn parse(&self, path: &Path) -> Result<ResumeData> {
        info!("Parsing resume: {}", path.display());
        let text = self.input.extract_text(path).await?;

        if text.trim().is_empty() {
            return Err(InterviewCoachError::EmptyDocument(format!(
                "No text could be extracted from: {}",
                path.display()
            )));
        }

        Ok(self.parse_text(&text))
    }

    /// Structure already-extracted resume text.
    pub fn parse_text(&self, text: &str) -> ResumeData {
        let skills = self.skills.extract_skills(text);
        let contact = self.extract_contact_info(text);
        let sections = parse_sections(text);

        debug!(
            "Parsed resume: {} skills, {} sections, contact {}",
            skills.len(),
            sections.len(),
            if contact.is_empty() { "absent" } else { "found" }
        );

        ResumeData {
            raw_text: text.to_string(),
            skills,
            contact,
            sections,
        }
    }

    /// First email and first phone match are kept; no match leaves the
    /// field empty, which is a valid result rather than a failure.
    pub fn extract_contact_info(&self, text: &str) -> ContactInfo {
        ContactInfo {
            email: self
                .email_pattern
                .find(text)
                .map(|m| m.as_str().to_string()),
            phone: self
                .phone_pattern
                .find(text)
                .map(|m| m.as_str().to_string()),
        }
    }
}

/// Single top-to-bottom scan over the text lines. A trimmed line opens a
/// new section when it has at most three tokens and case-insensitively
/// contains one of the header phrases; the stored key is the phrase, not
/// the line. Blank lines are skipped. Content before the first header
/// accumulates under "other", and the final block is flushed at the end.
pub fn parse_sections(text: &str) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    let mut current_section = "other".to_string();
    let mut current_content: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        let header = if line.split_whitespace().count() <= MAX_HEADER_TOKENS {
            SECTION_HEADERS
                .iter()
                .find(|phrase| lower.contains(**phrase))
                .copied()
        } else {
            None
        };

        match header {
            Some(phrase) => {
                if !current_content.is_empty() {
                    sections.insert(current_section, current_content.join("\n"));
                    current_content = Vec::new();
                }
                current_section = phrase.to_string();
            }
            None => current_content.push(line),
        }
    }

    if !current_content.is_empty() {
        sections.insert(current_section, current_content.join("\n"));
    }

    sections
}

/// Best-effort display name for reports: an early, plausibly short line
/// that does not look like contact info or a bullet.
pub fn detect_candidate_name(text: &str) -> Option<String> {
    text.lines().take(5).map(str::trim).find_map(|line| {
        if line.len() > 5 && line.len() < 100 && !line.contains('@') && !line.starts_with('-') {
            Some(line.to_string())
        } else {
            None
        }
    })
}
