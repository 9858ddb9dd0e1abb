//! Resume structuring module
//! Turns extracted document text into structured resume data

pub mod parser;
pub mod skill_matcher;

pub use parser::ResumeParser;
pub use skill_matcher::SkillMatcher;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured resume, created once per uploaded document and held for the
/// duration of a practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub raw_text: String,
    /// Matched skill terms, deduplicated, casing as matched.
    pub skills: Vec<String>,
    pub contact: ContactInfo,
    /// Section name -> joined content block. An ordered map keeps prompt
    /// preparation deterministic for identical resume data.
    pub sections: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}
