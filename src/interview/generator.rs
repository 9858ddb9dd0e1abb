//! Resume-driven question generation over the LLM provider

use crate::error::{InterviewCoachError, Result};
use crate::interview::question::{assess_difficulty, categorize, QuestionKind, QuestionRecord};
use crate::llm::{LlmProvider, PromptTemplates};
use crate::resume::ResumeData;
use log::{error, info};
use regex::Regex;

pub struct QuestionGenerator<P> {
    llm: P,
    templates: PromptTemplates,
}

impl<P: LlmProvider> QuestionGenerator<P> {
    pub fn new(llm: P) -> Self {
        Self {
            llm,
            templates: PromptTemplates::default(),
        }
    }

    /// Generate one round of questions. A provider failure surfaces as a
    /// generation failure; the caller decides whether to try again.
    pub async fn generate(
        &self,
        resume: &ResumeData,
        kind: QuestionKind,
        count: usize,
    ) -> Result<Vec<QuestionRecord>> {
        info!("Generating {} {} questions", count, kind);

        let resume_text = prepare_prompt_text(resume);
        let prompt = self
            .templates
            .render_question_prompt(kind, &resume_text, count);

        let response = self.llm.complete(&prompt).await.map_err(|e| {
            error!("{} question generation failed: {}", kind, e);
            InterviewCoachError::Generation(format!(
                "Failed to generate {} questions: {}",
                kind, e
            ))
        })?;

        let questions = parse_questions(response.trim(), kind);
        info!("Parsed {} {} questions", questions.len(), kind);
        Ok(questions)
    }
}

/// Concatenate contact fields, titled sections, and the skill list into
/// the resume context handed to the model. Deterministic for identical
/// resume data; falls back to the raw text when nothing is structured.
pub fn prepare_prompt_text(resume: &ResumeData) -> String {
    let mut parts = Vec::new();

    if let Some(email) = &resume.contact.email {
        parts.push(format!("Email: {}", email));
    }
    if let Some(phone) = &resume.contact.phone {
        parts.push(format!("Phone: {}", phone));
    }

    for (name, content) in &resume.sections {
        parts.push(format!("{}: {}", title_case(name), content));
    }

    if !resume.skills.is_empty() {
        parts.push(format!("Skills: {}", resume.skills.join(", ")));
    }

    if parts.is_empty() && !resume.raw_text.is_empty() {
        parts.push(resume.raw_text.clone());
    }

    parts.join("\n\n")
}

/// Parse the model's response into question records: one per line,
/// numbering stripped, short noise lines discarded.
pub fn parse_questions(response: &str, kind: QuestionKind) -> Vec<QuestionRecord> {
    let numbering = Regex::new(r"^\d+\.\s*").expect("Invalid numbering regex");
    let mut questions = Vec::new();

    for line in response.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line = numbering.replace(line, "");
        if line.chars().count() > 10 {
            questions.push(QuestionRecord {
                text: line.to_string(),
                kind,
                difficulty: assess_difficulty(&line),
                category: categorize(&line, kind),
            });
        }
    }

    questions
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ContactInfo;
    use std::collections::BTreeMap;

    struct FixedLlm(&'static str);

    impl LlmProvider for FixedLlm {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingLlm;

    impl LlmProvider for FailingLlm {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(InterviewCoachError::LlmApi("quota exceeded".to_string()))
        }
    }

    fn sample_resume() -> ResumeData {
        let mut sections = BTreeMap::new();
        sections.insert("skills".to_string(), "Python, Docker".to_string());
        ResumeData {
            raw_text: "John Doe".to_string(),
            skills: vec!["Python".to_string(), "Docker".to_string()],
            contact: ContactInfo {
                email: Some("john@example.com".to_string()),
                phone: None,
            },
            sections,
        }
    }

    #[test]
    fn test_parse_strips_numbering_and_noise() {
        let raw = "1. Tell me about a challenge you overcame\n2. hi";
        let questions = parse_questions(raw, QuestionKind::Hr);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Tell me about a challenge you overcame");
        assert_eq!(questions[0].category, "Problem Solving");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let raw = "\n1. How would you design a rate limiter?\n\n\n2. Explain database indexing strategies\n";
        let questions = parse_questions(raw, QuestionKind::Technical);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "How would you design a rate limiter?");
        assert_eq!(questions[1].text, "Explain database indexing strategies");
        assert_eq!(questions[1].category, "Database");
    }

    #[test]
    fn test_parse_keeps_unnumbered_lines() {
        let raw = "Why did you choose systems programming?";
        let questions = parse_questions(raw, QuestionKind::Technical);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Why did you choose systems programming?");
    }

    #[test]
    fn test_prepare_prompt_text_is_deterministic() {
        let resume = sample_resume();
        let text = prepare_prompt_text(&resume);

        assert_eq!(
            text,
            "Email: john@example.com\n\nSkills: Python, Docker\n\nSkills: Python, Docker"
        );
        assert_eq!(text, prepare_prompt_text(&resume));
    }

    #[test]
    fn test_prepare_prompt_text_falls_back_to_raw() {
        let resume = ResumeData {
            raw_text: "plain resume body".to_string(),
            skills: Vec::new(),
            contact: ContactInfo::default(),
            sections: BTreeMap::new(),
        };
        assert_eq!(prepare_prompt_text(&resume), "plain resume body");
    }

    #[tokio::test]
    async fn test_generate_builds_records() {
        let generator = QuestionGenerator::new(FixedLlm(
            "1. Tell me about a team project\n2. What are your career goals going forward?",
        ));
        let questions = generator
            .generate(&sample_resume(), QuestionKind::Hr, 2)
            .await
            .unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind, QuestionKind::Hr);
        assert_eq!(questions[0].category, "Teamwork");
        assert_eq!(questions[1].category, "Career Goals");
    }

    #[tokio::test]
    async fn test_generate_wraps_provider_failure() {
        let generator = QuestionGenerator::new(FailingLlm);
        let result = generator
            .generate(&sample_resume(), QuestionKind::Technical, 5)
            .await;

        match result {
            Err(InterviewCoachError::Generation(message)) => {
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected generation failure, got {:?}", other.map(|q| q.len())),
        }
    }
}
