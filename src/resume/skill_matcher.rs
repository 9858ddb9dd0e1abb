//! Skill extraction against a fixed, domain-grouped vocabulary

use crate::error::{InterviewCoachError, Result};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Matches resume text against the skill vocabulary in one pass.
pub struct SkillMatcher {
    matcher: AhoCorasick,
}

/// Skill terms grouped by domain. The groups are flattened into a single
/// automaton; the grouping only matters for maintenance.
fn skill_groups() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "languages",
            vec![
                "Python", "Java", "JavaScript", "C++", "C#", "PHP", "Ruby", "Go", "Rust",
                "Swift", "Kotlin",
            ],
        ),
        (
            "web frameworks",
            vec![
                "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring",
                "Laravel",
            ],
        ),
        (
            "markup and styling",
            vec!["HTML", "CSS", "Bootstrap", "jQuery", "SASS", "LESS"],
        ),
        (
            "data stores",
            vec!["SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Elasticsearch"],
        ),
        (
            "cloud and devops",
            vec![
                "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "Git", "GitHub",
                "GitLab",
            ],
        ),
        (
            "ml and analytics",
            vec!["Machine Learning", "AI", "Data Science", "Analytics", "Statistics"],
        ),
        (
            "soft skills",
            vec!["Project Management", "Leadership", "Communication", "Teamwork"],
        ),
        (
            "methodologies",
            vec!["Agile", "Scrum", "DevOps", "CI/CD", "Microservices"],
        ),
    ]
}

impl SkillMatcher {
    pub fn new() -> Result<Self> {
        let patterns: Vec<String> = skill_groups()
            .into_iter()
            .flat_map(|(_, terms)| terms)
            .map(|term| term.to_string())
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest) // Prefer longer matches
            .build(&patterns)
            .map_err(|e| {
                InterviewCoachError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { matcher })
    }

    /// Scan text for the configured skill terms. The result is a set:
    /// deduplicated by the exact matched text, casing as it appears in the
    /// input, in scan order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for mat in self.matcher.find_iter(text) {
            if !has_word_boundaries(text, mat.start(), mat.end()) {
                continue;
            }
            let matched = &text[mat.start()..mat.end()];
            if seen.insert(matched.to_string()) {
                skills.push(matched.to_string());
            }
        }

        skills
    }
}

/// Neighbouring alphanumeric characters disqualify a match, so "Go" does
/// not fire inside "Google" and "AI" stays out of "said".
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
}
