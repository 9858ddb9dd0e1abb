//! Question records and the classification rule tables

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "HR")]
    Hr,
    Technical,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Hr => "HR",
            QuestionKind::Technical => "Technical",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub category: String,
}

/// A keyword rule: any contained keyword assigns the label. Rules are
/// evaluated top to bottom and the first hit wins.
type CategoryRule = (&'static [&'static str], &'static str);

const DIFFICULTY_RULES: &[(&[&str], Difficulty)] = &[
    (
        &["explain", "describe", "analyze", "compare", "evaluate"],
        Difficulty::Hard,
    ),
    (
        &["what", "how", "why", "when", "where"],
        Difficulty::Medium,
    ),
];

const HR_CATEGORY_RULES: &[CategoryRule] = &[
    (&["team", "teamwork", "collaboration"], "Teamwork"),
    (&["lead", "leadership", "manage"], "Leadership"),
    (&["problem", "challenge", "difficult"], "Problem Solving"),
    (&["goal", "career", "future"], "Career Goals"),
];
const HR_DEFAULT_CATEGORY: &str = "General HR";

const TECHNICAL_CATEGORY_RULES: &[CategoryRule] = &[
    (&["code", "programming", "algorithm"], "Programming"),
    (&["database", "sql", "data"], "Database"),
    (&["system", "architecture", "design"], "System Design"),
    (&["framework", "library", "tool"], "Frameworks & Tools"),
];
const TECHNICAL_DEFAULT_CATEGORY: &str = "General Technical";

// Loose substring matching: "teamwork" in a question also hits "team".
fn contains_any(question_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| question_lower.contains(keyword))
}

pub fn assess_difficulty(question: &str) -> Difficulty {
    let lower = question.to_lowercase();
    for (keywords, difficulty) in DIFFICULTY_RULES {
        if contains_any(&lower, keywords) {
            return *difficulty;
        }
    }
    Difficulty::Easy
}

pub fn categorize(question: &str, kind: QuestionKind) -> String {
    let lower = question.to_lowercase();
    let (rules, default) = match kind {
        QuestionKind::Hr => (HR_CATEGORY_RULES, HR_DEFAULT_CATEGORY),
        QuestionKind::Technical => (TECHNICAL_CATEGORY_RULES, TECHNICAL_DEFAULT_CATEGORY),
    };

    for (keywords, category) in rules {
        if contains_any(&lower, keywords) {
            return (*category).to_string();
        }
    }
    default.to_string()
}
