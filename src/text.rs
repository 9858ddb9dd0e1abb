//! Small text utilities shared across input and interview stages

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Collapse runs of spaces and blank lines, trimming each line. Applied
/// to transcripts and other free-form text before it enters a session.
pub fn normalize_whitespace(text: &str) -> String {
    let spaces = Regex::new(r" +").expect("Invalid whitespace regex");
    let newlines = Regex::new(r"\n+").expect("Invalid newline regex");

    let text = spaces.replace_all(text, " ");
    let text = newlines.replace_all(&text, "\n");

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Word count using Unicode segmentation rules.
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}
