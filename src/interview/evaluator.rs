//! Answer evaluation: LLM scoring plus round aggregation

use crate::error::{InterviewCoachError, Result};
use crate::interview::question::QuestionKind;
use crate::llm::{LlmProvider, PromptTemplates};
use log::{debug, error, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scored answer, parsed from the model's labeled response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub score: f64,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub feedback: String,
    pub overall_assessment: String,
}

impl Default for AnswerEvaluation {
    fn default() -> Self {
        Self {
            score: 0.0,
            strengths: Vec::new(),
            areas_for_improvement: Vec::new(),
            feedback: String::new(),
            overall_assessment: String::new(),
        }
    }
}

/// A full round of evaluations with derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEvaluation {
    pub evaluations: Vec<AnswerEvaluation>,
    pub average_score: f64,
    pub total_questions: usize,
    pub overall_feedback: String,
    pub performance_level: PerformanceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    /// Band edges resolve to the higher band: 7.0 is Good, not Average.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            PerformanceLevel::Excellent
        } else if score >= 7.0 {
            PerformanceLevel::Good
        } else if score >= 5.5 {
            PerformanceLevel::Average
        } else if score >= 4.0 {
            PerformanceLevel::BelowAverage
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::BelowAverage => "Below Average",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One collected question/answer pair, as consumed by round evaluation
/// and the evaluate subcommand's input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

pub struct AnswerEvaluator<P> {
    llm: P,
    templates: PromptTemplates,
}

impl<P: LlmProvider> AnswerEvaluator<P> {
    pub fn new(llm: P) -> Self {
        Self {
            llm,
            templates: PromptTemplates::default(),
        }
    }

    /// Score a single answer via the LLM.
    pub async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        kind: QuestionKind,
    ) -> Result<AnswerEvaluation> {
        debug!("Evaluating {} answer ({} chars)", kind, answer.len());

        let prompt = self.templates.render_evaluation_prompt(question, answer, kind);
        let response = self.llm.complete(&prompt).await.map_err(|e| {
            error!("Answer evaluation failed: {}", e);
            InterviewCoachError::Evaluation(format!("Failed to evaluate answer: {}", e))
        })?;

        Ok(parse_evaluation(response.trim()))
    }

    /// Evaluate every pair in input order. A single failure aborts the
    /// round; an empty round yields zeroed statistics.
    pub async fn evaluate_round(&self, qa_pairs: &[QaPair]) -> Result<RoundEvaluation> {
        info!("Evaluating interview round with {} answers", qa_pairs.len());

        let mut evaluations = Vec::with_capacity(qa_pairs.len());
        let mut total_score = 0.0;

        for qa in qa_pairs {
            let evaluation = self
                .evaluate_answer(&qa.question, &qa.answer, qa.kind)
                .await?;
            total_score += evaluation.score;
            evaluations.push(evaluation);
        }

        let average = if qa_pairs.is_empty() {
            0.0
        } else {
            total_score / qa_pairs.len() as f64
        };

        let overall_feedback = generate_overall_feedback(&evaluations, average);
        info!("Round evaluated, average score {:.2}", average);

        Ok(RoundEvaluation {
            evaluations,
            average_score: (average * 100.0).round() / 100.0,
            total_questions: qa_pairs.len(),
            overall_feedback,
            performance_level: PerformanceLevel::from_score(average),
        })
    }
}

/// The current target for continuation lines in the model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Strengths,
    Areas,
    Feedback,
    Overall,
}

/// Line-oriented parse of the labeled evaluation format. Label lines set
/// the current section and seed its content; later unlabeled lines extend
/// whichever section was seen last (comma-split for the list sections,
/// space-appended for the string sections). Lines before any label are
/// ignored, and a missing or malformed score stays 0.
pub fn parse_evaluation(text: &str) -> AnswerEvaluation {
    let score_pattern = Regex::new(r"(\d+(?:\.\d+)?)/10").expect("Invalid score regex");

    let mut evaluation = AnswerEvaluation::default();
    let mut current_section: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("Score:") {
            if let Some(captures) = score_pattern.captures(line) {
                if let Ok(score) = captures[1].parse::<f64>() {
                    evaluation.score = score;
                }
            }
        } else if let Some(rest) = line.strip_prefix("Strengths:") {
            current_section = Some(Section::Strengths);
            let content = rest.trim();
            if !content.is_empty() {
                evaluation.strengths = split_items(content);
            }
        } else if let Some(rest) = line.strip_prefix("Areas for Improvement:") {
            current_section = Some(Section::Areas);
            let content = rest.trim();
            if !content.is_empty() {
                evaluation.areas_for_improvement = split_items(content);
            }
        } else if let Some(rest) = line.strip_prefix("Feedback:") {
            current_section = Some(Section::Feedback);
            evaluation.feedback = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Overall Assessment:") {
            current_section = Some(Section::Overall);
            evaluation.overall_assessment = rest.trim().to_string();
        } else {
            match current_section {
                Some(Section::Strengths) => {
                    evaluation.strengths.extend(split_items(line));
                }
                Some(Section::Areas) => {
                    evaluation.areas_for_improvement.extend(split_items(line));
                }
                Some(Section::Feedback) => {
                    evaluation.feedback.push(' ');
                    evaluation.feedback.push_str(line);
                }
                Some(Section::Overall) => {
                    evaluation.overall_assessment.push(' ');
                    evaluation.overall_assessment.push_str(line);
                }
                None => {}
            }
        }
    }

    evaluation
}

fn split_items(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}

/// Narrative summary from the most frequent strength and improvement
/// strings across the round, plus the performance band.
fn generate_overall_feedback(evaluations: &[AnswerEvaluation], average: f64) -> String {
    if evaluations.is_empty() {
        return "No evaluations available.".to_string();
    }

    let all_strengths: Vec<String> = evaluations
        .iter()
        .flat_map(|evaluation| evaluation.strengths.iter().cloned())
        .collect();
    let all_improvements: Vec<String> = evaluations
        .iter()
        .flat_map(|evaluation| evaluation.areas_for_improvement.iter().cloned())
        .collect();

    let mut feedback_parts = Vec::new();

    let common_strengths = most_common(&all_strengths, 3);
    if !common_strengths.is_empty() {
        feedback_parts.push(format!("Key strengths: {}", common_strengths.join(", ")));
    }

    let common_improvements = most_common(&all_improvements, 3);
    if !common_improvements.is_empty() {
        feedback_parts.push(format!(
            "Areas to focus on: {}",
            common_improvements.join(", ")
        ));
    }

    feedback_parts.push(format!(
        "Overall performance: {}",
        PerformanceLevel::from_score(average)
    ));

    format!("{}.", feedback_parts.join(". "))
}

/// Highest-count items first; ties keep first-seen order.
fn most_common(items: &[String], limit: usize) -> Vec<String> {
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match order.get(item.as_str()) {
            Some(&index) => counts[index].1 += 1,
            None => {
                order.insert(item.as_str(), counts.len());
                counts.push((item.clone(), 1));
            }
        }
    }

    // Stable sort keeps insertion order between equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(item, _)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedLlm {
        responses: Mutex<VecDeque<String>>,
    }

    impl ScriptedLlm {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            }
        }
    }

    impl LlmProvider for ScriptedLlm {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| InterviewCoachError::LlmApi("no scripted response".to_string()))
        }
    }

    fn qa(question: &str, answer: &str) -> QaPair {
        QaPair {
            question: question.to_string(),
            answer: answer.to_string(),
            kind: QuestionKind::Hr,
        }
    }

    #[test]
    fn test_parse_evaluation_round_trip() {
        let text = "Score: 8/10\nStrengths: clarity, depth\nAreas for Improvement: brevity\nFeedback: solid answer\nOverall Assessment: strong";
        let evaluation = parse_evaluation(text);

        assert_eq!(evaluation.score, 8.0);
        assert_eq!(evaluation.strengths, vec!["clarity", "depth"]);
        assert_eq!(evaluation.areas_for_improvement, vec!["brevity"]);
        assert_eq!(evaluation.feedback, "solid answer");
        assert_eq!(evaluation.overall_assessment, "strong");
    }

    #[test]
    fn test_parse_evaluation_fractional_score() {
        let evaluation = parse_evaluation("Score: 7.5/10");
        assert_eq!(evaluation.score, 7.5);
    }

    #[test]
    fn test_parse_evaluation_malformed_score_defaults_to_zero() {
        let evaluation = parse_evaluation("Score: excellent\nFeedback: nice");
        assert_eq!(evaluation.score, 0.0);
        assert_eq!(evaluation.feedback, "nice");
    }

    #[test]
    fn test_parse_evaluation_continuation_lines() {
        let text = "Strengths: clarity\ngood examples, confidence\nFeedback: solid answer\nwith good structure";
        let evaluation = parse_evaluation(text);

        assert_eq!(
            evaluation.strengths,
            vec!["clarity", "good examples", "confidence"]
        );
        assert_eq!(evaluation.feedback, "solid answer with good structure");
    }

    #[test]
    fn test_parse_evaluation_ignores_preamble() {
        let text = "Here is my assessment of the answer.\nScore: 6/10\nFeedback: decent";
        let evaluation = parse_evaluation(text);

        assert_eq!(evaluation.score, 6.0);
        assert_eq!(evaluation.feedback, "decent");
        assert!(evaluation.strengths.is_empty());
    }

    #[test]
    fn test_parse_evaluation_score_does_not_open_a_section() {
        // Lines between Score: and the first label are dropped.
        let text = "Score: 9/10\nan orphan line\nStrengths: focus";
        let evaluation = parse_evaluation(text);

        assert_eq!(evaluation.score, 9.0);
        assert_eq!(evaluation.strengths, vec!["focus"]);
        assert!(evaluation.feedback.is_empty());
    }

    #[test]
    fn test_performance_bands_resolve_edges_upward() {
        assert_eq!(PerformanceLevel::from_score(10.0), PerformanceLevel::Excellent);
        assert_eq!(PerformanceLevel::from_score(8.5), PerformanceLevel::Excellent);
        assert_eq!(PerformanceLevel::from_score(8.49), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_score(7.0), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_score(5.5), PerformanceLevel::Average);
        assert_eq!(PerformanceLevel::from_score(4.0), PerformanceLevel::BelowAverage);
        assert_eq!(
            PerformanceLevel::from_score(3.99),
            PerformanceLevel::NeedsImprovement
        );
        assert_eq!(
            PerformanceLevel::from_score(0.0),
            PerformanceLevel::NeedsImprovement
        );
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let items: Vec<String> = ["depth", "clarity", "depth", "focus", "clarity", "poise"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let top = most_common(&items, 3);
        assert_eq!(top, vec!["depth", "clarity", "focus"]);
    }

    #[tokio::test]
    async fn test_evaluate_round_empty_input() {
        let evaluator = AnswerEvaluator::new(ScriptedLlm::new(&[]));
        let round = evaluator.evaluate_round(&[]).await.unwrap();

        assert_eq!(round.average_score, 0.0);
        assert_eq!(round.total_questions, 0);
        assert_eq!(round.overall_feedback, "No evaluations available.");
        assert_eq!(round.performance_level, PerformanceLevel::NeedsImprovement);
    }

    #[tokio::test]
    async fn test_evaluate_round_aggregates_in_order() {
        let evaluator = AnswerEvaluator::new(ScriptedLlm::new(&[
            "Score: 8/10\nStrengths: clarity\nAreas for Improvement: brevity\nFeedback: good\nOverall Assessment: strong",
            "Score: 6/10\nStrengths: clarity\nAreas for Improvement: detail\nFeedback: fine\nOverall Assessment: decent",
        ]));

        let round = evaluator
            .evaluate_round(&[qa("Q1", "A1"), qa("Q2", "A2")])
            .await
            .unwrap();

        assert_eq!(round.total_questions, 2);
        assert_eq!(round.average_score, 7.0);
        assert_eq!(round.performance_level, PerformanceLevel::Good);
        assert_eq!(round.evaluations[0].score, 8.0);
        assert_eq!(round.evaluations[1].score, 6.0);
        assert_eq!(
            round.overall_feedback,
            "Key strengths: clarity. Areas to focus on: brevity, detail. Overall performance: Good."
        );
    }

    #[tokio::test]
    async fn test_evaluate_round_aborts_on_failure() {
        let evaluator = AnswerEvaluator::new(ScriptedLlm::new(&["Score: 8/10"]));
        let result = evaluator
            .evaluate_round(&[qa("Q1", "A1"), qa("Q2", "A2")])
            .await;

        assert!(matches!(
            result,
            Err(InterviewCoachError::Evaluation(_))
        ));
    }

    #[test]
    fn test_round_evaluation_field_names() {
        let round = RoundEvaluation {
            evaluations: vec![AnswerEvaluation::default()],
            average_score: 5.0,
            total_questions: 1,
            overall_feedback: "Overall performance: Average.".to_string(),
            performance_level: PerformanceLevel::BelowAverage,
        };
        let json = serde_json::to_value(&round).unwrap();

        assert_eq!(json["average_score"], 5.0);
        assert_eq!(json["total_questions"], 1);
        assert_eq!(json["performance_level"], "Below Average");
        assert!(json["evaluations"].is_array());
    }

    #[test]
    fn test_qa_pair_answers_file_round_trip() {
        // The format the evaluate subcommand reads from disk.
        let json = r#"[
            {"question": "Tell me about a conflict", "answer": "We talked it out", "type": "HR"},
            {"question": "Explain indexing", "answer": "B-trees", "type": "Technical"}
        ]"#;

        let pairs: Vec<QaPair> = serde_json::from_str(json).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].kind, QuestionKind::Hr);
        assert_eq!(pairs[1].kind, QuestionKind::Technical);
        assert_eq!(pairs[1].answer, "B-trees");

        let rendered = serde_json::to_value(&pairs).unwrap();
        assert_eq!(rendered[0]["type"], "HR");
        assert_eq!(rendered[1]["question"], "Explain indexing");
    }
}
