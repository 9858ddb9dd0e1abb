//! Per-run interview session state

use crate::interview::{QaPair, QuestionKind, QuestionRecord, RoundEvaluation};
use crate::resume::ResumeData;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything accumulated over one practice run: the parsed resume, the
/// generated questions, the collected answers, and the per-round
/// evaluations. Created at session start and passed into each stage
/// explicitly; `reset` returns it to the just-created state.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub resume: Option<ResumeData>,
    pub hr_questions: Vec<QuestionRecord>,
    pub technical_questions: Vec<QuestionRecord>,
    pub hr_answers: Vec<String>,
    pub technical_answers: Vec<String>,
    pub hr_evaluation: Option<RoundEvaluation>,
    pub technical_evaluation: Option<RoundEvaluation>,
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new() -> Self {
        Self {
            resume: None,
            hr_questions: Vec::new(),
            technical_questions: Vec::new(),
            hr_answers: Vec::new(),
            technical_answers: Vec::new(),
            hr_evaluation: None,
            technical_evaluation: None,
            started_at: Utc::now(),
        }
    }

    /// Clear all accumulated state and restart the session clock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_resume(&mut self, resume: ResumeData) {
        self.resume = Some(resume);
    }

    pub fn set_questions(&mut self, kind: QuestionKind, questions: Vec<QuestionRecord>) {
        match kind {
            QuestionKind::Hr => self.hr_questions = questions,
            QuestionKind::Technical => self.technical_questions = questions,
        }
    }

    pub fn questions(&self, kind: QuestionKind) -> &[QuestionRecord] {
        match kind {
            QuestionKind::Hr => &self.hr_questions,
            QuestionKind::Technical => &self.technical_questions,
        }
    }

    pub fn record_answer(&mut self, kind: QuestionKind, answer: String) {
        match kind {
            QuestionKind::Hr => self.hr_answers.push(answer),
            QuestionKind::Technical => self.technical_answers.push(answer),
        }
    }

    /// Pair questions with the answers collected so far, in asked order.
    pub fn qa_pairs(&self, kind: QuestionKind) -> Vec<QaPair> {
        let answers = match kind {
            QuestionKind::Hr => &self.hr_answers,
            QuestionKind::Technical => &self.technical_answers,
        };

        self.questions(kind)
            .iter()
            .zip(answers.iter())
            .map(|(question, answer)| QaPair {
                question: question.text.clone(),
                answer: answer.clone(),
                kind,
            })
            .collect()
    }

    pub fn set_evaluation(&mut self, kind: QuestionKind, evaluation: RoundEvaluation) {
        match kind {
            QuestionKind::Hr => self.hr_evaluation = Some(evaluation),
            QuestionKind::Technical => self.technical_evaluation = Some(evaluation),
        }
    }

    pub fn evaluation(&self, kind: QuestionKind) -> Option<&RoundEvaluation> {
        match kind {
            QuestionKind::Hr => self.hr_evaluation.as_ref(),
            QuestionKind::Technical => self.technical_evaluation.as_ref(),
        }
    }

    pub fn rounds_completed(&self) -> usize {
        [&self.hr_evaluation, &self.technical_evaluation]
            .iter()
            .filter(|evaluation| evaluation.is_some())
            .count()
    }
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::{Difficulty, PerformanceLevel};

    fn question(text: &str, kind: QuestionKind) -> QuestionRecord {
        QuestionRecord {
            text: text.to_string(),
            kind,
            difficulty: Difficulty::Easy,
            category: "General HR".to_string(),
        }
    }

    fn round(average: f64) -> RoundEvaluation {
        RoundEvaluation {
            evaluations: Vec::new(),
            average_score: average,
            total_questions: 0,
            overall_feedback: String::new(),
            performance_level: PerformanceLevel::from_score(average),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = InterviewSession::new();

        assert!(session.resume.is_none());
        assert!(session.hr_questions.is_empty());
        assert!(session.technical_answers.is_empty());
        assert_eq!(session.rounds_completed(), 0);
    }

    #[test]
    fn test_qa_pairs_zip_in_asked_order() {
        let mut session = InterviewSession::new();
        session.set_questions(
            QuestionKind::Hr,
            vec![
                question("Tell me about yourself", QuestionKind::Hr),
                question("Why this role?", QuestionKind::Hr),
            ],
        );
        session.record_answer(QuestionKind::Hr, "I am an engineer".to_string());
        session.record_answer(QuestionKind::Hr, "Growth".to_string());

        let pairs = session.qa_pairs(QuestionKind::Hr);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].question, "Tell me about yourself");
        assert_eq!(pairs[0].answer, "I am an engineer");
        assert_eq!(pairs[1].answer, "Growth");
        assert_eq!(pairs[0].kind, QuestionKind::Hr);
    }

    #[test]
    fn test_rounds_completed_counts_present_evaluations() {
        let mut session = InterviewSession::new();
        assert_eq!(session.rounds_completed(), 0);

        session.set_evaluation(QuestionKind::Hr, round(7.2));
        assert_eq!(session.rounds_completed(), 1);

        session.set_evaluation(QuestionKind::Technical, round(6.1));
        assert_eq!(session.rounds_completed(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = InterviewSession::new();
        session.set_questions(
            QuestionKind::Technical,
            vec![question("Explain indexing", QuestionKind::Technical)],
        );
        session.record_answer(QuestionKind::Technical, "B-trees".to_string());
        session.set_evaluation(QuestionKind::Technical, round(8.0));

        session.reset();

        assert!(session.technical_questions.is_empty());
        assert!(session.technical_answers.is_empty());
        assert!(session.technical_evaluation.is_none());
        assert_eq!(session.rounds_completed(), 0);
    }
}
