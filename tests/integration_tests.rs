//! Integration tests for the interview coach

use interview_coach::error::Result;
use interview_coach::interview::{AnswerEvaluator, PerformanceLevel, QuestionGenerator, QuestionKind};
use interview_coach::llm::LlmProvider;
use interview_coach::output::{write_artifacts, Report};
use interview_coach::resume::{parser, ResumeParser};
use interview_coach::{InterviewCoachError, InterviewSession};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

fn resume_parser() -> ResumeParser {
    ResumeParser::new(10 * 1024 * 1024).unwrap()
}

/// Pops one scripted response per completion call.
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

#[tokio::test]
async fn test_resume_parsing_from_txt() {
    let path = Path::new("tests/fixtures/sample_resume.txt");
    let resume = resume_parser().parse(path).await.unwrap();

    assert_eq!(
        resume.contact.email.as_deref(),
        Some("john.doe@example.com")
    );
    assert_eq!(resume.contact.phone.as_deref(), Some("(555) 123-4567"));
    assert!(resume.skills.contains(&"Python".to_string()));
    assert!(resume.skills.contains(&"React".to_string()));
    assert!(resume.skills.contains(&"Node.js".to_string()));
    assert!(resume.sections.contains_key("summary"));
    assert!(resume.sections.contains_key("skills"));
    assert!(resume.sections.contains_key("experience"));
    assert!(resume.sections.contains_key("education"));
    assert!(resume.sections.contains_key("projects"));
    assert_eq!(
        parser::detect_candidate_name(&resume.raw_text).as_deref(),
        Some("John Doe")
    );
}

#[tokio::test]
async fn test_resume_parsing_from_markdown() {
    let path = Path::new("tests/fixtures/sample_resume.md");
    let resume = resume_parser().parse(path).await.unwrap();

    // Markdown formatting must not leak into the extracted text.
    assert!(!resume.raw_text.contains("**"));
    assert!(!resume.raw_text.contains("##"));
    assert_eq!(
        parser::detect_candidate_name(&resume.raw_text).as_deref(),
        Some("John Doe")
    );
    assert!(resume.skills.contains(&"Rust".to_string()));
    assert!(resume.sections.contains_key("experience"));
    assert!(resume.sections.contains_key("education"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let path = Path::new("tests/fixtures/unsupported.xyz");
    let result = resume_parser().parse(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let path = Path::new("tests/fixtures/nonexistent.txt");
    let result = resume_parser().parse(path).await;
    assert!(result.is_err());
}

/// Parse the fixture resume and run a scripted HR round end to end.
async fn evaluated_hr_session() -> InterviewSession {
    let path = Path::new("tests/fixtures/sample_resume.txt");
    let resume = resume_parser().parse(path).await.unwrap();

    let mut session = InterviewSession::new();
    session.set_resume(resume.clone());

    let generator = QuestionGenerator::new(ScriptedLlm::new(&[
        "1. Tell me about a time you led a team through a difficult project.\n\
         2. What are your long term career goals in engineering?",
    ]));
    let questions = generator
        .generate(&resume, QuestionKind::Hr, 2)
        .await
        .unwrap();
    assert_eq!(questions.len(), 2);
    session.set_questions(QuestionKind::Hr, questions);

    session.record_answer(
        QuestionKind::Hr,
        "I led four engineers through a payments migration and kept the team unblocked.".to_string(),
    );
    session.record_answer(
        QuestionKind::Hr,
        "I want to grow into a staff engineer role and mentor newer developers.".to_string(),
    );

    let evaluator = AnswerEvaluator::new(ScriptedLlm::new(&[
        "Score: 8/10\nStrengths: concrete ownership, clear narrative\nAreas for Improvement: quantify the outcome\nFeedback: good leadership story\nOverall Assessment: strong",
        "Score: 7/10\nStrengths: direction, honesty\nAreas for Improvement: tie goals to the role\nFeedback: solid but generic\nOverall Assessment: strong",
    ]));
    let evaluation = evaluator
        .evaluate_round(&session.qa_pairs(QuestionKind::Hr))
        .await
        .unwrap();
    session.set_evaluation(QuestionKind::Hr, evaluation);

    session
}

#[tokio::test]
async fn test_interview_flow_end_to_end() {
    let session = evaluated_hr_session().await;

    let evaluation = session.evaluation(QuestionKind::Hr).unwrap();
    assert_eq!(evaluation.total_questions, 2);
    assert!((evaluation.average_score - 7.5).abs() < f64::EPSILON);
    assert_eq!(evaluation.performance_level, PerformanceLevel::Good);

    let report = Report::from_session(&session).unwrap();
    assert_eq!(report.candidate_info.name, "John Doe");
    assert_eq!(report.candidate_info.email, "john.doe@example.com");
    assert_eq!(report.interview_summary.total_questions, 2);
    assert_eq!(report.interview_summary.rounds_completed, vec!["HR Round"]);
    assert_eq!(report.interview_summary.average_scores.hr_round, Some(7.5));
    assert!(report.interview_summary.average_scores.technical_round.is_none());
    assert!((report.overall_assessment.overall_score - 7.5).abs() < f64::EPSILON);
    assert_eq!(
        report.overall_assessment.recommendation,
        "Good candidate – Recommended"
    );
    assert!(report.detailed_evaluations.technical_round.is_none());
    assert!(report.charts.contains_key("score_comparison"));
}

#[tokio::test]
async fn test_report_artifacts_written_to_disk() {
    let session = evaluated_hr_session().await;
    let report = Report::from_session(&session).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(&report, dir.path()).unwrap();

    assert!(paths.json.exists());
    assert!(paths.pdf.exists());
    let json_name = paths.json.file_name().unwrap().to_string_lossy().into_owned();
    assert!(json_name.starts_with("interview_report_"));
    assert!(json_name.ends_with(".json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert_eq!(json["candidate_info"]["name"], "John Doe");
    assert_eq!(json["interview_summary"]["average_scores"]["hr_round"], 7.5);
    assert!(json["detailed_evaluations"]["technical_round"].is_null());
    assert!(json["charts"]["score_comparison"]
        .as_str()
        .unwrap()
        .contains("HR Round"));
    assert_eq!(
        json["overall_assessment"]["recommendation"],
        "Good candidate – Recommended"
    );

    // The PDF artifact must at least be a real PDF file.
    let pdf_bytes = std::fs::read(&paths.pdf).unwrap();
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generation_failure_surfaces_as_error() {
    let path = Path::new("tests/fixtures/sample_resume.txt");
    let resume = resume_parser().parse(path).await.unwrap();

    let generator = QuestionGenerator::new(ScriptedLlm::new(&[]));
    let result = generator.generate(&resume, QuestionKind::Technical, 3).await;
    assert!(matches!(result, Err(InterviewCoachError::Generation(_))));
}
