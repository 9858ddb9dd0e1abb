//! Report assembly: aggregates session results into the report tree

use crate::error::Result;
use crate::interview::{PerformanceLevel, RoundEvaluation};
use crate::output::charts;
use crate::resume::{parser, ResumeData};
use crate::session::InterviewSession;
use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;

/// Complete interview report, serialized as-is into the JSON artifact.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Candidate identity and resume highlights
    pub candidate_info: CandidateInfo,

    /// Cross-round statistics
    pub interview_summary: InterviewSummary,

    /// Full per-answer evaluations for each round that ran
    pub detailed_evaluations: DetailedEvaluations,

    /// Overall score and hiring recommendation
    pub overall_assessment: OverallAssessment,

    /// Rule-derived improvement tips, in priority order
    pub recommendations: Vec<String>,

    /// Generation timestamp, RFC 3339
    pub generated_at: String,

    /// Named embeddable HTML charts
    pub charts: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_sections: String,
    pub education_sections: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewSummary {
    /// Questions answered across all completed rounds
    pub total_questions: usize,

    /// Average score per completed round
    pub average_scores: RoundScores,

    /// Performance band per completed round
    pub performance_levels: RoundLevels,

    /// Display names of the rounds that ran, in interview order
    pub rounds_completed: Vec<String>,

    /// Mean of the per-round averages; 0 when no round ran
    pub overall_average: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_round: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_round: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundLevels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_round: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_round: Option<PerformanceLevel>,
}

/// Skipped rounds serialize as explicit nulls here, unlike the summary
/// maps above which only carry the rounds that ran.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedEvaluations {
    pub hr_round: Option<RoundEvaluation>,
    pub technical_round: Option<RoundEvaluation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallAssessment {
    pub overall_score: f64,
    pub recommendation: String,
}

impl Report {
    /// Assemble the report from whatever the session completed.
    pub fn from_session(session: &InterviewSession) -> Result<Self> {
        let hr = session.hr_evaluation.as_ref();
        let technical = session.technical_evaluation.as_ref();

        let candidate_info = Self::create_candidate_info(session.resume.as_ref());
        let interview_summary = Self::create_interview_summary(hr, technical);
        let overall_assessment = Self::create_overall_assessment(hr, technical);
        let recommendations = Self::create_recommendations(hr, technical);
        let charts = charts::render_charts(hr, technical)?;

        Ok(Self {
            candidate_info,
            interview_summary,
            detailed_evaluations: DetailedEvaluations {
                hr_round: session.hr_evaluation.clone(),
                technical_round: session.technical_evaluation.clone(),
            },
            overall_assessment,
            recommendations,
            generated_at: Local::now().to_rfc3339(),
            charts,
        })
    }

    fn create_candidate_info(resume: Option<&ResumeData>) -> CandidateInfo {
        let name = resume
            .and_then(|r| parser::detect_candidate_name(&r.raw_text))
            .unwrap_or_else(|| "Unknown".to_string());
        let email = resume
            .and_then(|r| r.contact.email.clone())
            .unwrap_or_else(|| "Not provided".to_string());
        let phone = resume
            .and_then(|r| r.contact.phone.clone())
            .unwrap_or_else(|| "Not provided".to_string());

        CandidateInfo {
            name,
            email,
            phone,
            skills: resume.map(|r| r.skills.clone()).unwrap_or_default(),
            experience_sections: resume
                .and_then(|r| r.sections.get("experience").cloned())
                .unwrap_or_default(),
            education_sections: resume
                .and_then(|r| r.sections.get("education").cloned())
                .unwrap_or_default(),
        }
    }

    fn create_interview_summary(
        hr: Option<&RoundEvaluation>,
        technical: Option<&RoundEvaluation>,
    ) -> InterviewSummary {
        let mut total_questions = 0;
        let mut average_scores = RoundScores {
            hr_round: None,
            technical_round: None,
        };
        let mut performance_levels = RoundLevels {
            hr_round: None,
            technical_round: None,
        };
        let mut rounds_completed = Vec::new();

        if let Some(evaluation) = hr {
            total_questions += evaluation.total_questions;
            average_scores.hr_round = Some(evaluation.average_score);
            performance_levels.hr_round = Some(evaluation.performance_level);
            rounds_completed.push("HR Round".to_string());
        }

        if let Some(evaluation) = technical {
            total_questions += evaluation.total_questions;
            average_scores.technical_round = Some(evaluation.average_score);
            performance_levels.technical_round = Some(evaluation.performance_level);
            rounds_completed.push("Technical Round".to_string());
        }

        InterviewSummary {
            total_questions,
            overall_average: mean_of_present(&[
                average_scores.hr_round,
                average_scores.technical_round,
            ]),
            average_scores,
            performance_levels,
            rounds_completed,
        }
    }

    fn create_overall_assessment(
        hr: Option<&RoundEvaluation>,
        technical: Option<&RoundEvaluation>,
    ) -> OverallAssessment {
        let overall_score = mean_of_present(&[
            hr.map(|e| e.average_score),
            technical.map(|e| e.average_score),
        ]);

        OverallAssessment {
            overall_score,
            recommendation: recommendation_for_score(overall_score),
        }
    }

    /// HR tips first, then technical, then the generic pair only if
    /// neither threshold rule fired.
    fn create_recommendations(
        hr: Option<&RoundEvaluation>,
        technical: Option<&RoundEvaluation>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if let Some(evaluation) = hr {
            if evaluation.average_score < 6.0 {
                recommendations
                    .push("Focus on improving communication and interpersonal skills".to_string());
                recommendations.push("Practice behavioral interview questions".to_string());
            }
        }

        if let Some(evaluation) = technical {
            if evaluation.average_score < 6.0 {
                recommendations.push("Strengthen technical knowledge in core areas".to_string());
                recommendations
                    .push("Practice coding problems and system design questions".to_string());
            }
        }

        if recommendations.is_empty() {
            recommendations.push("Continue building on current strengths".to_string());
            recommendations.push("Consider advanced training in specialized areas".to_string());
        }

        recommendations
    }
}

fn mean_of_present(scores: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = scores.iter().flatten().copied().collect();
    if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    }
}

/// Deterministic banding of the overall score.
pub fn recommendation_for_score(score: f64) -> String {
    let recommendation = if score >= 8.0 {
        "Strong candidate – Highly recommended"
    } else if score >= 6.5 {
        "Good candidate – Recommended"
    } else if score >= 5.0 {
        "Average candidate – Consider for specific roles"
    } else {
        "Needs improvement – Not recommended at this time"
    };
    recommendation.to_string()
}
