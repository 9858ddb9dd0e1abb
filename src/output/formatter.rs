//! Console rendering and report artifact writing

use crate::error::{InterviewCoachError, Result};
use crate::interview::RoundEvaluation;
use crate::output::pdf;
use crate::output::report::Report;
use chrono::Local;
use colored::{Color, Colorize};
use log::info;
use std::path::{Path, PathBuf};

/// Paths of the artifacts written for one report.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub pdf: PathBuf,
}

/// Console formatter with optional color
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: f64) -> Color {
        if score >= 8.0 {
            Color::Green
        } else if score >= 6.5 {
            Color::BrightGreen
        } else if score >= 5.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    /// Round results shown right after a round finishes.
    pub fn format_round(&self, round_name: &str, evaluation: &RoundEvaluation) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("{} Results", round_name), 2));
        let average = format!(
            "Average Score: {:.2}/10 ({})",
            evaluation.average_score, evaluation.performance_level
        );
        output.push_str(&format!(
            "{}\n",
            self.colorize(&average, Self::score_color(evaluation.average_score))
        ));
        output.push_str(&format!("{}\n", evaluation.overall_feedback));

        for (index, answer) in evaluation.evaluations.iter().enumerate() {
            output.push_str(&self.format_header(
                &format!("Question {}: {:.1}/10", index + 1, answer.score),
                3,
            ));
            if !answer.strengths.is_empty() {
                output.push_str(&format!("  Strengths: {}\n", answer.strengths.join(", ")));
            }
            if !answer.areas_for_improvement.is_empty() {
                output.push_str(&format!(
                    "  Areas for improvement: {}\n",
                    answer.areas_for_improvement.join(", ")
                ));
            }
            if !answer.feedback.is_empty() {
                output.push_str(&format!("  Feedback: {}\n", answer.feedback));
            }
        }

        output
    }

    /// Final report summary for the console.
    pub fn format_report(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 INTERVIEW REPORT", 1));
        output.push_str(&format!("Candidate: {}\n", report.candidate_info.name));
        output.push_str(&format!("Email: {}\n", report.candidate_info.email));
        output.push_str(&format!("Generated: {}\n", report.generated_at));

        output.push_str(&self.format_header("Interview Summary", 2));
        output.push_str(&format!(
            "Total Questions: {}\n",
            report.interview_summary.total_questions
        ));
        output.push_str(&format!(
            "Rounds Completed: {}\n",
            report.interview_summary.rounds_completed.join(", ")
        ));
        if let Some(score) = report.interview_summary.average_scores.hr_round {
            output.push_str(&format!("HR Round Average: {:.2}/10\n", score));
        }
        if let Some(score) = report.interview_summary.average_scores.technical_round {
            output.push_str(&format!("Technical Round Average: {:.2}/10\n", score));
        }

        output.push_str(&self.format_header("Overall Assessment", 2));
        let overall = format!(
            "Overall Score: {:.2}/10",
            report.overall_assessment.overall_score
        );
        output.push_str(&format!(
            "{}\n",
            self.colorize(
                &overall,
                Self::score_color(report.overall_assessment.overall_score)
            )
        ));
        output.push_str(&format!(
            "Recommendation: {}\n",
            self.colorize(&report.overall_assessment.recommendation, Color::Cyan)
        ));

        output.push_str(&self.format_header("Recommendations", 2));
        for (index, tip) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, tip));
        }

        output
    }
}

/// Write the JSON and PDF artifacts with a shared timestamped identity.
pub fn write_artifacts(report: &Report, reports_dir: &Path) -> Result<ReportPaths> {
    std::fs::create_dir_all(reports_dir).map_err(|e| {
        InterviewCoachError::ReportWrite(format!(
            "Failed to create reports directory {}: {}",
            reports_dir.display(),
            e
        ))
    })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let json_path = reports_dir.join(format!("interview_report_{}.json", timestamp));
    let pdf_path = reports_dir.join(format!("interview_report_{}.pdf", timestamp));

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&json_path, json).map_err(|e| {
        InterviewCoachError::ReportWrite(format!(
            "Failed to write {}: {}",
            json_path.display(),
            e
        ))
    })?;

    pdf::write_pdf_report(report, &pdf_path)?;

    info!(
        "Report artifacts written: {} and {}",
        json_path.display(),
        pdf_path.display()
    );

    Ok(ReportPaths {
        json: json_path,
        pdf: pdf_path,
    })
}
