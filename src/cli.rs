//! CLI interface for the interview coach

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "interview-coach")]
#[command(about = "AI-powered interview practice driven by your resume")]
#[command(
    long_about = "Practice HR and technical interview rounds with questions generated from your resume, AI-scored answers, and a written performance report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full interactive practice session
    Practice {
        /// Path to resume file (PDF, DOCX, DOC, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Skip the HR round
        #[arg(long)]
        skip_hr: bool,

        /// Skip the technical round
        #[arg(long)]
        skip_technical: bool,

        /// Where to write report artifacts (defaults to the configured reports directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Generate interview questions from a resume without answering them
    Questions {
        /// Path to resume file (PDF, DOCX, DOC, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Which rounds to generate: hr, technical, both
        #[arg(short, long, default_value = "both")]
        kind: String,

        /// Questions per round (defaults to the configured counts)
        #[arg(short, long)]
        count: Option<usize>,

        /// Save the generated questions to a JSON file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Evaluate prepared answers from a JSON file
    Evaluate {
        /// JSON file of question/answer pairs
        #[arg(short, long)]
        answers: PathBuf,

        /// Save the round evaluation to a JSON file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Which interview rounds a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundFilter {
    Hr,
    Technical,
    Both,
}

impl RoundFilter {
    pub fn includes_hr(&self) -> bool {
        matches!(self, RoundFilter::Hr | RoundFilter::Both)
    }

    pub fn includes_technical(&self) -> bool {
        matches!(self, RoundFilter::Technical | RoundFilter::Both)
    }
}

/// Parse and validate a round filter argument
pub fn parse_round_filter(kind: &str) -> Result<RoundFilter, String> {
    match kind.to_lowercase().as_str() {
        "hr" => Ok(RoundFilter::Hr),
        "technical" | "tech" => Ok(RoundFilter::Technical),
        "both" => Ok(RoundFilter::Both),
        _ => Err(format!(
            "Invalid round kind: {}. Supported: hr, technical, both",
            kind
        )),
    }
}
