//! Interview coach: AI-powered interview practice driven by your resume

mod cli;
mod config;
mod error;
mod input;
mod resume;
mod llm;
mod interview;
mod session;
mod speech;
mod text;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{InterviewCoachError, Result};
use indicatif::ProgressBar;
use interview::{AnswerEvaluator, QaPair, QuestionGenerator, QuestionKind, QuestionRecord, RoundEvaluation};
use llm::GeminiClient;
use log::{error, info, warn};
use output::{write_artifacts, ConsoleFormatter, Report};
use resume::{parser, ResumeParser};
use session::InterviewSession;
use speech::DeepgramTranscriber;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Pick up API keys from a local .env if present
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Practice {
            resume,
            skip_hr,
            skip_technical,
            output_dir,
        } => {
            if skip_hr && skip_technical {
                return Err(InterviewCoachError::InvalidInput(
                    "Both rounds are skipped, nothing to practice".to_string(),
                ));
            }

            println!("🎯 Interview practice session");
            println!("📄 Parsing resume: {}", resume.display());

            let resume_parser = ResumeParser::new(config.max_file_size_bytes())?;
            let resume_data = resume_parser.parse(&resume).await?;

            if let Some(name) = parser::detect_candidate_name(&resume_data.raw_text) {
                println!("👤 Candidate: {}", name);
            }
            println!(
                "✅ Resume parsed: {} skills, {} sections",
                resume_data.skills.len(),
                resume_data.sections.len()
            );

            let llm = GeminiClient::new(&config.llm)?;
            let generator = QuestionGenerator::new(llm.clone());
            let evaluator = AnswerEvaluator::new(llm);
            let transcriber = DeepgramTranscriber::from_config(&config.speech)?;
            let formatter = ConsoleFormatter::new(true);

            let mut session = InterviewSession::new();
            session.set_resume(resume_data.clone());

            println!();
            println!("✍️  Answer each question, then press Enter on an empty line to submit.");
            if transcriber.is_some() {
                println!("🎤 Voice input enabled: answer with @path/to/recording to transcribe an audio file.");
            } else {
                info!("Speech transcription disabled, text answers only");
            }

            let rounds = [
                (
                    QuestionKind::Hr,
                    "HR Round",
                    config.interview.hr_question_count,
                    skip_hr,
                ),
                (
                    QuestionKind::Technical,
                    "Technical Round",
                    config.interview.technical_question_count,
                    skip_technical,
                ),
            ];

            for (kind, round_name, question_count, skipped) in rounds {
                if skipped {
                    println!("\n⏭️  Skipping {}", round_name);
                    continue;
                }

                println!();
                let spinner = start_spinner(&format!("Generating {} questions", round_name));
                let generated = generator.generate(&resume_data, kind, question_count).await;
                spinner.finish_and_clear();
                let questions = generated?;
                println!("🗂️  {}: {} questions", round_name, questions.len());
                session.set_questions(kind, questions.clone());

                let total = questions.len();
                for (index, question) in questions.iter().enumerate() {
                    println!();
                    println!(
                        "❓ Question {}/{} [{} | {}]",
                        index + 1,
                        total,
                        question.category,
                        question.difficulty
                    );
                    println!("{}", question.text);
                    println!("📝 Your answer:");
                    let answer = collect_answer(transcriber.as_ref()).await?;
                    println!("   ({} words recorded)", text::word_count(&answer));
                    session.record_answer(kind, answer);
                }

                println!();
                let spinner = start_spinner(&format!("Evaluating {} answers", round_name));
                let evaluated = evaluator.evaluate_round(&session.qa_pairs(kind)).await;
                spinner.finish_and_clear();
                let evaluation = evaluated?;
                println!("{}", formatter.format_round(round_name, &evaluation));
                session.set_evaluation(kind, evaluation);
            }

            let report = Report::from_session(&session)?;
            println!("{}", formatter.format_report(&report));

            let reports_dir = match output_dir {
                Some(dir) => dir,
                None => config.reports_dir().clone(),
            };
            let paths = write_artifacts(&report, &reports_dir)?;
            println!("💾 JSON report: {}", paths.json.display());
            println!("💾 PDF report: {}", paths.pdf.display());
            println!("\n✅ Practice session complete!");
        }

        Commands::Questions {
            resume,
            kind,
            count,
            save,
        } => {
            let filter = cli::parse_round_filter(&kind).map_err(InterviewCoachError::InvalidInput)?;

            println!("📄 Parsing resume: {}", resume.display());
            let resume_parser = ResumeParser::new(config.max_file_size_bytes())?;
            let resume_data = resume_parser.parse(&resume).await?;
            println!(
                "✅ Resume parsed: {} skills, {} sections",
                resume_data.skills.len(),
                resume_data.sections.len()
            );

            let llm = GeminiClient::new(&config.llm)?;
            let generator = QuestionGenerator::new(llm);

            let mut all_questions: Vec<QuestionRecord> = Vec::new();
            if filter.includes_hr() {
                let question_count = count.unwrap_or(config.interview.hr_question_count);
                let spinner =
                    start_spinner(&format!("Generating {} HR questions", question_count));
                let generated = generator
                    .generate(&resume_data, QuestionKind::Hr, question_count)
                    .await;
                spinner.finish_and_clear();
                let questions = generated?;
                print_questions("HR Questions", &questions);
                all_questions.extend(questions);
            }
            if filter.includes_technical() {
                let question_count = count.unwrap_or(config.interview.technical_question_count);
                let spinner =
                    start_spinner(&format!("Generating {} technical questions", question_count));
                let generated = generator
                    .generate(&resume_data, QuestionKind::Technical, question_count)
                    .await;
                spinner.finish_and_clear();
                let questions = generated?;
                print_questions("Technical Questions", &questions);
                all_questions.extend(questions);
            }

            if let Some(path) = save {
                let json = serde_json::to_string_pretty(&all_questions)?;
                fs::write(&path, json)?;
                println!(
                    "\n💾 Saved {} questions to {}",
                    all_questions.len(),
                    path.display()
                );
            }
        }

        Commands::Evaluate { answers, save } => {
            println!("📄 Loading answers: {}", answers.display());
            let data = fs::read_to_string(&answers)?;
            let pairs: Vec<QaPair> = serde_json::from_str(&data).map_err(|e| {
                InterviewCoachError::InvalidInput(format!("Could not parse answers file: {}", e))
            })?;
            if pairs.is_empty() {
                return Err(InterviewCoachError::InvalidInput(
                    "The answers file contains no question/answer pairs".to_string(),
                ));
            }

            let (hr_pairs, technical_pairs): (Vec<QaPair>, Vec<QaPair>) = pairs
                .into_iter()
                .partition(|pair| pair.kind == QuestionKind::Hr);

            let llm = GeminiClient::new(&config.llm)?;
            let evaluator = AnswerEvaluator::new(llm);
            let formatter = ConsoleFormatter::new(true);

            let mut results: BTreeMap<&str, RoundEvaluation> = BTreeMap::new();
            if !hr_pairs.is_empty() {
                let spinner =
                    start_spinner(&format!("Evaluating {} HR answers", hr_pairs.len()));
                let evaluated = evaluator.evaluate_round(&hr_pairs).await;
                spinner.finish_and_clear();
                let round = evaluated?;
                println!("{}", formatter.format_round("HR Round", &round));
                results.insert("hr_round", round);
            }
            if !technical_pairs.is_empty() {
                let spinner = start_spinner(&format!(
                    "Evaluating {} technical answers",
                    technical_pairs.len()
                ));
                let evaluated = evaluator.evaluate_round(&technical_pairs).await;
                spinner.finish_and_clear();
                let round = evaluated?;
                println!("{}", formatter.format_round("Technical Round", &round));
                results.insert("technical_round", round);
            }

            if let Some(path) = save {
                let json = serde_json::to_string_pretty(&results)?;
                fs::write(&path, json)?;
                println!("💾 Saved evaluation to {}", path.display());
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Config file: {}", Config::config_path().display());
                    println!("Reports directory: {}", config.reports_dir().display());
                    println!("\nLLM:");
                    println!("  Endpoint: {}", config.llm.endpoint);
                    println!("  Model: {}", config.llm.model);
                    println!(
                        "  API key env: {} ({})",
                        config.llm.api_key_env,
                        if config.llm.api_key().is_some() { "set" } else { "not set" }
                    );
                    println!("  Timeout: {}s", config.llm.timeout_secs);
                    println!("\nSpeech:");
                    println!("  Endpoint: {}", config.speech.endpoint);
                    println!("  Model: {}", config.speech.model);
                    println!(
                        "  API key env: {} ({})",
                        config.speech.api_key_env,
                        if config.speech.api_key().is_some() { "set" } else { "not set" }
                    );
                    println!("  Timeout: {}s", config.speech.timeout_secs);
                    println!("\nInterview:");
                    println!("  HR questions: {}", config.interview.hr_question_count);
                    println!("  Technical questions: {}", config.interview.technical_question_count);
                    println!("\nDocuments:");
                    println!("  Max file size: {} MB", config.documents.max_file_size_mb);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}

/// Read one answer from stdin, retrying until something usable arrives.
///
/// An answer of the form `@path/to/file` is treated as an audio recording and
/// sent to the transcriber when one is configured.
async fn collect_answer(transcriber: Option<&DeepgramTranscriber>) -> Result<String> {
    loop {
        let raw = read_multiline_answer()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            println!("⚠️  Empty answer, please try again:");
            continue;
        }

        if let Some(audio_path) = trimmed.strip_prefix('@') {
            let audio_path = Path::new(audio_path.trim());
            let stt = match transcriber {
                Some(stt) => stt,
                None => {
                    println!("⚠️  Voice input is disabled (no speech API key configured), type your answer instead:");
                    continue;
                }
            };
            match stt.transcribe_file(audio_path).await {
                Ok(transcript) => {
                    println!("🎤 Transcript: {}", truncate_text(&transcript, 200));
                    return Ok(transcript);
                }
                Err(e) => {
                    warn!("Transcription failed: {}", e);
                    println!(
                        "⚠️  Could not transcribe {}, type your answer instead:",
                        audio_path.display()
                    );
                    continue;
                }
            }
        }

        return Ok(raw);
    }
}

/// Read stdin lines until a blank line. A closed stream with no content is an
/// error so a piped session cannot spin forever.
fn read_multiline_answer() -> Result<String> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    let mut answer = String::new();
    loop {
        let mut line = String::new();
        let bytes = handle.read_line(&mut line)?;
        if bytes == 0 {
            if answer.trim().is_empty() {
                return Err(InterviewCoachError::InvalidInput(
                    "Input stream closed before an answer was given".to_string(),
                ));
            }
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if !answer.is_empty() {
            answer.push('\n');
        }
        answer.push_str(line);
    }
    Ok(answer)
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn print_questions(title: &str, questions: &[QuestionRecord]) {
    println!("\n📋 {}:", title);
    for (index, question) in questions.iter().enumerate() {
        println!(
            "{:3}. [{} | {}] {}",
            index + 1,
            question.category,
            question.difficulty,
            question.text
        );
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
