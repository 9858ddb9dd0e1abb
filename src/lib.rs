//! Interview coach library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interview;
pub mod llm;
pub mod output;
pub mod resume;
pub mod session;
pub mod speech;
pub mod text;

pub use config::Config;
pub use error::{InterviewCoachError, Result};
pub use session::InterviewSession;
