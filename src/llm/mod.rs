//! LLM integration module

pub mod client;
pub mod prompts;

pub use client::{GeminiClient, LlmProvider};
pub use prompts::PromptTemplates;
