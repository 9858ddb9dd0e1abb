//! Question generation, classification, and answer evaluation

pub mod evaluator;
pub mod generator;
pub mod question;

pub use evaluator::{
    AnswerEvaluation, AnswerEvaluator, PerformanceLevel, QaPair, RoundEvaluation,
};
pub use generator::QuestionGenerator;
pub use question::{Difficulty, QuestionKind, QuestionRecord};
