//! Optional speech-to-text support for spoken answers

pub mod transcriber;

pub use transcriber::{mime_for_path, DeepgramTranscriber, SpeechTranscriber};
