//! Report output module
//! Builds the report tree and renders console, JSON, and PDF forms

pub mod charts;
pub mod formatter;
pub mod pdf;
pub mod report;

pub use formatter::{write_artifacts, ConsoleFormatter, ReportPaths};
pub use report::Report;
