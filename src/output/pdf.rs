//! Printable report rendering

use crate::error::{InterviewCoachError, Result};
use crate::output::report::Report;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfPageIndex,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT_MARGIN: f32 = 20.0;
const TOP_Y: f32 = 277.0;
const BOTTOM_MARGIN: f32 = 20.0;
const BODY_WRAP_CHARS: usize = 90;

/// A4 page with a downward-moving cursor; adds pages on overflow.
struct PdfWriter {
    doc: PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InterviewCoachError::ReportWrite(format!("Failed to load font: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| InterviewCoachError::ReportWrite(format!("Failed to load font: {}", e)))?;

        Ok(Self {
            doc,
            page,
            layer,
            regular,
            bold,
            y: TOP_Y,
        })
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < BOTTOM_MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.page = page;
            self.layer = layer;
            self.y = TOP_Y;
        }
    }

    fn draw(&mut self, text: &str, size: f32, bold: bool, x: f32, advance: f32) {
        self.ensure_room(advance);
        let font = if bold { &self.bold } else { &self.regular };
        self.doc
            .get_page(self.page)
            .get_layer(self.layer)
            .use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= advance;
    }

    fn title(&mut self, text: &str) {
        let x = centered_x(text, 16.0);
        self.draw(text, 16.0, true, x, 10.0);
        self.y -= 10.0;
    }

    fn section_header(&mut self, text: &str) {
        self.draw(text, 14.0, true, LEFT_MARGIN, 10.0);
    }

    fn body_line(&mut self, text: &str) {
        for line in wrap_text(text, BODY_WRAP_CHARS) {
            self.draw(&line, 10.0, false, LEFT_MARGIN, 6.0);
        }
    }

    fn gap(&mut self) {
        self.y -= 5.0;
    }

    fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| InterviewCoachError::ReportWrite(format!("Failed to write PDF: {}", e)))
    }
}

/// Write the condensed printable report: candidate info, summary, overall
/// assessment, and numbered recommendations.
pub fn write_pdf_report(report: &Report, path: &Path) -> Result<()> {
    let mut writer = PdfWriter::new("Interview Performance Report")?;

    writer.title("Interview Performance Report");

    writer.section_header("Candidate Information");
    writer.body_line(&format!("Name: {}", report.candidate_info.name));
    writer.body_line(&format!("Email: {}", report.candidate_info.email));
    writer.body_line(&format!("Phone: {}", report.candidate_info.phone));
    writer.gap();

    writer.section_header("Interview Summary");
    writer.body_line(&format!(
        "Total Questions: {}",
        report.interview_summary.total_questions
    ));
    writer.body_line(&format!(
        "Overall Average Score: {:.2}",
        report.interview_summary.overall_average
    ));
    writer.gap();

    writer.section_header("Overall Assessment");
    writer.body_line(&format!(
        "Overall Score: {:.2}/10",
        report.overall_assessment.overall_score
    ));
    writer.body_line(&format!(
        "Recommendation: {}",
        report.overall_assessment.recommendation
    ));
    writer.gap();

    writer.section_header("Recommendations");
    for (index, tip) in report.recommendations.iter().enumerate() {
        writer.body_line(&format!("{}. {}", index + 1, tip));
    }

    writer.save(path)
}

/// Rough centering for the builtin Helvetica face.
fn centered_x(text: &str, size: f32) -> f32 {
    // pt to mm times an average glyph width of half an em
    let width = text.chars().count() as f32 * size * 0.5 * 0.3528;
    ((PAGE_WIDTH - width) / 2.0).max(LEFT_MARGIN)
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_splits_on_word_boundaries() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_short_input() {
        assert_eq!(wrap_text("short", 90), vec!["short"]);
        assert_eq!(wrap_text("", 90), vec![""]);
    }

    #[test]
    fn test_centered_x_stays_inside_margin() {
        let long = "x".repeat(300);
        assert_eq!(centered_x(&long, 16.0), LEFT_MARGIN);
        assert!(centered_x("Interview Performance Report", 16.0) > LEFT_MARGIN);
    }
}
