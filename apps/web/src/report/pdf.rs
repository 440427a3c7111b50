//! Interview feedback report rendering.
//!
//! Builds the PDF with the builtin Helvetica faces, wrapping text against the
//! static metric tables in `layout`. Rendering is CPU-bound and must run
//! inside `tokio::task::spawn_blocking` (the handler does this).

use anyhow::Result;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::models::report::{QuestionRecord, ReportPayload, ResumeAnalysis};
use crate::report::layout::{get_metrics, PageConfig, ReportFont};

// US letter in millimeters / points.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const PAGE_HEIGHT_PT: f32 = 792.0;
const PAGE_WIDTH_PT: f32 = 612.0;
const PT_TO_MM: f32 = 0.352_778;

const REPORT_TITLE: &str = "Interview Feedback Report";

/// Renders the feedback report into PDF bytes.
///
/// Every payload that deserialized renders to a non-empty document; missing
/// fields shrink the report instead of failing it.
pub fn render_report(payload: &ReportPayload, config: &PageConfig) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_pt: PAGE_HEIGHT_PT - config.margin_in * 72.0,
        config,
        regular: &regular,
        bold: &bold,
    };

    write_title_block(&mut writer, payload);
    write_question_section(&mut writer, &payload.all_question_data);
    write_feedback_section(&mut writer, payload.feedback.as_deref());
    if let Some(resume) = &payload.resume_analysis {
        write_resume_section(&mut writer, resume);
    }

    Ok(doc.save_to_bytes()?)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn write_title_block(w: &mut PageWriter<'_>, payload: &ReportPayload) {
    let date = payload
        .report_date
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().format("%d %b %Y").to_string());
    let report_id = payload
        .report_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    w.write_line(REPORT_TITLE, ReportFont::HelveticaBold, w.config.title_font_size_pt);
    w.advance(6.0);
    w.write_line(&format!("Date: {date}"), ReportFont::Helvetica, w.config.body_font_size_pt);
    w.write_line(
        &format!("Report ID: {report_id}"),
        ReportFont::Helvetica,
        w.config.body_font_size_pt,
    );
    w.advance(10.0);
}

fn write_question_section(w: &mut PageWriter<'_>, records: &[QuestionRecord]) {
    if records.is_empty() {
        return;
    }
    w.write_heading("Questions & Answers");
    for (i, record) in records.iter().enumerate() {
        w.write_wrapped(
            &format!("Q{}. {}", i + 1, record.question),
            ReportFont::HelveticaBold,
        );
        w.write_wrapped(&record.answer, ReportFont::Helvetica);
        if let Some(score) = record.score {
            w.write_line(
                &format!("Score: {score:.1} / 10"),
                ReportFont::Helvetica,
                w.config.body_font_size_pt,
            );
        }
        if let Some(feedback) = record.feedback.as_deref() {
            w.write_wrapped(feedback, ReportFont::Helvetica);
        }
        w.advance(8.0);
    }
}

fn write_feedback_section(w: &mut PageWriter<'_>, feedback: Option<&str>) {
    let Some(feedback) = feedback else { return };
    if feedback.trim().is_empty() {
        return;
    }
    w.write_heading("Overall Feedback");
    w.write_wrapped(feedback, ReportFont::Helvetica);
    w.advance(8.0);
}

fn write_resume_section(w: &mut PageWriter<'_>, resume: &ResumeAnalysis) {
    w.write_heading("Resume Analysis");
    if let Some(score) = resume.score {
        w.write_line(
            &format!("Score: {score:.1} / 10"),
            ReportFont::Helvetica,
            w.config.body_font_size_pt,
        );
    }
    if let Some(summary) = resume.summary.as_deref() {
        w.write_wrapped(summary, ReportFont::Helvetica);
    }
    if !resume.strengths.is_empty() {
        w.advance(4.0);
        w.write_line("Strengths", ReportFont::HelveticaBold, w.config.body_font_size_pt);
        for item in &resume.strengths {
            w.write_wrapped(&format!("- {item}"), ReportFont::Helvetica);
        }
    }
    if !resume.improvements.is_empty() {
        w.advance(4.0);
        w.write_line(
            "Areas to Improve",
            ReportFont::HelveticaBold,
            w.config.body_font_size_pt,
        );
        for item in &resume.improvements {
            w.write_wrapped(&format!("- {item}"), ReportFont::Helvetica);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page writer
// ────────────────────────────────────────────────────────────────────────────

/// Top-down write cursor over the document. Starts a new page whenever the
/// next line would cross the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Baseline of the next line, in points from the page bottom.
    y_pt: f32,
    config: &'a PageConfig,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
}

impl PageWriter<'_> {
    fn margin_pt(&self) -> f32 {
        self.config.margin_in * 72.0
    }

    /// Usable line width in em units at the given font size.
    fn width_em_at(&self, font_size_pt: f32) -> f32 {
        (PAGE_WIDTH_PT - 2.0 * self.margin_pt()) / font_size_pt
    }

    fn ensure_room(&mut self, needed_pt: f32) {
        if self.y_pt - needed_pt < self.margin_pt() {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_pt = PAGE_HEIGHT_PT - self.margin_pt();
        }
    }

    /// Writes one pre-wrapped line and advances the cursor.
    fn write_line(&mut self, text: &str, font: ReportFont, font_size_pt: f32) {
        let advance = self.config.line_height_pt.max(font_size_pt * 1.3);
        self.ensure_room(advance);
        let font_ref = match font {
            ReportFont::Helvetica => self.regular,
            ReportFont::HelveticaBold => self.bold,
        };
        self.layer.use_text(
            text,
            font_size_pt,
            Mm(self.margin_pt() * PT_TO_MM),
            Mm((self.y_pt - font_size_pt) * PT_TO_MM),
            font_ref,
        );
        self.y_pt -= advance;
    }

    /// Word-wraps body text against the metric tables and writes each line.
    fn write_wrapped(&mut self, text: &str, font: ReportFont) {
        let size = self.config.body_font_size_pt;
        let width_em = self.width_em_at(size);
        for line in get_metrics(font).wrap_text(text, width_em) {
            self.write_line(&line, font, size);
        }
    }

    fn write_heading(&mut self, text: &str) {
        let size = self.config.heading_font_size_pt;
        // Keep a heading attached to at least one body line below it.
        self.ensure_room(size * 1.3 + self.config.line_height_pt);
        self.write_line(text, ReportFont::HelveticaBold, size);
        self.advance(2.0);
    }

    /// Moves the cursor down without writing (inter-section spacing).
    fn advance(&mut self, gap_pt: f32) {
        self.y_pt -= gap_pt;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::layout::default_page_config;

    fn sample_payload() -> ReportPayload {
        ReportPayload {
            report_date: Some("12 Aug 2026".to_string()),
            report_id: Some("rpt-42".to_string()),
            all_question_data: vec![
                QuestionRecord {
                    question: "Tell me about yourself".to_string(),
                    answer: "I am a backend engineer with four years of experience."
                        .to_string(),
                    score: Some(7.5),
                    feedback: Some("Good structure, add more metrics.".to_string()),
                },
                QuestionRecord {
                    question: "Describe a production incident you handled".to_string(),
                    answer: "A cache stampede took down the search tier.".to_string(),
                    score: None,
                    feedback: None,
                },
            ],
            feedback: Some("Strong fundamentals, work on quantifying impact.".to_string()),
            resume_analysis: Some(ResumeAnalysis {
                score: Some(8.0),
                summary: Some("Well-organized, impact-focused resume.".to_string()),
                strengths: vec!["Clear impact statements".to_string()],
                improvements: vec!["Quantify outcomes".to_string()],
            }),
        }
    }

    #[test]
    fn test_render_sample_payload_produces_pdf_bytes() {
        let bytes = render_report(&sample_payload(), &default_page_config()).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"), "output should be a PDF document");
    }

    #[test]
    fn test_render_empty_payload_still_produces_pdf() {
        let bytes = render_report(&ReportPayload::default(), &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_many_questions_spills_to_multiple_pages() {
        let mut payload = sample_payload();
        payload.all_question_data = (0..60)
            .map(|i| QuestionRecord {
                question: format!("Question number {i} about distributed systems design"),
                answer: "A reasonably long answer that wraps across a couple of lines \
                         once the metric tables have had their say about its width."
                    .to_string(),
                score: Some(6.0),
                feedback: None,
            })
            .collect();
        let few = render_report(&sample_payload(), &default_page_config()).unwrap();
        let many = render_report(&payload, &default_page_config()).unwrap();
        assert!(
            many.len() > few.len(),
            "60 questions should produce a larger document"
        );
    }

    #[test]
    fn test_render_survives_unbroken_text() {
        let mut payload = ReportPayload::default();
        payload.feedback = Some("x".repeat(2000));
        let bytes = render_report(&payload, &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
