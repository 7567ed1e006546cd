//! PDF rendering of report documents.
//!
//! [`layout`] places every text run on A4 pages; [`report_pdf`] draws the
//! runs with the built-in Helvetica fonts.

use contracts::dashboards::d401_reports::{ReportDocument, ReportSection};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const TOP: f32 = PAGE_HEIGHT - 20.0;
const BOTTOM: f32 = 20.0;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const CELL_SIZE: f32 = 10.0;
const ROW_HEIGHT: f32 = 6.0;

/// Average Helvetica glyph width as a share of the font size, in mm per pt.
const GLYPH_WIDTH: f32 = 0.19;

/// One positioned piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

struct Cursor {
    page: usize,
    y: f32,
    runs: Vec<TextRun>,
}

impl Cursor {
    fn new() -> Self {
        Self { page: 0, y: TOP, runs: Vec::new() }
    }

    /// Starts a new page when `height` no longer fits. Returns whether it did.
    fn reserve(&mut self, height: f32) -> bool {
        if self.y - height < BOTTOM {
            self.page += 1;
            self.y = TOP;
            true
        } else {
            false
        }
    }

    fn text(&mut self, x: f32, size: f32, bold: bool, text: impl Into<String>) {
        self.runs.push(TextRun {
            page: self.page,
            x,
            y: self.y,
            size,
            bold,
            text: text.into(),
        });
    }

    fn row(&mut self, cells: &[String], bold: bool) {
        let width = column_width(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN + width * i as f32;
            self.text(x, CELL_SIZE, bold, fit_cell(cell, width));
        }
        self.y -= ROW_HEIGHT;
    }

    fn section(&mut self, section: &ReportSection) {
        self.y -= 4.0;
        if let Some(heading) = &section.heading {
            self.reserve(7.0 + ROW_HEIGHT * 2.0);
            self.text(MARGIN, HEADING_SIZE, true, heading.clone());
            self.y -= 7.0;
        } else {
            self.reserve(ROW_HEIGHT * 2.0);
        }
        self.row(&section.columns, true);
        if section.rows.is_empty() {
            self.text(MARGIN, CELL_SIZE, false, "No data available");
            self.y -= ROW_HEIGHT;
        }
        for row in &section.rows {
            if self.reserve(ROW_HEIGHT) {
                self.row(&section.columns, true);
            }
            self.row(row, false);
        }
    }
}

fn column_width(columns: usize) -> f32 {
    (PAGE_WIDTH - MARGIN * 2.0) / columns.max(1) as f32
}

/// Cuts a cell so it stays inside its column.
fn fit_cell(cell: &str, width: f32) -> String {
    let max_chars = ((width - 2.0) / (CELL_SIZE * GLYPH_WIDTH)).floor().max(3.0) as usize;
    if cell.chars().count() <= max_chars {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Title, generation date, then one table per section. Long tables continue
/// on the next page with their column headers repeated.
pub fn layout(doc: &ReportDocument, generated_on: &str) -> Vec<TextRun> {
    let mut cursor = Cursor::new();
    cursor.text(MARGIN, TITLE_SIZE, true, doc.title.clone());
    cursor.y -= 8.0;
    cursor.text(MARGIN, CELL_SIZE, false, format!("Generated on {}", generated_on));
    cursor.y -= ROW_HEIGHT;
    for section in &doc.sections {
        cursor.section(section);
    }
    cursor.runs
}

/// Renders the report to PDF bytes.
pub fn report_pdf(doc: &ReportDocument, generated_on: &str) -> Result<Vec<u8>, String> {
    let runs = layout(doc, generated_on);
    let pages = runs.iter().map(|r| r.page).max().unwrap_or(0) + 1;

    let (pdf, first_page, first_layer) =
        PdfDocument::new(doc.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| format!("Failed to load font: {}", e))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| format!("Failed to load font: {}", e))?;

    let mut layers = vec![pdf.get_page(first_page).get_layer(first_layer)];
    for n in 1..pages {
        let (page, layer) = pdf.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Layer {}", n + 1));
        layers.push(pdf.get_page(page).get_layer(layer));
    }

    for run in runs {
        let font = if run.bold { &bold } else { &regular };
        layers[run.page].use_text(run.text, run.size, Mm(run.x), Mm(run.y), font);
    }

    pdf.save_to_bytes().map_err(|e| format!("Failed to write PDF: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_reports::ReportKind;
    use serde_json::json;

    fn texts(runs: &[TextRun]) -> Vec<&str> {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_layout_title_and_sections() {
        let doc = ReportKind::DemographicsSummary.build(&json!({
            "genders": [{"gender": "Male", "count": 2}]
        }));
        let runs = layout(&doc, "Aug 20, 2025");
        let t = texts(&runs);
        assert_eq!(t[0], "Demographics Summary Report");
        assert!(runs[0].bold);
        assert_eq!(t[1], "Generated on Aug 20, 2025");
        assert!(t.contains(&"A. Age Group Analysis"));
        assert!(t.contains(&"B. Gender Analysis"));
        assert!(t.contains(&"Male"));
        assert!(t.contains(&"No data available"));
        assert!(runs.iter().all(|r| r.page == 0));
    }

    #[test]
    fn test_empty_report_still_has_tables() {
        let doc = ReportKind::DemographicsSummary.build(&json!({}));
        assert!(doc.is_empty());
        let runs = layout(&doc, "today");
        let t = texts(&runs);
        assert!(t.contains(&"A. Age Group Analysis"));
        assert_eq!(t.iter().filter(|s| **s == "No data available").count(), doc.sections.len());
    }

    #[test]
    fn test_long_table_continues_on_next_page() {
        let doc = ReportDocument {
            title: "Big".to_string(),
            file_stem: "big_report".to_string(),
            sections: vec![ReportSection {
                heading: None,
                columns: vec!["Name".to_string(), "Count".to_string()],
                rows: (0..100).map(|i| vec![format!("row {}", i), i.to_string()]).collect(),
            }],
        };
        let runs = layout(&doc, "today");
        let last_page = runs.iter().map(|r| r.page).max().unwrap();
        assert!(last_page >= 2);
        assert!(runs.iter().all(|r| r.y >= BOTTOM && r.y <= TOP));
        for page in 1..=last_page {
            let first = runs.iter().find(|r| r.page == page).unwrap();
            assert_eq!(first.text, "Name");
            assert!(first.bold);
        }
    }

    #[test]
    fn test_fit_cell() {
        assert_eq!(fit_cell("Wa", 90.0), "Wa");
        let cut = fit_cell(&"x".repeat(200), 30.0);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() < 20);
    }

    #[test]
    fn test_report_pdf_bytes() {
        let doc = ReportKind::AnnualRegistration.build(&json!([]));
        let bytes = report_pdf(&doc, "today").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
