//! PDF rendering (A4, single font, one report line per text line).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use serde::{Deserialize, Serialize};

use crate::document::{DocumentRenderer, RenderingError};
use crate::summary::Summary;

/// A4 in PostScript points.
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

const LAYER_NAME: &str = "report";

fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

/// Layout and resource settings for [`PdfRenderer`]. Lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// External TrueType font. `None` uses the built-in Helvetica.
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub line_height: f32,
    pub margin: f32,
    pub file_name: String,
    pub title: String,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 14.0,
            line_height: 20.0,
            margin: 36.0,
            file_name: "finance_report.pdf".to_string(),
            title: "Finance report".to_string(),
        }
    }
}

impl PdfSettings {
    /// Whether the margins leave room on an A4 page for at least two lines.
    pub fn fits_page(&self) -> bool {
        let body_height = A4_HEIGHT_PT - 2.0 * self.margin - self.font_size;
        self.margin >= 0.0
            && 2.0 * self.margin < A4_WIDTH_PT
            && body_height >= self.line_height
    }
}

/// Vertical cursor over fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    top: f32,
    bottom: f32,
    line_height: f32,
    y: f32,
    page: usize,
}

impl Layout {
    fn new(settings: &PdfSettings) -> Self {
        let top = A4_HEIGHT_PT - settings.margin - settings.font_size;
        Self {
            top,
            bottom: settings.margin,
            line_height: settings.line_height.max(1.0),
            y: top,
            page: 0,
        }
    }

    /// Baseline for the next line; `(page, y)`.
    fn next_line(&mut self) -> (usize, f32) {
        if self.y < self.bottom {
            self.page += 1;
            self.y = self.top;
        }
        let placed = (self.page, self.y);
        self.y -= self.line_height;
        placed
    }

    fn skip_line(&mut self) {
        self.y -= self.line_height;
    }
}

/// Renders a [`Summary`] to PDF with `printpdf`.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    settings: PdfSettings,
}

impl PdfRenderer {
    pub fn new(settings: PdfSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PdfSettings {
        &self.settings
    }

    fn load_font(&self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, RenderingError> {
        match &self.settings.font_path {
            Some(path) => {
                let file = File::open(path).map_err(|source| RenderingError::FontUnavailable {
                    path: path.clone(),
                    source,
                })?;
                doc.add_external_font(file)
                    .map_err(|e| RenderingError::Font(e.to_string()))
            }
            None => doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderingError::Font(e.to_string())),
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, summary: &Summary) -> Result<Vec<u8>, RenderingError> {
        let settings = &self.settings;
        let (doc, page, layer) = PdfDocument::new(
            settings.title.as_str(),
            pt(A4_WIDTH_PT),
            pt(A4_HEIGHT_PT),
            LAYER_NAME,
        );
        let font = self.load_font(&doc)?;

        let mut layout = Layout::new(settings);
        let mut current: PdfLayerReference = doc.get_page(page).get_layer(layer);
        let mut current_page = 0;
        let mut gap_written = false;

        for line in summary.lines() {
            if line.is_total() && !gap_written {
                layout.skip_line();
                gap_written = true;
            }

            let (line_page, y) = layout.next_line();
            if line_page != current_page {
                let (page, layer) = doc.add_page(pt(A4_WIDTH_PT), pt(A4_HEIGHT_PT), LAYER_NAME);
                current = doc.get_page(page).get_layer(layer);
                current_page = line_page;
            }

            current.use_text(
                line.to_string(),
                settings.font_size,
                pt(settings.margin),
                pt(y),
                &font,
            );
        }
        drop(current);

        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer)
            .map_err(|e| RenderingError::Output(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| RenderingError::Output(e.to_string()))
    }

    fn file_name(&self) -> &str {
        &self.settings.file_name
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fintrack_core::{Amount, Clock, ManualClock};
    use fintrack_ledger::{Category, Ledger};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn summary_with(entries: usize) -> Summary {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let mut ledger = Ledger::with_clock(clock.clone());
        for i in 0..entries {
            clock.advance(Duration::minutes(1));
            ledger.record(Category::Debt, Amount::new(Decimal::new(i as i64, 1)));
        }
        let now = ledger.clock().now();
        Summary::new(30, ledger.recent_window(now, 30), ledger.totals())
    }

    #[test]
    fn renders_a_pdf_with_builtin_font() {
        let renderer = PdfRenderer::default();
        let bytes = renderer.render(&summary_with(3)).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(renderer.file_name(), "finance_report.pdf");
        assert_eq!(renderer.content_type(), "application/pdf");
    }

    #[test]
    fn long_reports_span_several_pages() {
        let renderer = PdfRenderer::default();
        let bytes = renderer.render(&summary_with(250)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn missing_font_file_is_a_rendering_error() {
        let renderer = PdfRenderer::new(PdfSettings {
            font_path: Some(PathBuf::from("/nonexistent/fonts/arial.ttf")),
            ..PdfSettings::default()
        });

        let err = renderer.render(&summary_with(1)).unwrap_err();
        match err {
            RenderingError::FontUnavailable { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/fonts/arial.ttf"));
            }
            other => panic!("expected FontUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn layout_breaks_pages_inside_margins() {
        let settings = PdfSettings::default();
        let mut layout = Layout::new(&settings);

        let placed: Vec<(usize, f32)> = (0..120).map(|_| layout.next_line()).collect();
        assert_eq!(placed[0], (0, A4_HEIGHT_PT - 36.0 - 14.0));
        assert!(placed.iter().all(|&(_, y)| y >= settings.margin));
        assert!(placed.iter().any(|&(page, _)| page > 0));

        let first_on_page_two = placed.iter().position(|&(page, _)| page == 1).unwrap();
        assert_eq!(placed[first_on_page_two].1, placed[0].1);
    }

    #[test]
    fn oversized_margins_do_not_fit() {
        assert!(PdfSettings::default().fits_page());

        for margin in [-5.0, 298.0, 410.0] {
            let settings = PdfSettings {
                margin,
                ..PdfSettings::default()
            };
            assert!(!settings.fits_page(), "margin {margin}");
        }
    }
}
