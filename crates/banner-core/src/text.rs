// File: crates/banner-core/src/text.rs
// Summary: Single-line text shaper using Skia textlayout; draws text centered on a baseline point.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: [&str; 6] = ["Roboto", "Segoe UI", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size);
        ts.set_color(color);
        ts.set_font_families(&FAMILIES);
        ts.set_font_style(if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() });
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, bold).max_intrinsic_width()
    }

    /// Draw `text` horizontally centered on `x`, with its alphabetic baseline at `baseline_y`.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        baseline_y: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let p = self.layout(text, size, color, bold);
        let half = p.max_intrinsic_width() / 2.0;
        // Paragraph paints from its top-left corner
        p.paint(canvas, (x - half, baseline_y - p.alphabetic_baseline()));
    }
}
