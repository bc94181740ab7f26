// File: crates/chart-render-skia/src/text.rs
// Summary: Axis, tick and legend text drawn through Skia textlayout, anchored at a baseline point.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use skia_safe as skia;

/// Font family list for a piece of chart text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// Axis titles and legend names.
    Label,
    /// Tick values; tabular digits keep columns aligned.
    Numeric,
}

impl Face {
    fn families(self) -> &'static [&'static str] {
        match self {
            Face::Label => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
            Face::Numeric => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
        }
    }
}

/// Which end of the text sits on the anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// Size, color and face of one run of text.
#[derive(Clone, Copy, Debug)]
pub struct Ink {
    pub size: f32,
    pub color: skia::Color,
    pub face: Face,
}

impl Ink {
    pub fn new(size: f32, color: skia::Color, face: Face) -> Self {
        Self { size: size.max(1.0), color, face }
    }
}

/// Chart text is a single line; lay out wide enough to never wrap.
const LAYOUT_WIDTH: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn paragraph(&self, text: &str, ink: Ink) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(ink.size);
        style.set_color(ink.color);
        style.set_font_families(ink.face.families());

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    pub fn width(&self, text: &str, ink: Ink) -> f32 {
        self.paragraph(text, ink).longest_line()
    }

    /// Draw `text` with its baseline on `at.1`, positioned horizontally by `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, at: (f32, f32), anchor: Anchor, ink: Ink) {
        let paragraph = self.paragraph(text, ink);
        let left = match anchor {
            Anchor::Start => at.0,
            Anchor::End => at.0 - paragraph.longest_line(),
        };
        // Paragraphs paint from their top-left corner.
        let top = at.1 - paragraph.alphabetic_baseline();
        paragraph.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
