//! Ownership-scoped page canvas over a printpdf document.
//!
//! One `Canvas` belongs to exactly one export call; two concurrent
//! exports never share one. Coordinates are top-anchored millimetres
//! (y grows downward, as the layout code thinks), converted to PDF's
//! bottom-anchored space at the draw calls.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Polygon, Px,
};

use super::metrics;
use super::style::{PAGE_HEIGHT, PAGE_WIDTH};
use super::PdfError;
use crate::company::LogoBitmap;

/// Font face selector for text calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Horizontal text alignment relative to the given x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl FontSet {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// A single A4 portrait document under construction.
pub struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: FontSet,
    pages: usize,
}

impl Canvas {
    /// Start a new single-page document.
    pub fn new(title: &str) -> Result<Self, PdfError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let fonts = FontSet {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(PdfError::FontLoad)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(PdfError::FontLoad)?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(PdfError::FontLoad)?,
        };
        Ok(Self {
            doc,
            layer,
            fonts,
            pages: 1,
        })
    }

    /// Append a fresh page and make it current.
    pub fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
    }

    /// 1-based index of the current page.
    pub fn page_number(&self) -> usize {
        self.pages
    }

    /// Total pages emitted so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Draw one line of text. `y` is the baseline measured from the top.
    pub fn text(
        &self,
        text: &str,
        font_size: f32,
        x: f32,
        y: f32,
        style: FontStyle,
        align: Align,
        color: (u8, u8, u8),
    ) {
        if text.is_empty() {
            return;
        }
        let width = metrics::string_width(text, font_size);
        let x = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        self.layer.set_fill_color(rgb(color));
        self.layer
            .use_text(text, font_size, Mm(x), Mm(PAGE_HEIGHT - y), self.fonts.get(style));
    }

    /// Draw a straight line between two top-anchored points.
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: (u8, u8, u8)) {
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(PAGE_HEIGHT - y1)), false),
                (Point::new(Mm(x2), Mm(PAGE_HEIGHT - y2)), false),
            ],
            is_closed: false,
        });
    }

    /// Fill a rectangle whose top-left corner is at (`x`, `y`).
    pub fn filled_rect(&self, x: f32, y: f32, w: f32, h: f32, color: (u8, u8, u8)) {
        let bottom = PAGE_HEIGHT - y - h;
        let points = vec![
            (Point::new(Mm(x), Mm(bottom)), false),
            (Point::new(Mm(x + w), Mm(bottom)), false),
            (Point::new(Mm(x + w), Mm(bottom + h)), false),
            (Point::new(Mm(x), Mm(bottom + h)), false),
        ];
        self.layer.set_fill_color(rgb(color));
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// Stroke a rectangle outline whose top-left corner is at (`x`, `y`).
    pub fn rect_outline(&self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: (u8, u8, u8)) {
        let bottom = PAGE_HEIGHT - y - h;
        let points = vec![
            (Point::new(Mm(x), Mm(bottom)), false),
            (Point::new(Mm(x + w), Mm(bottom)), false),
            (Point::new(Mm(x + w), Mm(bottom + h)), false),
            (Point::new(Mm(x), Mm(bottom + h)), false),
        ];
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    /// Embed a pre-decoded RGB logo scaled into a `w` x `h` box at
    /// (`x`, `y`).
    ///
    /// A malformed bitmap is a warning, never an error - the document
    /// renders on without the image.
    pub fn draw_logo(&self, logo: &LogoBitmap, x: f32, y: f32, w: f32, h: f32) {
        if !logo.is_valid() {
            log::warn!(
                "skipping logo: bitmap {}x{} does not match {} data bytes",
                logo.width,
                logo.height,
                logo.data.len()
            );
            return;
        }
        let image = printpdf::Image::from(ImageXObject {
            width: Px(logo.width),
            height: Px(logo.height),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: logo.data.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });
        // At 72 dpi one pixel is one point; scale from there to the box.
        let dpi = 72.0;
        let px_w_mm = logo.width as f32 * 0.352_778;
        let px_h_mm = logo.height as f32 * 0.352_778;
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(PAGE_HEIGHT - y - h)),
                scale_x: Some(w / px_w_mm),
                scale_y: Some(h / px_h_mm),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    /// Finish the document and return its bytes.
    pub fn save(self) -> Result<Vec<u8>, PdfError> {
        let mut writer = std::io::BufWriter::new(Vec::new());
        self.doc.save(&mut writer).map_err(PdfError::Save)?;
        writer
            .into_inner()
            .map_err(|e| PdfError::Flush(e.into_error()))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_counts_pages() {
        let mut canvas = Canvas::new("test").unwrap();
        assert_eq!(canvas.page_number(), 1);
        canvas.add_page();
        canvas.add_page();
        assert_eq!(canvas.page_count(), 3);
    }

    #[test]
    fn test_canvas_saves_nonempty_pdf() {
        let canvas = Canvas::new("test").unwrap();
        canvas.text(
            "Hello",
            10.0,
            20.0,
            20.0,
            FontStyle::Regular,
            Align::Left,
            (0, 0, 0),
        );
        let bytes = canvas.save().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_invalid_logo_is_skipped() {
        let canvas = Canvas::new("test").unwrap();
        let bad = crate::company::LogoBitmap {
            width: 4,
            height: 4,
            data: vec![0; 5],
        };
        // Must not panic; document still saves.
        canvas.draw_logo(&bad, 10.0, 10.0, 30.0, 18.0);
        assert!(canvas.save().unwrap().starts_with(b"%PDF"));
    }
}
