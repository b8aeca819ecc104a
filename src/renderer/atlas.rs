//! Font atlas
//!
//! Holds one [`FontData`] per [`Font`] variant. The builtin variants are
//! decoded from packed monochrome bitmaps embedded in the binary; the
//! box-drawing block is rasterized procedurally into the default font so
//! frames render with every variant. The custom variant starts empty and is
//! filled at runtime.

use tracing::{debug, error, warn};

use super::font::{FontData, FontError, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::core::{box_drawing_char, BoxDrawing, CodePoint, Font, LineThickness};

/// First code point of the embedded font bitmaps (printable ASCII)
const BUILTIN_FIRST_CODE_POINT: CodePoint = 0x20;
/// Embedded bitmaps are a single column of 95 glyphs
const BUILTIN_IMAGE_WIDTH: usize = GLYPH_WIDTH;
const BUILTIN_IMAGE_HEIGHT: usize = 95 * GLYPH_HEIGHT;

const BUILTIN_FONTS: [(Font, &[u8]); 4] = [
    (
        Font::Default,
        include_bytes!("../../resources/fonts/default_8x16.xbm"),
    ),
    (Font::Bold, include_bytes!("../../resources/fonts/bold_8x16.xbm")),
    (
        Font::Compact,
        include_bytes!("../../resources/fonts/compact_8x16.xbm"),
    ),
    (
        Font::CompactBold,
        include_bytes!("../../resources/fonts/compact_bold_8x16.xbm"),
    ),
];

/// Decode a packed monochrome (XBM layout) image into an alpha mask
///
/// Each byte holds 8 pixels, least significant bit first; a set bit is
/// opaque (255). Rows are padded to a whole number of bytes.
pub fn decode_xbm(width: usize, height: usize, data: &[u8]) -> Result<Vec<u8>, FontError> {
    let stride = width.div_ceil(8);
    let expected = stride * height;
    if data.len() < expected {
        return Err(FontError::BufferTooShort {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let mut alpha = Vec::with_capacity(width * height);
    for row in data[..expected].chunks(stride.max(1)).take(height) {
        for x in 0..width {
            let bit = (row[x / 8] >> (x % 8)) & 1;
            alpha.push(if bit == 1 { 255 } else { 0 });
        }
    }
    Ok(alpha)
}

/// All font variants used by a console
#[derive(Debug, Clone)]
pub struct FontAtlas {
    fonts: [FontData; Font::COUNT],
}

impl Default for FontAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl FontAtlas {
    /// Create an atlas with every builtin font loaded
    ///
    /// A builtin variant that fails to decode is logged and left empty, so
    /// its lookups fall back to the default font.
    pub fn new() -> Self {
        let mut atlas = Self::empty();

        for (font, data) in BUILTIN_FONTS {
            match atlas.load_xbm_font(
                font,
                BUILTIN_FIRST_CODE_POINT,
                BUILTIN_IMAGE_WIDTH,
                BUILTIN_IMAGE_HEIGHT,
                data,
            ) {
                Ok(count) => debug!(?font, glyphs = count, "loaded builtin font"),
                Err(err) => error!(?font, %err, "failed to load builtin font"),
            }
        }

        let default = &mut atlas.fonts[Font::Default.index()];
        for thickness in LineThickness::ALL {
            for shape in BoxDrawing::ALL {
                default.insert_glyph(
                    box_drawing_char(thickness, shape),
                    box_drawing_glyph(thickness, shape),
                );
            }
        }
        debug!(glyphs = default.len(), "default font ready");

        atlas
    }

    /// Create an atlas where every variant holds only its blank glyph
    pub fn empty() -> Self {
        Self {
            fonts: std::array::from_fn(|_| FontData::new(GLYPH_WIDTH, GLYPH_HEIGHT)),
        }
    }

    pub fn glyph_width(&self) -> usize {
        GLYPH_WIDTH
    }

    pub fn glyph_height(&self) -> usize {
        GLYPH_HEIGHT
    }

    pub fn font(&self, font: Font) -> &FontData {
        &self.fonts[font.index()]
    }

    /// Glyph to draw for a code point in a font
    ///
    /// Falls back to the default font's glyph for the same code point when
    /// the font lacks it, and to the blank glyph when the default font lacks
    /// it too.
    pub fn glyph(&self, font: Font, code_point: CodePoint) -> &Glyph {
        let data = self.font(font);
        if data.contains(code_point) {
            data.glyph(code_point)
        } else {
            self.font(Font::Default).glyph(code_point)
        }
    }

    /// Add glyphs to a font from a row-major alpha image
    pub fn load_alpha_font(
        &mut self,
        font: Font,
        start: CodePoint,
        width: usize,
        height: usize,
        image: &[u8],
    ) -> Result<usize, FontError> {
        self.fonts[font.index()].add_glyphs(start, image, width, height)
    }

    /// Add glyphs to a font from a packed monochrome image
    pub fn load_xbm_font(
        &mut self,
        font: Font,
        start: CodePoint,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<usize, FontError> {
        let alpha = decode_xbm(width, height, data)?;
        self.load_alpha_font(font, start, width, height, &alpha)
    }

    /// Add alpha-mask glyphs to the custom font
    pub fn add_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        image: &[u8],
    ) -> Result<usize, FontError> {
        log_custom(
            start,
            self.load_alpha_font(Font::Custom, start, width, height, image),
        )
    }

    /// Add packed monochrome glyphs to the custom font
    pub fn add_xbm_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<usize, FontError> {
        log_custom(
            start,
            self.load_xbm_font(Font::Custom, start, width, height, data),
        )
    }
}

fn log_custom(start: CodePoint, result: Result<usize, FontError>) -> Result<usize, FontError> {
    match &result {
        Ok(count) => debug!(start, glyphs = count, "added glyphs to custom font"),
        Err(err) => warn!(start, %err, "rejected custom font glyphs"),
    }
    result
}

/// Rasterize one box-drawing shape into a glyph cell
///
/// Light and heavy lines meet at column 3 / row 7 (heavy lines are two
/// pixels wide). Double lines run on columns 2 and 5 and rows 6 and 9; at
/// junctions the inner strokes stop at the inner corners.
fn box_drawing_glyph(thickness: LineThickness, shape: BoxDrawing) -> Glyph {
    const LAST_X: usize = GLYPH_WIDTH - 1;
    const LAST_Y: usize = GLYPH_HEIGHT - 1;

    let mut alpha = vec![0u8; GLYPH_WIDTH * GLYPH_HEIGHT];
    let mut hspan = |y: usize, from: usize, to: usize| {
        for x in from..=to {
            alpha[y * GLYPH_WIDTH + x] = 255;
        }
    };
    let (up, down, left, right) = shape.arms();

    match thickness {
        LineThickness::Light | LineThickness::Heavy => {
            let (x0, x1, y0, y1) = match thickness {
                LineThickness::Heavy => (3, 4, 7, 8),
                _ => (3, 3, 7, 7),
            };
            for y in y0..=y1 {
                if left {
                    hspan(y, 0, x1);
                }
                if right {
                    hspan(y, x0, LAST_X);
                }
            }
            for y in 0..GLYPH_HEIGHT {
                let reached = (up && y <= y1) || (down && y >= y0);
                if reached {
                    for x in x0..=x1 {
                        hspan(y, x, x);
                    }
                }
            }
        }
        LineThickness::Double => {
            // Horizontal strokes on rows 6 (upper) and 9 (lower)
            for (y, cut) in [(6, up), (9, down)] {
                if left {
                    hspan(y, 0, if cut { 2 } else { 5 });
                }
                if right {
                    hspan(y, if cut { 5 } else { 2 }, LAST_X);
                }
            }
            // Vertical strokes on columns 2 (left) and 5 (right)
            for (x, cut) in [(2, left), (5, right)] {
                if up {
                    for y in 0..=(if cut { 6 } else { 9 }) {
                        hspan(y, x, x);
                    }
                }
                if down {
                    for y in (if cut { 9 } else { 6 })..=LAST_Y {
                        hspan(y, x, x);
                    }
                }
            }
        }
    }

    Glyph::from_mask(GLYPH_WIDTH, GLYPH_HEIGHT, alpha)
}
