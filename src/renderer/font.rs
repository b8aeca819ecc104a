//! Bitmap font data
//!
//! A [`Glyph`] is a fixed-size alpha mask, one byte per pixel (0 is
//! transparent, 255 opaque). [`FontData`] maps code points to glyphs for one
//! font variant and always answers a lookup: code point 0 holds a blank
//! glyph that stands in for anything missing.

use std::collections::HashMap;

use thiserror::Error;

use crate::core::CodePoint;

/// Width of every glyph cell in pixels
pub const GLYPH_WIDTH: usize = 8;
/// Height of every glyph cell in pixels
pub const GLYPH_HEIGHT: usize = 16;

/// Errors raised while ingesting glyph images
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    #[error("image of {width}x{height} needs {expected} bytes, got {actual}")]
    BufferTooShort {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("glyph at ({x}, {y}) does not fit in a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("image of {width}x{height} is smaller than one glyph")]
    ImageTooSmall { width: usize, height: usize },

    #[error("{count} glyphs starting at {start:#x} overflow the code point range")]
    CodePointOverflow { start: CodePoint, count: usize },
}

/// A rendered glyph as an alpha mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl Glyph {
    /// Create a fully transparent glyph
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    /// Build a glyph from a row-major alpha mask of exactly `width * height`
    /// bytes
    pub(crate) fn from_mask(width: usize, height: usize, alpha: Vec<u8>) -> Self {
        debug_assert_eq!(alpha.len(), width * height);
        Self {
            width,
            height,
            alpha,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major alpha values
    pub fn pixels(&self) -> &[u8] {
        &self.alpha
    }

    /// Opacity at (x, y), 0 outside the glyph
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.alpha[y * self.width + x]
        } else {
            0
        }
    }

    /// Check if no pixel is drawn
    pub fn is_blank(&self) -> bool {
        self.alpha.iter().all(|&a| a == 0)
    }
}

/// Glyphs of one font variant, keyed by code point
#[derive(Debug, Clone)]
pub struct FontData {
    glyph_width: usize,
    glyph_height: usize,
    /// Answer for code point 0 and for every miss
    blank: Glyph,
    glyphs: HashMap<CodePoint, Glyph>,
}

impl FontData {
    /// Create a font holding only the blank glyph
    pub fn new(glyph_width: usize, glyph_height: usize) -> Self {
        Self {
            glyph_width,
            glyph_height,
            blank: Glyph::blank(glyph_width, glyph_height),
            glyphs: HashMap::new(),
        }
    }

    pub fn glyph_width(&self) -> usize {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> usize {
        self.glyph_height
    }

    /// Number of glyphs, the blank one included
    pub fn len(&self) -> usize {
        self.glyphs.len() + 1
    }

    /// A font always holds its blank glyph
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a code point has its own glyph (0 always does)
    pub fn contains(&self, code_point: CodePoint) -> bool {
        code_point == 0 || self.glyphs.contains_key(&code_point)
    }

    /// Glyph for a code point, the blank glyph if there is none
    pub fn glyph(&self, code_point: CodePoint) -> &Glyph {
        self.glyphs.get(&code_point).unwrap_or(&self.blank)
    }

    pub fn blank(&self) -> &Glyph {
        &self.blank
    }

    /// Copy one glyph out of a row-major alpha image
    ///
    /// The glyph is the `glyph_width` x `glyph_height` block whose top-left
    /// corner is at (`x`, `y`). Code point 0 is reserved and never written.
    /// An existing glyph for the code point is replaced; an all-zero block
    /// is not stored, so the code point falls back to blank. Returns whether
    /// a glyph was stored.
    pub fn add_glyph(
        &mut self,
        code_point: CodePoint,
        image: &[u8],
        image_width: usize,
        image_height: usize,
        x: usize,
        y: usize,
    ) -> Result<bool, FontError> {
        check_buffer(image, image_width, image_height)?;
        if x + self.glyph_width > image_width || y + self.glyph_height > image_height {
            return Err(FontError::OutOfBounds {
                x,
                y,
                width: image_width,
                height: image_height,
            });
        }
        if code_point == 0 {
            return Ok(false);
        }

        self.glyphs.remove(&code_point);

        let mut alpha = Vec::with_capacity(self.glyph_width * self.glyph_height);
        for row in y..y + self.glyph_height {
            let start = row * image_width + x;
            alpha.extend_from_slice(&image[start..start + self.glyph_width]);
        }
        if alpha.iter().all(|&a| a == 0) {
            return Ok(false);
        }

        self.glyphs.insert(
            code_point,
            Glyph::from_mask(self.glyph_width, self.glyph_height, alpha),
        );
        Ok(true)
    }

    /// Tile an alpha image into glyphs assigned to consecutive code points
    ///
    /// Blocks are read left to right, top to bottom; partial blocks at the
    /// right and bottom edges are ignored. Returns the number of glyphs
    /// stored (blank blocks are skipped).
    pub fn add_glyphs(
        &mut self,
        start: CodePoint,
        image: &[u8],
        image_width: usize,
        image_height: usize,
    ) -> Result<usize, FontError> {
        check_buffer(image, image_width, image_height)?;
        let columns = image_width / self.glyph_width.max(1);
        let rows = image_height / self.glyph_height.max(1);
        if columns == 0 || rows == 0 {
            return Err(FontError::ImageTooSmall {
                width: image_width,
                height: image_height,
            });
        }

        let count = columns * rows;
        let last_offset = CodePoint::try_from(count - 1).ok();
        if last_offset.and_then(|offset| start.checked_add(offset)).is_none() {
            return Err(FontError::CodePointOverflow { start, count });
        }

        let mut stored = 0;
        let mut code_point = start;
        for row in 0..rows {
            for column in 0..columns {
                let x = column * self.glyph_width;
                let y = row * self.glyph_height;
                if self.add_glyph(code_point, image, image_width, image_height, x, y)? {
                    stored += 1;
                }
                code_point = code_point.wrapping_add(1);
            }
        }
        Ok(stored)
    }

    /// Store an already built glyph, bypassing the blank check
    pub(crate) fn insert_glyph(&mut self, code_point: CodePoint, glyph: Glyph) {
        if code_point != 0 {
            self.glyphs.insert(code_point, glyph);
        }
    }
}

fn check_buffer(image: &[u8], width: usize, height: usize) -> Result<(), FontError> {
    let expected = width * height;
    if image.len() < expected {
        return Err(FontError::BufferTooShort {
            width,
            height,
            expected,
            actual: image.len(),
        });
    }
    Ok(())
}
