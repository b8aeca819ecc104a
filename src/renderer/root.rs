//! Root console rasterizer
//!
//! Owns the grid shown to the host, the font atlas and an XRGB8888
//! framebuffer. Rendering walks the grid and redraws only dirty cells, so a
//! frame where nothing changed costs one pass over the dirty flags.

use std::ops::{Deref, DerefMut};

use super::atlas::FontAtlas;
use super::font::FontError;
use crate::core::{CodePoint, Color, ConsoleGrid};

/// Bytes per framebuffer pixel
const BYTES_PER_PIXEL: usize = 4;

/// A console grid rendered into a pixel framebuffer
///
/// Dereferences to its [`ConsoleGrid`], so every drawing operation is
/// available directly on the root console.
#[derive(Debug, Clone)]
pub struct RootConsole {
    grid: ConsoleGrid,
    atlas: FontAtlas,
    /// Row-major 0x00RRGGBB pixels
    framebuffer: Vec<u32>,
}

impl RootConsole {
    /// Create a root console of `columns` x `rows` cells with the builtin
    /// fonts
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_atlas(columns, rows, FontAtlas::new())
    }

    /// Create a root console using a prepared atlas
    pub fn with_atlas(columns: usize, rows: usize, atlas: FontAtlas) -> Self {
        let pixels = columns * atlas.glyph_width() * rows * atlas.glyph_height();
        tracing::debug!(columns, rows, pixels, "creating root console");
        Self {
            grid: ConsoleGrid::new(columns, rows),
            atlas,
            framebuffer: vec![0; pixels],
        }
    }

    pub fn grid(&self) -> &ConsoleGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ConsoleGrid {
        &mut self.grid
    }

    pub fn atlas(&self) -> &FontAtlas {
        &self.atlas
    }

    /// Glyph width in pixels
    pub fn font_width(&self) -> usize {
        self.atlas.glyph_width()
    }

    /// Glyph height in pixels
    pub fn font_height(&self) -> usize {
        self.atlas.glyph_height()
    }

    /// Framebuffer width in pixels
    pub fn width(&self) -> usize {
        self.grid.width() * self.font_width()
    }

    /// Framebuffer height in pixels
    pub fn height(&self) -> usize {
        self.grid.height() * self.font_height()
    }

    /// Bytes per framebuffer row
    pub fn pitch(&self) -> usize {
        self.width() * BYTES_PER_PIXEL
    }

    /// Redraw dirty cells and return the framebuffer
    ///
    /// The flag is true when at least one cell was redrawn since the last
    /// call.
    pub fn render_image(&mut self) -> (&[u32], bool) {
        let columns = self.grid.width();
        let glyph_width = self.atlas.glyph_width();
        let glyph_height = self.atlas.glyph_height();
        let row_pixels = columns * glyph_width;

        let mut redrawn = 0usize;
        for (index, cell) in self.grid.cells_mut().iter_mut().enumerate() {
            if !cell.is_dirty() {
                continue;
            }
            let (column, row) = (index % columns, index / columns);
            let glyph = self.atlas.glyph(cell.font(), cell.code_point());
            let (background, foreground) = (cell.background(), cell.foreground());

            for j in 0..glyph_height {
                let line = (row * glyph_height + j) * row_pixels + column * glyph_width;
                let span = &mut self.framebuffer[line..line + glyph_width];
                for (i, pixel) in span.iter_mut().enumerate() {
                    let alpha = f32::from(glyph.alpha_at(i, j)) / 255.0;
                    *pixel = Color::lerp(background, foreground, alpha).to_xrgb();
                }
            }

            cell.clear_dirty();
            redrawn += 1;
        }

        tracing::trace!(redrawn, "rendered console");
        (&self.framebuffer, redrawn > 0)
    }

    /// Current framebuffer without rendering
    pub fn framebuffer(&self) -> &[u32] {
        &self.framebuffer
    }

    /// Framebuffer as XRGB8888 bytes in little-endian order
    pub fn framebuffer_bytes(&self) -> Vec<u8> {
        self.framebuffer
            .iter()
            .flat_map(|pixel| pixel.to_le_bytes())
            .collect()
    }

    /// Redraw every cell on the next render
    pub fn force_redraw(&mut self) {
        self.grid.mark_all_dirty();
    }

    /// Add alpha-mask glyphs to the custom font
    ///
    /// Cells already showing the custom font are not redrawn automatically;
    /// call [`RootConsole::force_redraw`] if glyphs on screen changed.
    pub fn add_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        image: &[u8],
    ) -> Result<usize, FontError> {
        self.atlas.add_to_custom_font(start, width, height, image)
    }

    /// Add packed monochrome glyphs to the custom font
    pub fn add_xbm_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<usize, FontError> {
        self.atlas.add_xbm_to_custom_font(start, width, height, data)
    }
}

impl Deref for RootConsole {
    type Target = ConsoleGrid;

    fn deref(&self) -> &ConsoleGrid {
        &self.grid
    }
}

impl DerefMut for RootConsole {
    fn deref_mut(&mut self) -> &mut ConsoleGrid {
        &mut self.grid
    }
}
