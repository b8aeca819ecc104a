//! Console cell
//!
//! Each cell in a console grid holds:
//! - A code point (0 means "nothing drawn")
//! - Foreground and background colors
//! - A font variant
//! - A dirty flag telling the rasterizer the cell must be redrawn
//!
//! Setters only raise the dirty flag when the stored value actually changes,
//! so repainting an identical frame costs nothing at render time.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::style::{BlendMode, Font};
use super::CodePoint;

/// A single cell in the console grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleCell {
    foreground: Color,
    background: Color,
    code_point: CodePoint,
    font: Font,
    #[serde(skip, default = "dirty_by_default")]
    dirty: bool,
}

fn dirty_by_default() -> bool {
    true
}

impl Default for ConsoleCell {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleCell {
    /// Create a black, empty cell. New cells start dirty so the first render
    /// paints the whole framebuffer.
    pub fn new() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::BLACK,
            code_point: 0,
            font: Font::Default,
            dirty: true,
        }
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn code_point(&self) -> CodePoint {
        self.code_point
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Whether a visible attribute changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check if the cell shows nothing (NUL or space)
    pub fn is_blank(&self) -> bool {
        is_blank_code_point(self.code_point)
    }

    pub fn set_foreground(&mut self, color: Color) {
        if self.foreground != color {
            self.foreground = color;
            self.dirty = true;
        }
    }

    /// Blend `color` into the background with `mode`
    pub fn set_background(&mut self, color: Color, mode: BlendMode) {
        let blended = mode.apply(self.background, color);
        if self.background != blended {
            self.background = blended;
            self.dirty = true;
        }
    }

    pub fn set_code_point(&mut self, code_point: CodePoint) {
        if self.code_point != code_point {
            self.code_point = code_point;
            self.dirty = true;
        }
    }

    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.dirty = true;
        }
    }

    /// Force a redraw on the next render
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Acknowledge the change; called by the rasterizer once drawn
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// NUL and space are both rendered as an empty cell
pub fn is_blank_code_point(code_point: CodePoint) -> bool {
    code_point == 0 || code_point == ' ' as CodePoint
}
