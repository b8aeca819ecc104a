//! Console Core Module
//!
//! Platform-independent console state. This module contains:
//! - Colors, the named palette and the background blend algebra
//! - Text styles and box-drawing lookup
//! - Cells with dirty tracking and the console grid
//! - Text layout (alignment, word wrapping, formatted printing)
//! - Grid-to-grid compositing (blit)
//! - Deterministic snapshot generation
//!
//! Nothing here touches pixels: the grid is turned into a framebuffer by
//! [`crate::renderer::RootConsole`].

mod blit;
mod cell;
mod color;
mod grid;
pub mod layout;
mod palette;
mod snapshot;
mod style;

/// A Unicode scalar value stored in a cell (0 means "nothing drawn")
pub type CodePoint = u32;

pub use cell::{is_blank_code_point, ConsoleCell};
pub use color::Color;
pub use grid::{ConsoleGrid, Rect};
pub use palette::PALETTE;
pub use snapshot::{CellSnapshot, Snapshot};
pub use style::{
    box_drawing_char, Alignment, BlendMode, BoxDrawing, Font, LineThickness, TextStyle,
};
