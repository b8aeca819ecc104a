//! Deterministic snapshot generation
//!
//! Snapshots capture the visible state of a console grid in a serializable
//! format for golden tests and debugging. Dirty flags are not part of the
//! visible state and are left out.

use serde::{Deserialize, Serialize};

use super::cell::ConsoleCell;
use super::color::Color;
use super::grid::ConsoleGrid;
use super::style::{BlendMode, Font, TextStyle};
use super::CodePoint;

/// A complete snapshot of a console grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions
    pub width: usize,
    pub height: usize,
    /// Style applied on clear
    pub default_style: TextStyle,
    /// Blit transparency key, if enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_color: Option<Color>,
    /// Cell content (row-major)
    pub grid: Vec<Vec<CellSnapshot>>,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Character content, empty for code point 0
    pub content: String,
    pub code_point: CodePoint,
    pub fg: Color,
    pub bg: Color,
    #[serde(default, skip_serializing_if = "is_default_font")]
    pub font: Font,
}

fn is_default_font(font: &Font) -> bool {
    *font == Font::Default
}

impl From<&ConsoleCell> for CellSnapshot {
    fn from(cell: &ConsoleCell) -> Self {
        let content = match cell.code_point() {
            0 => String::new(),
            cp => char::from_u32(cp).map(String::from).unwrap_or_default(),
        };
        CellSnapshot {
            content,
            code_point: cell.code_point(),
            fg: cell.foreground(),
            bg: cell.background(),
            font: cell.font(),
        }
    }
}

impl Snapshot {
    /// Create a snapshot from the current grid state
    pub fn from_grid(grid: &ConsoleGrid) -> Self {
        let rows = grid
            .cells()
            .chunks(grid.width().max(1))
            .take(grid.height())
            .map(|row| row.iter().map(CellSnapshot::from).collect())
            .collect();

        Snapshot {
            width: grid.width(),
            height: grid.height(),
            default_style: grid.default_style(),
            ignore_color: grid.ignore_color(),
            grid: rows,
        }
    }

    /// Rebuild a grid holding the captured state (every cell dirty)
    pub fn to_grid(&self) -> ConsoleGrid {
        let mut grid = ConsoleGrid::new(self.width, self.height);
        grid.set_default_style(self.default_style);
        if let Some(color) = self.ignore_color {
            grid.set_ignore_color(color);
        }
        for (y, row) in (0..).zip(&self.grid) {
            for (x, cell) in (0..).zip(row) {
                let style = TextStyle::new(cell.fg, cell.bg)
                    .with_font(cell.font)
                    .with_blend_mode(BlendMode::Set);
                grid.set_char_styled(x, y, cell.code_point, &style);
            }
        }
        grid.mark_all_dirty();
        grid
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a simple text representation of the grid (for debugging)
    pub fn to_text(&self) -> String {
        let mut result = String::new();

        for row in &self.grid {
            for cell in row {
                if cell.content.is_empty() {
                    result.push(' ');
                } else {
                    result.push_str(&cell.content);
                }
            }
            while result.ends_with(' ') {
                result.pop();
            }
            result.push('\n');
        }

        while result.ends_with("\n\n") {
            result.pop();
        }

        result
    }

    /// Compare code points only, ignoring colors and fonts
    pub fn text_equals(&self, other: &Snapshot) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .grid
                .iter()
                .flatten()
                .zip(other.grid.iter().flatten())
                .all(|(a, b)| a.code_point == b.code_point)
    }
}
