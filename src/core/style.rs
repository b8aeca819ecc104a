//! Text styles
//!
//! A [`TextStyle`] bundles everything a print/fill operation needs besides
//! the characters themselves: colors, font, how the background is blended
//! into what is already there, alignment and box-drawing line thickness.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::CodePoint;

/// Font variants available to cells
///
/// `Custom` starts empty and is filled by the host at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    #[default]
    Default,
    Bold,
    Compact,
    CompactBold,
    Custom,
}

impl Font {
    /// Number of font variants
    pub const COUNT: usize = 5;

    /// All variants, in index order
    pub const ALL: [Font; Font::COUNT] = [
        Font::Default,
        Font::Bold,
        Font::Compact,
        Font::CompactBold,
        Font::Custom,
    ];

    /// Dense index of this variant, `0..Font::COUNT`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How a new background color is combined with the existing one
///
/// Operations are per channel with channels seen as 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Keep the existing color
    None,
    /// Replace: `new`
    #[default]
    Set,
    /// `old * new`
    Multiply,
    /// `max(old, new)`
    Lighten,
    /// `min(old, new)`
    Darken,
    /// `1 - (1 - old) * (1 - new)`
    Screen,
    /// `new / (1 - old)`
    ColorDodge,
    /// `1 - (1 - old) / new`
    ColorBurn,
    /// `old + new`
    Add,
    /// `old + new - 1`
    Burn,
    /// `new < 0.5 ? 2 * old * new : 1 - 2 * (1 - old) * (1 - new)`
    Overlay,
}

impl BlendMode {
    /// Blend `new` over `current`
    pub fn apply(self, current: Color, new: Color) -> Color {
        match self {
            BlendMode::None => current,
            BlendMode::Set => new,
            BlendMode::Multiply => current * new,
            BlendMode::Lighten => Color::lighten(current, new),
            BlendMode::Darken => Color::darken(current, new),
            BlendMode::Screen => Color::screen(current, new),
            BlendMode::ColorDodge => Color::color_dodge(current, new),
            BlendMode::ColorBurn => Color::color_burn(current, new),
            BlendMode::Add => current + new,
            BlendMode::Burn => Color::burn(current, new),
            BlendMode::Overlay => Color::overlay(current, new),
        }
    }
}

/// Horizontal text alignment relative to the print position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Line style used by lines and frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineThickness {
    /// ─
    #[default]
    Light,
    /// ━
    Heavy,
    /// ═
    Double,
}

/// Box-drawing shapes, named after the Unicode character names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxDrawing {
    /// ─
    Horizontal,
    /// │
    Vertical,
    /// ┌
    DownAndRight,
    /// ┐
    DownAndLeft,
    /// └
    UpAndRight,
    /// ┘
    UpAndLeft,
    /// ├
    VerticalAndRight,
    /// ┤
    VerticalAndLeft,
    /// ┬
    DownAndHorizontal,
    /// ┴
    UpAndHorizontal,
    /// ┼
    VerticalAndHorizontal,
}

impl BoxDrawing {
    pub const COUNT: usize = 11;

    pub const ALL: [BoxDrawing; BoxDrawing::COUNT] = [
        BoxDrawing::Horizontal,
        BoxDrawing::Vertical,
        BoxDrawing::DownAndRight,
        BoxDrawing::DownAndLeft,
        BoxDrawing::UpAndRight,
        BoxDrawing::UpAndLeft,
        BoxDrawing::VerticalAndRight,
        BoxDrawing::VerticalAndLeft,
        BoxDrawing::DownAndHorizontal,
        BoxDrawing::UpAndHorizontal,
        BoxDrawing::VerticalAndHorizontal,
    ];

    /// Which arms of the cell this shape reaches: (up, down, left, right)
    pub const fn arms(self) -> (bool, bool, bool, bool) {
        match self {
            BoxDrawing::Horizontal => (false, false, true, true),
            BoxDrawing::Vertical => (true, true, false, false),
            BoxDrawing::DownAndRight => (false, true, false, true),
            BoxDrawing::DownAndLeft => (false, true, true, false),
            BoxDrawing::UpAndRight => (true, false, false, true),
            BoxDrawing::UpAndLeft => (true, false, true, false),
            BoxDrawing::VerticalAndRight => (true, true, false, true),
            BoxDrawing::VerticalAndLeft => (true, true, true, false),
            BoxDrawing::DownAndHorizontal => (false, true, true, true),
            BoxDrawing::UpAndHorizontal => (true, false, true, true),
            BoxDrawing::VerticalAndHorizontal => (true, true, true, true),
        }
    }
}

impl LineThickness {
    pub const ALL: [LineThickness; 3] = [
        LineThickness::Light,
        LineThickness::Heavy,
        LineThickness::Double,
    ];
}

/// Box-drawing code points, indexed by `[LineThickness][BoxDrawing]`
const BOX_DRAWING_CHARS: [[char; BoxDrawing::COUNT]; 3] = [
    ['─', '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'],
    ['━', '┃', '┏', '┓', '┗', '┛', '┣', '┫', '┳', '┻', '╋'],
    ['═', '║', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩', '╬'],
];

/// Code point of a box-drawing shape for a given line thickness
pub const fn box_drawing_char(thickness: LineThickness, shape: BoxDrawing) -> CodePoint {
    BOX_DRAWING_CHARS[thickness as usize][shape as usize] as CodePoint
}

/// Rendering attributes applied by print and fill operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Background color
    pub background: Color,
    /// Foreground (glyph) color
    pub foreground: Color,
    /// Font variant
    pub font: Font,
    /// How `background` is combined with the existing cell background
    pub blend_mode: BlendMode,
    /// Text alignment
    pub alignment: Alignment,
    /// Line style for lines and frames
    pub line_thickness: LineThickness,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            font: Font::Default,
            blend_mode: BlendMode::Set,
            alignment: Alignment::Left,
            line_thickness: LineThickness::Light,
        }
    }
}

impl TextStyle {
    /// Create a style with the given colors and default attributes
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            ..Self::default()
        }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub fn with_foreground(self, foreground: Color) -> Self {
        Self { foreground, ..self }
    }

    pub fn with_font(self, font: Font) -> Self {
        Self { font, ..self }
    }

    pub fn with_blend_mode(self, blend_mode: BlendMode) -> Self {
        Self { blend_mode, ..self }
    }

    pub fn with_alignment(self, alignment: Alignment) -> Self {
        Self { alignment, ..self }
    }

    pub fn with_line_thickness(self, line_thickness: LineThickness) -> Self {
        Self {
            line_thickness,
            ..self
        }
    }

    /// Box-drawing code point for this style's line thickness
    pub fn box_drawing_char(&self, shape: BoxDrawing) -> CodePoint {
        box_drawing_char(self.line_thickness, shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_box_drawing_table_is_complete() {
        let mut seen = HashSet::new();
        for thickness in LineThickness::ALL {
            for shape in BoxDrawing::ALL {
                let cp = box_drawing_char(thickness, shape);
                assert!((0x2500..=0x257F).contains(&cp), "{cp:#x} outside box block");
                seen.insert(cp);
            }
        }
        assert_eq!(seen.len(), 33);
    }

    #[test]
    fn test_box_drawing_lookup() {
        let style = TextStyle::default();
        assert_eq!(style.box_drawing_char(BoxDrawing::DownAndRight), '┌' as u32);
        let heavy = style.with_line_thickness(LineThickness::Heavy);
        assert_eq!(heavy.box_drawing_char(BoxDrawing::Vertical), '┃' as u32);
        let double = style.with_line_thickness(LineThickness::Double);
        assert_eq!(
            double.box_drawing_char(BoxDrawing::VerticalAndHorizontal),
            '╬' as u32
        );
    }

    #[test]
    fn test_blend_modes() {
        let old = Color::rgb(100, 100, 100);
        let new = Color::rgb(200, 50, 0);
        assert_eq!(BlendMode::None.apply(old, new), old);
        assert_eq!(BlendMode::Set.apply(old, new), new);
        assert_eq!(BlendMode::Lighten.apply(old, new), Color::rgb(200, 100, 100));
        assert_eq!(BlendMode::Darken.apply(old, new), Color::rgb(100, 50, 0));
        assert_eq!(BlendMode::Add.apply(old, new), Color::rgb(255, 150, 100));
        assert_eq!(BlendMode::Burn.apply(old, new), Color::rgb(45, 0, 0));
        assert_eq!(BlendMode::Multiply.apply(old, Color::WHITE), old);
    }

    #[test]
    fn test_style_serde() {
        let style = TextStyle::default()
            .with_font(Font::CompactBold)
            .with_blend_mode(BlendMode::ColorDodge);
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"compact_bold\""));
        assert!(json.contains("\"color_dodge\""));
        let restored: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, restored);
    }

    #[test]
    fn test_font_index_matches_all() {
        for (i, font) in Font::ALL.iter().enumerate() {
            assert_eq!(font.index(), i);
        }
    }
}
