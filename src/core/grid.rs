//! Console Grid
//!
//! A fixed-size 2D array of [`ConsoleCell`]s plus the style used to clear
//! it. All coordinates are signed: layout math (alignment, frames drawn
//! partly off-screen) regularly lands outside the grid, and any write
//! outside is silently dropped.

use std::fmt;

use super::cell::ConsoleCell;
use super::color::Color;
use super::layout;
use super::style::{Alignment, BlendMode, BoxDrawing, Font, TextStyle};
use super::CodePoint;

/// A rectangular region in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The console grid - a 2D array of cells
#[derive(Debug, Clone)]
pub struct ConsoleGrid {
    /// Cells in row-major order
    cells: Vec<ConsoleCell>,
    width: usize,
    height: usize,
    /// Applied by `clear` and by the non-styled print entry points
    default_style: TextStyle,
    /// Source cells with this background are skipped when blitting
    ignore_color: Option<Color>,
}

impl ConsoleGrid {
    /// Create a grid of `width` x `height` black, empty, dirty cells
    pub fn new(width: usize, height: usize) -> Self {
        tracing::debug!(width, height, "creating console grid");
        Self {
            cells: vec![ConsoleCell::new(); width * height],
            width,
            height,
            default_style: TextStyle::default(),
            ignore_color: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The whole grid as a rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Check if a position lies inside the grid
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_inside(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut ConsoleCell> {
        let index = self.index(x, y)?;
        self.cells.get_mut(index)
    }

    // ----- Default style -----

    pub fn default_style(&self) -> TextStyle {
        self.default_style
    }

    pub fn set_default_style(&mut self, style: TextStyle) {
        self.default_style = style;
    }

    pub fn set_default_background(&mut self, color: Color) {
        self.default_style.background = color;
    }

    pub fn set_default_foreground(&mut self, color: Color) {
        self.default_style.foreground = color;
    }

    pub fn set_default_blend_mode(&mut self, mode: BlendMode) {
        self.default_style.blend_mode = mode;
    }

    pub fn set_default_alignment(&mut self, alignment: Alignment) {
        self.default_style.alignment = alignment;
    }

    pub fn set_default_font(&mut self, font: Font) {
        self.default_style.font = font;
    }

    // ----- Whole-grid operations -----

    /// Reset every cell to code point 0 and the default colors and font
    ///
    /// Cells that already hold those values stay clean, so clearing an
    /// already-cleared grid redraws nothing.
    pub fn clear(&mut self) {
        let style = self.default_style;
        for cell in &mut self.cells {
            cell.set_code_point(0);
            cell.set_foreground(style.foreground);
            cell.set_background(style.background, BlendMode::Set);
            cell.set_font(style.font);
        }
    }

    /// Flag every cell for redraw
    pub fn mark_all_dirty(&mut self) {
        for cell in &mut self.cells {
            cell.mark_dirty();
        }
    }

    /// Number of cells waiting to be redrawn
    pub fn dirty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_dirty()).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[ConsoleCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [ConsoleCell] {
        &mut self.cells
    }

    // ----- Cell mutation -----

    /// Set only the code point of a cell
    pub fn set_char(&mut self, x: i32, y: i32, code_point: CodePoint) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_code_point(code_point);
        }
    }

    /// Set the code point, colors and font of a cell
    ///
    /// The background goes through the style's blend mode.
    pub fn set_char_styled(&mut self, x: i32, y: i32, code_point: CodePoint, style: &TextStyle) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_code_point(code_point);
            cell.set_foreground(style.foreground);
            cell.set_background(style.background, style.blend_mode);
            cell.set_font(style.font);
        }
    }

    /// Apply a style to a cell, keeping its code point
    pub fn set_style(&mut self, x: i32, y: i32, style: &TextStyle) {
        let code_point = self.char_at(x, y);
        self.set_char_styled(x, y, code_point, style);
    }

    /// Blend a color into a cell's background
    pub fn set_background(&mut self, x: i32, y: i32, color: Color, mode: BlendMode) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_background(color, mode);
        }
    }

    pub fn set_foreground(&mut self, x: i32, y: i32, color: Color) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_foreground(color);
        }
    }

    pub fn set_font(&mut self, x: i32, y: i32, font: Font) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_font(font);
        }
    }

    // ----- Cell inspection -----

    pub fn cell(&self, x: i32, y: i32) -> Option<&ConsoleCell> {
        self.index(x, y).and_then(|index| self.cells.get(index))
    }

    /// Code point of a cell, 0 outside the grid
    pub fn char_at(&self, x: i32, y: i32) -> CodePoint {
        self.cell(x, y).map_or(0, ConsoleCell::code_point)
    }

    /// Background of a cell, the default background outside the grid
    pub fn background_at(&self, x: i32, y: i32) -> Color {
        self.cell(x, y)
            .map_or(self.default_style.background, ConsoleCell::background)
    }

    /// Foreground of a cell, the default foreground outside the grid
    pub fn foreground_at(&self, x: i32, y: i32) -> Color {
        self.cell(x, y)
            .map_or(self.default_style.foreground, ConsoleCell::foreground)
    }

    /// Font of a cell, the default font outside the grid
    pub fn font_at(&self, x: i32, y: i32) -> Font {
        self.cell(x, y).map_or(self.default_style.font, ConsoleCell::font)
    }

    /// Style of a cell
    ///
    /// Colors and font come from the cell; blend mode, alignment and line
    /// thickness are not stored per cell and come from the default style.
    pub fn style_at(&self, x: i32, y: i32) -> TextStyle {
        let mut style = self.default_style;
        if let Some(cell) = self.cell(x, y) {
            style.foreground = cell.foreground();
            style.background = cell.background();
            style.font = cell.font();
        }
        style
    }

    // ----- Blit transparency -----

    /// Skip source cells whose background equals `color` when blitting
    pub fn set_ignore_color(&mut self, color: Color) {
        self.ignore_color = Some(color);
    }

    pub fn reset_ignore_color(&mut self) {
        self.ignore_color = None;
    }

    pub fn ignore_color(&self) -> Option<Color> {
        self.ignore_color
    }

    // ----- Text -----

    /// Print a string with the default style
    pub fn print(&mut self, x: i32, y: i32, text: &str) {
        let style = self.default_style;
        self.print_styled(x, y, &style, text);
    }

    /// Print a string on one row, aligned around `x` per the style
    pub fn print_styled(&mut self, x: i32, y: i32, style: &TextStyle, text: &str) {
        if !text.is_empty() {
            self.print_code_points(x, y, style, &layout::decode(text));
        }
    }

    /// Print already decoded code points on one row
    pub fn print_code_points(
        &mut self,
        x: i32,
        y: i32,
        style: &TextStyle,
        code_points: &[CodePoint],
    ) {
        self.print_aligned(i64::from(x), y, style, code_points);
    }

    /// Print a run aligned around `anchor`, skipping columns off the grid
    fn print_aligned(
        &mut self,
        anchor: i64,
        y: i32,
        style: &TextStyle,
        code_points: &[CodePoint],
    ) {
        let start = layout::aligned_start(anchor, code_points.len(), style.alignment);
        for column in layout::clip_span(start, code_points.len(), self.width) {
            let offset = (i64::from(column) - start) as usize;
            if let Some(&code_point) = code_points.get(offset) {
                self.set_char_styled(column, y, code_point, style);
            }
        }
    }

    /// Print formatted text on one row
    pub fn print_fmt(&mut self, x: i32, y: i32, style: &TextStyle, args: fmt::Arguments<'_>) {
        let text = layout::format_text(args);
        self.print_styled(x, y, style, &text);
    }

    /// Print word-wrapped text inside a rectangle
    ///
    /// The whole rectangle first receives the style (erasing existing
    /// glyphs when `clear_text` is set), then at most `height` wrapped
    /// lines are printed with the background left as painted.
    #[allow(clippy::too_many_arguments)]
    pub fn print_rect(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        text: &str,
    ) {
        self.print_rect_code_points(x, y, width, height, clear_text, style, &layout::decode(text));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn print_rect_code_points(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        code_points: &[CodePoint],
    ) {
        let lines = layout::wrap(width, code_points);
        let anchor = layout::anchor_in_rect(x, width, style.alignment);

        self.rect(x, y, width, height, clear_text, style);

        let text_style = style.with_blend_mode(BlendMode::None);
        for row in layout::clip_span(i64::from(y), lines.len().min(height), self.height) {
            let line = &lines[(i64::from(row) - i64::from(y)) as usize];
            self.print_aligned(anchor, row, &text_style, line);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn print_rect_fmt(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        args: fmt::Arguments<'_>,
    ) {
        let text = layout::format_text(args);
        self.print_rect(x, y, width, height, clear_text, style, &text);
    }

    /// Number of lines `print_rect` would produce for `text` at `width`
    pub fn height_rect(width: usize, text: &str) -> usize {
        Self::height_rect_code_points(width, &layout::decode(text))
    }

    pub fn height_rect_code_points(width: usize, code_points: &[CodePoint]) -> usize {
        layout::wrap(width, code_points).len()
    }

    pub fn height_rect_fmt(width: usize, args: fmt::Arguments<'_>) -> usize {
        Self::height_rect(width, &layout::format_text(args))
    }

    // ----- Fills and lines -----

    /// Apply a style to every cell of a rectangle
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
    ) {
        let columns = layout::clip_span(i64::from(x), width, self.width);
        for row in layout::clip_span(i64::from(y), height, self.height) {
            for column in columns.clone() {
                let code_point = if clear_text {
                    0
                } else {
                    self.char_at(column, row)
                };
                self.set_char_styled(column, row, code_point, style);
            }
        }
    }

    /// Horizontal line of `length` cells starting at (x, y)
    pub fn hline(&mut self, x: i32, y: i32, length: usize, style: &TextStyle) {
        let code_point = style.box_drawing_char(BoxDrawing::Horizontal);
        for column in layout::clip_span(i64::from(x), length, self.width) {
            self.set_char_styled(column, y, code_point, style);
        }
    }

    /// Vertical line of `length` cells starting at (x, y)
    pub fn vline(&mut self, x: i32, y: i32, length: usize, style: &TextStyle) {
        let code_point = style.box_drawing_char(BoxDrawing::Vertical);
        for row in layout::clip_span(i64::from(y), length, self.height) {
            self.set_char_styled(x, row, code_point, style);
        }
    }

    // ----- Frames -----

    /// Draw a bordered window with an optional title on the top border
    ///
    /// Frames need at least 2x2 cells; smaller ones draw nothing. The title
    /// is centered over the top edge between the corners, leaving the
    /// border glyphs in place where the title does not cover them. Titles
    /// wider than the space between the corners are cut to fit.
    #[allow(clippy::too_many_arguments)]
    pub fn print_frame(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        title: &str,
    ) {
        self.print_frame_code_points(x, y, width, height, clear_text, style, &layout::decode(title));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn print_frame_code_points(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        title: &[CodePoint],
    ) {
        if width < 2 || height < 2 {
            return;
        }
        let (inner_width, inner_height) = (width - 2, height - 2);
        let (left, top) = (x.saturating_add(1), y.saturating_add(1));
        let right = layout::advance(x, width - 1);
        let bottom = layout::advance(y, height - 1);

        self.rect(left, top, inner_width, inner_height, clear_text, style);

        self.hline(left, y, inner_width, style);
        self.hline(left, bottom, inner_width, style);
        self.vline(x, top, inner_height, style);
        self.vline(right, top, inner_height, style);

        let corners = [
            (x, y, BoxDrawing::DownAndRight),
            (right, y, BoxDrawing::DownAndLeft),
            (x, bottom, BoxDrawing::UpAndRight),
            (right, bottom, BoxDrawing::UpAndLeft),
        ];
        for (column, row, shape) in corners {
            self.set_char_styled(column, row, style.box_drawing_char(shape), style);
        }

        if !title.is_empty() {
            let title_style = style
                .with_blend_mode(BlendMode::None)
                .with_alignment(Alignment::Center);
            let title = &title[..title.len().min(inner_width)];
            self.rect(left, y, inner_width, 1, false, &title_style);
            let anchor = layout::anchor_in_rect(left, inner_width, Alignment::Center);
            self.print_aligned(anchor, y, &title_style, title);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn print_frame_fmt(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        clear_text: bool,
        style: &TextStyle,
        args: fmt::Arguments<'_>,
    ) {
        let title = layout::format_text(args);
        self.print_frame(x, y, width, height, clear_text, style, &title);
    }

    /// Render the code points as plain text, one line per row
    ///
    /// Empty cells become spaces and trailing spaces are trimmed.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + self.height);
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            let line: String = row
                .iter()
                .map(|cell| match cell.code_point() {
                    0 => ' ',
                    cp => char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER),
                })
                .collect();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::LineThickness;

    fn clean_grid(width: usize, height: usize) -> ConsoleGrid {
        let mut grid = ConsoleGrid::new(width, height);
        grid.clear();
        for cell in grid.cells_mut() {
            cell.clear_dirty();
        }
        grid
    }

    fn row_text(grid: &ConsoleGrid, y: i32) -> String {
        grid.to_text().lines().nth(y as usize).unwrap_or("").to_string()
    }

    #[test]
    fn test_new_grid_is_dirty() {
        let grid = ConsoleGrid::new(4, 3);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.dirty_count(), 12);
    }

    #[test]
    fn test_clear_applies_default_style() {
        let mut grid = ConsoleGrid::new(3, 2);
        grid.set_default_background(Color::rgb(10, 20, 30));
        grid.set_default_foreground(Color::rgb(1, 2, 3));
        grid.set_default_font(Font::Bold);
        grid.print(0, 0, "abc");
        grid.clear();
        for cell in grid.cells() {
            assert_eq!(cell.code_point(), 0);
            assert_eq!(cell.background(), Color::rgb(10, 20, 30));
            assert_eq!(cell.foreground(), Color::rgb(1, 2, 3));
            assert_eq!(cell.font(), Font::Bold);
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut grid = clean_grid(5, 5);
        grid.clear();
        assert_eq!(grid.dirty_count(), 0);
    }

    #[test]
    fn test_clear_ignores_default_blend_mode() {
        let mut grid = ConsoleGrid::new(2, 1);
        grid.set_default_background(Color::WHITE);
        grid.set_default_blend_mode(BlendMode::None);
        grid.clear();
        assert_eq!(grid.background_at(0, 0), Color::WHITE);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = clean_grid(3, 3);
        let style = TextStyle::default();
        grid.set_char(-1, 0, 'x' as CodePoint);
        grid.set_char_styled(3, 0, 'x' as CodePoint, &style);
        grid.set_background(0, 3, Color::WHITE, BlendMode::Set);
        grid.set_foreground(-5, -5, Color::WHITE);
        grid.set_font(100, 0, Font::Bold);
        assert_eq!(grid.dirty_count(), 0);
        assert_eq!(grid.char_at(-1, 0), 0);
        assert!(grid.cell(3, 0).is_none());
    }

    #[test]
    fn test_set_style_keeps_code_point() {
        let mut grid = ConsoleGrid::new(2, 1);
        grid.set_char(0, 0, 'Q' as CodePoint);
        let style = TextStyle::new(Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)).with_font(Font::Compact);
        grid.set_style(0, 0, &style);
        assert_eq!(grid.char_at(0, 0), 'Q' as CodePoint);
        assert_eq!(grid.foreground_at(0, 0), Color::rgb(1, 1, 1));
        assert_eq!(grid.background_at(0, 0), Color::rgb(2, 2, 2));
        assert_eq!(grid.font_at(0, 0), Font::Compact);
    }

    #[test]
    fn test_set_background_blends() {
        let mut grid = ConsoleGrid::new(1, 1);
        grid.set_background(0, 0, Color::rgb(100, 0, 0), BlendMode::Set);
        grid.set_background(0, 0, Color::rgb(50, 10, 0), BlendMode::Add);
        assert_eq!(grid.background_at(0, 0), Color::rgb(150, 10, 0));
    }

    #[test]
    fn test_style_at_fills_from_default() {
        let mut grid = ConsoleGrid::new(2, 2);
        grid.set_default_alignment(Alignment::Right);
        grid.set_foreground(1, 1, Color::rgb(9, 9, 9));
        let style = grid.style_at(1, 1);
        assert_eq!(style.alignment, Alignment::Right);
        assert_eq!(style.foreground, Color::rgb(9, 9, 9));
        assert_eq!(grid.style_at(7, 7), grid.default_style());
    }

    #[test]
    fn test_print_alignment() {
        let mut grid = clean_grid(10, 3);
        let style = TextStyle::default();
        grid.print_styled(0, 0, &style, "abc");
        grid.print_styled(5, 1, &style.with_alignment(Alignment::Center), "abcd");
        grid.print_styled(9, 2, &style.with_alignment(Alignment::Right), "abc");
        assert_eq!(row_text(&grid, 0), "abc");
        assert_eq!(row_text(&grid, 1), "   abcd");
        assert_eq!(row_text(&grid, 2), "       abc");
    }

    #[test]
    fn test_print_clips_at_edges() {
        let mut grid = clean_grid(4, 1);
        let style = TextStyle::default().with_alignment(Alignment::Right);
        grid.print_styled(1, 0, &style, "xyz");
        assert_eq!(row_text(&grid, 0), "yz");
    }

    #[test]
    fn test_print_utf8() {
        let mut grid = clean_grid(4, 1);
        grid.print(0, 0, "é→");
        assert_eq!(grid.char_at(0, 0), 'é' as CodePoint);
        assert_eq!(grid.char_at(1, 0), '→' as CodePoint);
        assert_eq!(grid.char_at(2, 0), 0);
    }

    #[test]
    fn test_print_fmt() {
        let mut grid = clean_grid(12, 1);
        let style = grid.default_style();
        grid.print_fmt(0, 0, &style, format_args!("HP {:>3}", 42));
        assert_eq!(row_text(&grid, 0), "HP  42");
    }

    #[test]
    fn test_print_rect_wraps_and_clips_lines() {
        let mut grid = clean_grid(12, 4);
        let style = TextStyle::default();
        grid.print_rect(1, 0, 10, 1, true, &style, "The quick brown fox");
        assert_eq!(row_text(&grid, 0), " The quick");
        assert_eq!(row_text(&grid, 1), "");
    }

    #[test]
    fn test_print_rect_paints_background() {
        let mut grid = clean_grid(6, 3);
        let style = TextStyle::new(Color::WHITE, Color::rgb(0, 0, 200));
        grid.print_rect(0, 0, 4, 2, true, &style, "hi");
        assert_eq!(grid.background_at(3, 1), Color::rgb(0, 0, 200));
        assert_eq!(grid.background_at(4, 0), Color::BLACK);
        assert_eq!(grid.char_at(0, 0), 'h' as CodePoint);
    }

    #[test]
    fn test_print_rect_centered() {
        let mut grid = clean_grid(10, 1);
        let style = TextStyle::default().with_alignment(Alignment::Center);
        grid.print_rect(0, 0, 10, 1, true, &style, "ab");
        // anchor at column 5, "ab" starts at 5 - 1
        assert_eq!(row_text(&grid, 0), "    ab");
    }

    #[test]
    fn test_print_rect_keeps_text_without_clear() {
        let mut grid = clean_grid(5, 2);
        grid.print(0, 1, "zz");
        let style = TextStyle::default();
        grid.print_rect(0, 0, 5, 2, false, &style, "a");
        assert_eq!(row_text(&grid, 1), "zz");
        grid.print_rect(0, 0, 5, 2, true, &style, "a");
        assert_eq!(row_text(&grid, 1), "");
    }

    #[test]
    fn test_height_rect_matches_print_rect() {
        let text = "The quick brown fox jumps over the lazy dog";
        let lines = ConsoleGrid::height_rect(10, text);
        let mut grid = clean_grid(10, 10);
        grid.print_rect(0, 0, 10, 10, true, &TextStyle::default(), text);
        let printed = grid.to_text().lines().filter(|l| !l.is_empty()).count();
        assert_eq!(lines, printed);
        assert_eq!(ConsoleGrid::height_rect(10, ""), 0);
        assert_eq!(ConsoleGrid::height_rect_fmt(10, format_args!("{} {}", "a", "b")), 1);
    }

    #[test]
    fn test_rect_clear_text() {
        let mut grid = clean_grid(3, 3);
        grid.print(0, 1, "abc");
        grid.rect(1, 1, 1, 1, true, &TextStyle::default());
        assert_eq!(row_text(&grid, 1), "a c");
    }

    #[test]
    fn test_lines() {
        let mut grid = clean_grid(4, 4);
        let style = TextStyle::default().with_line_thickness(LineThickness::Heavy);
        grid.hline(0, 0, 4, &style);
        grid.vline(0, 1, 3, &style);
        assert_eq!(row_text(&grid, 0), "━━━━");
        assert_eq!(row_text(&grid, 3), "┃");
    }

    #[test]
    fn test_frame_light() {
        let mut grid = clean_grid(5, 4);
        grid.print_frame(0, 0, 5, 4, true, &TextStyle::default(), "");
        assert_eq!(grid.to_text(), "┌───┐\n│   │\n│   │\n└───┘\n");
    }

    #[test]
    fn test_frame_with_title() {
        let mut grid = clean_grid(9, 3);
        grid.print_frame(0, 0, 9, 3, true, &TextStyle::default(), "ab");
        assert_eq!(row_text(&grid, 0), "┌──ab───┐");
    }

    #[test]
    fn test_frame_fmt_title() {
        let mut grid = clean_grid(9, 3);
        let style = TextStyle::default().with_line_thickness(LineThickness::Double);
        grid.print_frame_fmt(0, 0, 9, 3, true, &style, format_args!("{}", 7));
        assert_eq!(row_text(&grid, 0), "╔═══7═══╗");
    }

    #[test]
    fn test_small_frame_is_noop() {
        let mut grid = clean_grid(4, 4);
        grid.print_frame(0, 0, 1, 4, true, &TextStyle::default(), "x");
        grid.print_frame(0, 0, 4, 1, true, &TextStyle::default(), "x");
        assert_eq!(grid.dirty_count(), 0);
    }

    #[test]
    fn test_frame_title_wider_than_frame_is_cut() {
        let mut grid = clean_grid(14, 3);
        grid.print_frame(4, 0, 6, 3, true, &TextStyle::default(), "Inventory");
        assert_eq!(row_text(&grid, 0), "    ┌Inve┐");
        assert_eq!(grid.char_at(3, 0), 0);
        assert_eq!(grid.char_at(10, 0), 0);
        assert_eq!(row_text(&grid, 2), "    └────┘");
    }

    #[test]
    fn test_far_off_grid_coordinates_draw_nothing() {
        let mut grid = clean_grid(4, 3);
        let style = TextStyle::default();
        grid.print(i32::MAX, 0, "a");
        grid.print_styled(i32::MIN, 0, &style.with_alignment(Alignment::Right), "ab");
        grid.print_styled(i32::MAX, 1, &style.with_alignment(Alignment::Center), "abc");
        grid.print_styled(i32::MIN, 1, &style.with_alignment(Alignment::Center), "abc");
        grid.print_rect(i32::MAX, i32::MAX, usize::MAX, usize::MAX, true, &style, "a b");
        grid.print_rect(i32::MIN, i32::MIN, 3, 3, true, &style, "a b");
        grid.rect(i32::MAX, 0, usize::MAX, 1, true, &style);
        grid.hline(i32::MAX, 0, usize::MAX, &style);
        grid.vline(0, i32::MAX, usize::MAX, &style);
        grid.print_frame(i32::MAX, i32::MAX, usize::MAX, usize::MAX, true, &style, "title");
        grid.print_frame(i32::MIN, i32::MIN, 3, 3, true, &style, "title");
        assert_eq!(grid.dirty_count(), 0);
    }

    #[test]
    fn test_huge_frame_is_clipped_to_grid() {
        let mut grid = clean_grid(4, 3);
        grid.print_frame(i32::MIN, 0, usize::MAX, 3, true, &TextStyle::default(), "Inventory");
        assert_eq!(row_text(&grid, 0), "────");
        assert_eq!(row_text(&grid, 2), "────");
    }

    #[test]
    fn test_mark_all_dirty() {
        let mut grid = clean_grid(3, 2);
        grid.mark_all_dirty();
        assert_eq!(grid.dirty_count(), 6);
    }

    #[test]
    fn test_ignore_color() {
        let mut grid = ConsoleGrid::new(1, 1);
        assert_eq!(grid.ignore_color(), None);
        grid.set_ignore_color(Color::rgb(255, 0, 255));
        assert_eq!(grid.ignore_color(), Some(Color::rgb(255, 0, 255)));
        grid.reset_ignore_color();
        assert_eq!(grid.ignore_color(), None);
    }
}
