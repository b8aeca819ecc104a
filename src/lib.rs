//! Retro Console Library
//!
//! Character-cell consoles for retro-style games: grids of styled cells,
//! grid-to-grid compositing and bitmap-font rasterization into an
//! XRGB8888 framebuffer. This crate provides:
//!
//! - `core`: Colors and blend modes, text styles, cells, the console grid,
//!   text layout, blit and snapshots
//! - `renderer`: Glyphs, font atlas with builtin fonts, root console
//! - `host`: Input and the services a host offers to a game
//! - `app`: Configuration and logging setup

pub mod app;
pub mod core;
pub mod host;
pub mod renderer;

/// Print formatted text on one row of a grid
///
/// ```
/// use retro_console::{console_print, core::ConsoleGrid};
///
/// let mut grid = ConsoleGrid::new(20, 1);
/// let hp = 7;
/// console_print!(grid, 0, 0, "HP {}/{}", hp, 10);
/// assert_eq!(grid.to_text(), "HP 7/10\n");
/// ```
///
/// A style can be given before the format string with `style = ...;`,
/// otherwise the grid's default style is used.
#[macro_export]
macro_rules! console_print {
    ($grid:expr, $x:expr, $y:expr, style = $style:expr; $($arg:tt)+) => {
        $grid.print_fmt($x, $y, &$style, ::std::format_args!($($arg)+))
    };
    ($grid:expr, $x:expr, $y:expr, $($arg:tt)+) => {{
        let style = $grid.default_style();
        $grid.print_fmt($x, $y, &style, ::std::format_args!($($arg)+))
    }};
}

/// Print formatted, word-wrapped text inside a rectangle
///
/// Takes the grid, the rectangle (`x, y, width, height`), whether existing
/// glyphs are erased, then the format string and arguments. A style can be
/// given before the format string with `style = ...;`.
#[macro_export]
macro_rules! console_print_rect {
    ($grid:expr, $x:expr, $y:expr, $w:expr, $h:expr, $clear:expr, style = $style:expr; $($arg:tt)+) => {
        $grid.print_rect_fmt($x, $y, $w, $h, $clear, &$style, ::std::format_args!($($arg)+))
    };
    ($grid:expr, $x:expr, $y:expr, $w:expr, $h:expr, $clear:expr, $($arg:tt)+) => {{
        let style = $grid.default_style();
        $grid.print_rect_fmt($x, $y, $w, $h, $clear, &style, ::std::format_args!($($arg)+))
    }};
}
