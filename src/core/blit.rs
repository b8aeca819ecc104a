//! Grid-to-grid compositing
//!
//! A cell shows a single glyph, so translucent overlap of two different
//! glyphs cannot be drawn directly. Colors are interpolated continuously
//! while the displayed glyph switches from the destination's to the
//! source's halfway through the foreground alpha ramp.

use std::ops::Range;

use super::color::Color;
use super::grid::{ConsoleGrid, Rect};
use super::layout;
use super::style::BlendMode;

/// Offsets into a run of `len` cells that land inside both grids along one axis
fn overlap(
    src_start: i32,
    src_limit: usize,
    dst_start: i32,
    dst_limit: usize,
    len: usize,
) -> Range<i64> {
    let offsets = |start: i32, limit: usize| {
        let span = layout::clip_span(i64::from(start), len, limit);
        (i64::from(span.start) - i64::from(start))..(i64::from(span.end) - i64::from(start))
    };
    let (src, dst) = (offsets(src_start, src_limit), offsets(dst_start, dst_limit));
    src.start.max(dst.start)..src.end.min(dst.end)
}

/// `start + offset` for an offset taken from `overlap`
fn shifted(start: i32, offset: i64) -> Option<i32> {
    i32::try_from(i64::from(start) + offset).ok()
}

impl ConsoleGrid {
    /// Blend the `src_rect` region of `src` onto `dst` at (`dst_x`, `dst_y`)
    ///
    /// Both alphas must lie in 0.0..=1.0 and at least one must be positive;
    /// otherwise nothing is drawn. Cells outside either grid are skipped,
    /// as are source cells whose background matches the source's ignore
    /// color.
    pub fn blit(
        src: &ConsoleGrid,
        src_rect: Rect,
        dst: &mut ConsoleGrid,
        dst_x: i32,
        dst_y: i32,
        foreground_alpha: f32,
        background_alpha: f32,
    ) {
        let in_range = |alpha: f32| (0.0..=1.0).contains(&alpha);
        if !in_range(foreground_alpha)
            || !in_range(background_alpha)
            || (foreground_alpha <= 0.0 && background_alpha <= 0.0)
        {
            tracing::trace!(foreground_alpha, background_alpha, "blit skipped");
            return;
        }

        let columns = overlap(src_rect.x, src.width(), dst_x, dst.width(), src_rect.width);
        let rows = overlap(src_rect.y, src.height(), dst_y, dst.height(), src_rect.height);
        for j in rows {
            for i in columns.clone() {
                let (Some(sx), Some(sy), Some(dx), Some(dy)) = (
                    shifted(src_rect.x, i),
                    shifted(src_rect.y, j),
                    shifted(dst_x, i),
                    shifted(dst_y, j),
                ) else {
                    continue;
                };

                let Some(src_cell) = src.cell(sx, sy) else {
                    continue;
                };
                let Some(dst_cell) = dst.cell(dx, dy) else {
                    continue;
                };
                if src.ignore_color() == Some(src_cell.background()) {
                    continue;
                }

                let mut code_point = dst_cell.code_point();
                let mut style = dst
                    .style_at(dx, dy)
                    .with_blend_mode(BlendMode::Set)
                    .with_background(Color::lerp(
                        dst_cell.background(),
                        src_cell.background(),
                        background_alpha,
                    ));

                if src_cell.is_blank() {
                    style.foreground =
                        Color::lerp(dst_cell.foreground(), src_cell.background(), background_alpha);
                } else if dst_cell.is_blank() {
                    code_point = src_cell.code_point();
                    style.font = src_cell.font();
                    style.foreground =
                        Color::lerp(dst_cell.background(), src_cell.foreground(), foreground_alpha);
                } else if dst_cell.code_point() == src_cell.code_point() {
                    style.foreground =
                        Color::lerp(dst_cell.foreground(), src_cell.foreground(), foreground_alpha);
                } else if foreground_alpha < 0.5 {
                    // Both endpoints are the destination foreground
                    style.foreground = Color::lerp(
                        dst_cell.foreground(),
                        dst_cell.foreground(),
                        2.0 * foreground_alpha,
                    );
                } else {
                    code_point = src_cell.code_point();
                    style.font = src_cell.font();
                    style.foreground = Color::lerp(
                        dst_cell.background(),
                        src_cell.foreground(),
                        2.0 * (foreground_alpha - 0.5),
                    );
                }

                dst.set_char_styled(dx, dy, code_point, &style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::{Font, TextStyle};
    use crate::core::CodePoint;

    const RED: Color = Color::rgb(200, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 200);
    const GREEN: Color = Color::rgb(0, 200, 0);

    fn filled(width: usize, height: usize, fg: Color, bg: Color, text: &str) -> ConsoleGrid {
        let mut grid = ConsoleGrid::new(width, height);
        grid.set_default_style(TextStyle::new(fg, bg));
        grid.clear();
        grid.print(0, 0, text);
        grid
    }

    #[test]
    fn test_blank_source_keeps_destination_glyph() {
        let src = filled(1, 1, GREEN, BLUE, "");
        let mut dst = filled(1, 1, RED, Color::BLACK, "x");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 1.0, 1.0);
        assert_eq!(dst.char_at(0, 0), 'x' as CodePoint);
        assert_eq!(dst.background_at(0, 0), BLUE);
        // Foreground fades to the source background
        assert_eq!(dst.foreground_at(0, 0), BLUE);
    }

    #[test]
    fn test_blank_destination_takes_source_glyph() {
        let mut src = filled(1, 1, GREEN, BLUE, "y");
        src.set_font(0, 0, Font::Bold);
        let mut dst = filled(1, 1, RED, Color::BLACK, "");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 1.0, 0.0);
        assert_eq!(dst.char_at(0, 0), 'y' as CodePoint);
        assert_eq!(dst.font_at(0, 0), Font::Bold);
        assert_eq!(dst.foreground_at(0, 0), GREEN);
        assert_eq!(dst.background_at(0, 0), Color::BLACK);
    }

    #[test]
    fn test_same_glyph_blends_foreground() {
        let src = filled(1, 1, Color::rgb(200, 200, 200), Color::BLACK, "z");
        let mut dst = filled(1, 1, Color::rgb(0, 0, 0), Color::BLACK, "z");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 0.5, 1.0);
        assert_eq!(dst.foreground_at(0, 0), Color::rgb(100, 100, 100));
    }

    #[test]
    fn test_different_glyph_low_alpha_keeps_destination() {
        let src = filled(1, 1, GREEN, Color::BLACK, "a");
        let mut dst = filled(1, 1, RED, Color::BLACK, "b");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 0.25, 1.0);
        assert_eq!(dst.char_at(0, 0), 'b' as CodePoint);
        // Self-interpolation leaves the destination foreground as is
        assert_eq!(dst.foreground_at(0, 0), RED);
    }

    #[test]
    fn test_different_glyph_high_alpha_swaps_glyph() {
        let src = filled(1, 1, Color::rgb(0, 200, 0), Color::BLACK, "a");
        let mut dst = filled(1, 1, RED, Color::BLACK, "b");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 0.75, 1.0);
        assert_eq!(dst.char_at(0, 0), 'a' as CodePoint);
        // lerp(black, green, 0.5)
        assert_eq!(dst.foreground_at(0, 0), Color::rgb(0, 100, 0));
    }

    #[test]
    fn test_invalid_alpha_is_noop() {
        let src = filled(1, 1, GREEN, BLUE, "a");
        for (fa, ba) in [(0.0, 0.0), (-0.1, 1.0), (1.0, 1.5), (f32::NAN, 1.0)] {
            let mut dst = filled(1, 1, RED, Color::BLACK, "b");
            ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, fa, ba);
            assert_eq!(dst.char_at(0, 0), 'b' as CodePoint);
            assert_eq!(dst.background_at(0, 0), Color::BLACK);
        }
    }

    #[test]
    fn test_ignore_color_skips_cells() {
        let mut src = filled(2, 1, GREEN, Color::rgb(255, 0, 255), "");
        src.set_background(1, 0, BLUE, BlendMode::Set);
        src.set_ignore_color(Color::rgb(255, 0, 255));
        let mut dst = filled(2, 1, RED, Color::BLACK, "");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 1.0, 1.0);
        assert_eq!(dst.background_at(0, 0), Color::BLACK);
        assert_eq!(dst.background_at(1, 0), BLUE);
    }

    #[test]
    fn test_offset_and_clipping() {
        let src = filled(3, 3, GREEN, BLUE, "");
        let mut dst = filled(4, 4, RED, Color::BLACK, "");
        ConsoleGrid::blit(&src, Rect::new(1, 1, 5, 5), &mut dst, 2, 2, 1.0, 1.0);
        assert_eq!(dst.background_at(1, 1), Color::BLACK);
        assert_eq!(dst.background_at(2, 2), BLUE);
        assert_eq!(dst.background_at(3, 3), BLUE);
        assert_eq!(dst.background_at(3, 2), BLUE);
        assert_eq!(dst.background_at(0, 3), Color::BLACK);
    }

    #[test]
    fn test_far_off_grid_positions_are_skipped() {
        let src = filled(3, 3, GREEN, BLUE, "abc");
        let huge = Rect::new(0, 0, usize::MAX, usize::MAX);
        for (rect, dst_x, dst_y) in [
            (src.bounds(), i32::MAX, 0),
            (src.bounds(), 0, i32::MAX),
            (src.bounds(), i32::MIN, i32::MIN),
            (Rect::new(i32::MAX, 0, 3, 3), 0, 0),
            (Rect::new(i32::MIN, i32::MIN, usize::MAX, 3), 0, 0),
            (huge, i32::MAX, i32::MAX),
        ] {
            let mut dst = filled(4, 4, RED, Color::BLACK, "");
            ConsoleGrid::blit(&src, rect, &mut dst, dst_x, dst_y, 1.0, 1.0);
            assert_eq!(dst.char_at(0, 0), 0);
            assert_eq!(dst.background_at(0, 0), Color::BLACK);
        }

        // An oversized rectangle is clipped to both grids
        let mut dst = filled(4, 4, RED, Color::BLACK, "");
        ConsoleGrid::blit(&src, huge, &mut dst, 1, 1, 1.0, 1.0);
        assert_eq!(dst.char_at(1, 1), 'a' as CodePoint);
        assert_eq!(dst.background_at(3, 3), BLUE);
        assert_eq!(dst.background_at(0, 0), Color::BLACK);
    }

    #[test]
    fn test_partial_background_alpha() {
        let src = filled(1, 1, GREEN, Color::rgb(200, 100, 0), "");
        let mut dst = filled(1, 1, RED, Color::BLACK, "");
        ConsoleGrid::blit(&src, src.bounds(), &mut dst, 0, 0, 1.0, 0.5);
        assert_eq!(dst.background_at(0, 0), Color::rgb(100, 50, 0));
    }
}
