//! Text layout helpers
//!
//! Decoding of UTF-8 into code points, start-column computation for aligned
//! text, greedy word wrapping and the two-pass formatting used by the
//! `*_fmt` print entry points.

use std::fmt;
use std::ops::Range;

use super::style::Alignment;
use super::CodePoint;

const SPACE: CodePoint = ' ' as CodePoint;

/// Decode a UTF-8 string into code points
pub fn decode(text: &str) -> Vec<CodePoint> {
    text.chars().map(CodePoint::from).collect()
}

/// Widen a length for coordinate math, saturating on absurd sizes
fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// `base + n`, saturating at the top of the coordinate range
///
/// A saturated result is past the right or bottom edge of any grid.
pub fn advance(base: i32, n: usize) -> i32 {
    i32::try_from(i64::from(base).saturating_add(to_i64(n))).unwrap_or(i32::MAX)
}

/// The part of the run `start..start + len` that lies in `0..limit`
pub fn clip_span(start: i64, len: usize, limit: usize) -> Range<i32> {
    let limit = to_i64(limit).min(i64::from(i32::MAX));
    let end = start.saturating_add(to_i64(len)).min(limit);
    let start = start.clamp(0, limit);
    // Both bounds lie in 0..=i32::MAX here
    let (start, end) = (start as i32, end.max(i64::from(start)) as i32);
    start..end
}

/// First column of a run of `len` cells printed at `x` with `alignment`
///
/// Left starts at `x`, center puts `x` on the middle cell (rounding the
/// half-length down), right ends the run on `x`. Columns are `i64` so runs
/// reaching past the `i32` range still line up.
pub fn aligned_start(x: i64, len: usize, alignment: Alignment) -> i64 {
    let len = to_i64(len);
    match alignment {
        Alignment::Left => x,
        Alignment::Center => x.saturating_sub(len / 2),
        Alignment::Right => x.saturating_sub(len).saturating_add(1),
    }
}

/// Reference column inside a rectangle of `width` cells starting at `x`
pub fn anchor_in_rect(x: i32, width: usize, alignment: Alignment) -> i64 {
    let (x, width) = (i64::from(x), to_i64(width));
    match alignment {
        Alignment::Left => x,
        Alignment::Center => x.saturating_add(width / 2),
        Alignment::Right => x.saturating_add(width).saturating_sub(1),
    }
}

/// Split `text` into lines of words that fit in `width` cells
///
/// Words are separated by single spaces (consecutive spaces yield empty
/// words). A word joins the current line only while
/// `line + 1 + word < width`; otherwise it starts the next line. Words are
/// never broken, so a word wider than the rectangle gets a line of its own.
/// Empty input produces no lines.
pub fn wrap(width: usize, text: &[CodePoint]) -> Vec<Vec<CodePoint>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current: Vec<CodePoint> = Vec::new();
    let mut first_word = true;

    for word in text.split(|&cp| cp == SPACE) {
        if current.len() + 1 + word.len() < width {
            if !first_word {
                current.push(SPACE);
            }
            current.extend_from_slice(word);
        } else {
            if !first_word {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_vec();
        }
        first_word = false;
    }
    lines.push(current);

    lines
}

/// Counts bytes without storing them
struct LengthCounter(usize);

impl fmt::Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Render format arguments into a string
///
/// The output length is measured first so the buffer is allocated once
/// with the exact capacity, then the arguments are rendered into it.
pub fn format_text(args: fmt::Arguments<'_>) -> String {
    if let Some(literal) = args.as_str() {
        return literal.to_owned();
    }

    let mut counter = LengthCounter(0);
    if fmt::write(&mut counter, args).is_err() {
        return String::new();
    }

    let mut text = String::with_capacity(counter.0);
    if fmt::write(&mut text, args).is_err() {
        return String::new();
    }
    text
}
