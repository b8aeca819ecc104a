//! Color representation for console cells
//!
//! Colors are plain 8-bit RGB triples passed around by value. Every
//! arithmetic, blending or color-space operation produces a new color whose
//! channels are clamped to 0..=255.
//!
//! Supports:
//! - HSV and HSL construction/inspection (H in degrees, S/V/L in percent)
//! - Saturating add/subtract, multiply by a color or a scalar
//! - Linear interpolation and the background blend functions

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// An RGB color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// Clamp an integer channel value into 0..=255
#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Truncate and clamp a floating point channel value (0.0..=255.0 scale)
#[inline]
fn clamp_channel_f32(value: f32) -> u8 {
    clamp_channel(value as i32)
}

/// Wrap a hue in degrees into [0, 360)
#[inline]
fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from HSV components
    ///
    /// `h` is in degrees and wraps around 360, `s` and `v` are percentages
    /// clamped to 0..=100.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let hr = wrap_hue(h) / 360.0;
        let sr = s.clamp(0.0, 100.0) / 100.0;
        let vr = v.clamp(0.0, 100.0) / 100.0;

        let (mut r, mut g, mut b) = (vr, vr, vr);

        if sr > 0.0 {
            let sector = (hr * 6.0) % 6.0;
            let index = sector.floor();
            let fraction = sector - index;
            let v1 = vr * (1.0 - sr);
            let v2 = vr * (1.0 - sr * fraction);
            let v3 = vr * (1.0 - sr * (1.0 - fraction));

            (r, g, b) = match index as i32 {
                0 => (vr, v3, v1),
                1 => (v2, vr, v1),
                2 => (v1, vr, v3),
                3 => (v1, v2, vr),
                4 => (v3, v1, vr),
                _ => (vr, v1, v2),
            };
        }

        Self::rgb(
            clamp_channel_f32(255.0 * r),
            clamp_channel_f32(255.0 * g),
            clamp_channel_f32(255.0 * b),
        )
    }

    /// Create a color from HSL components
    ///
    /// `h` is in degrees and wraps around 360, `s` and `l` are percentages
    /// clamped to 0..=100.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let hr = wrap_hue(h) / 360.0;
        let sr = s.clamp(0.0, 100.0) / 100.0;
        let lr = l.clamp(0.0, 100.0) / 100.0;

        let (mut r, mut g, mut b) = (lr, lr, lr);

        if sr > 0.0 {
            let v2 = if lr < 0.5 {
                lr * (1.0 + sr)
            } else {
                (lr + sr) - (lr * sr)
            };
            let v1 = 2.0 * lr - v2;

            r = hue_to_channel(v1, v2, hr + 1.0 / 3.0);
            g = hue_to_channel(v1, v2, hr);
            b = hue_to_channel(v1, v2, hr - 1.0 / 3.0);
        }

        Self::rgb(
            clamp_channel_f32(255.0 * r),
            clamp_channel_f32(255.0 * g),
            clamp_channel_f32(255.0 * b),
        )
    }

    /// Red channel
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green channel
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// All three channels as a tuple
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Same color with a different red channel
    pub const fn with_red(self, r: u8) -> Self {
        Self { r, ..self }
    }

    /// Same color with a different green channel
    pub const fn with_green(self, g: u8) -> Self {
        Self { g, ..self }
    }

    /// Same color with a different blue channel
    pub const fn with_blue(self, b: u8) -> Self {
        Self { b, ..self }
    }

    /// HSV components: hue in [0, 360), saturation and value in percent
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let mx = f32::from(max) / 255.0;
        let mn = f32::from(min) / 255.0;
        let delta = mx - mn;

        let mut s = 0.0;
        let mut h = 0.0;

        if max > 0 {
            s = delta / mx;

            if max != min {
                let r = f32::from(self.r) / 255.0;
                let g = f32::from(self.g) / 255.0;
                let b = f32::from(self.b) / 255.0;

                h = if max == self.r {
                    (g - b) / delta
                } else if max == self.g {
                    2.0 + (b - r) / delta
                } else {
                    4.0 + (r - g) / delta
                };
            }
        }

        (wrap_hue(h * 60.0), 100.0 * s, 100.0 * mx)
    }

    /// HSL components: hue in [0, 360), saturation and lightness in percent
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let mx = f32::from(max) / 255.0;
        let mn = f32::from(min) / 255.0;
        let delta = mx - mn;

        let l = (mx + mn) / 2.0;
        let mut s = 0.0;
        let mut h = 0.0;

        if max != min {
            s = if l <= 0.5 {
                delta / (mx + mn)
            } else {
                delta / (2.0 - mx - mn)
            };

            let r = f32::from(self.r) / 255.0;
            let g = f32::from(self.g) / 255.0;
            let b = f32::from(self.b) / 255.0;

            h = if max == self.r {
                (g - b) / (6.0 * delta)
            } else if max == self.g {
                1.0 / 3.0 + (b - r) / (6.0 * delta)
            } else {
                2.0 / 3.0 + (r - g) / (6.0 * delta)
            };

            if h < 0.0 {
                h += 1.0;
            }
            if h > 1.0 {
                h -= 1.0;
            }
        }

        (wrap_hue(360.0 * h), 100.0 * s, 100.0 * l)
    }

    /// Pack as 0x00RRGGBB
    pub const fn to_xrgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from 0x00RRGGBB (the top byte is ignored)
    pub const fn from_xrgb(pixel: u32) -> Self {
        Self::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
    }

    /// Rotate the hue in HSV space
    pub fn shift_hue_hsv(self, shift: f32) -> Self {
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h + shift, s, v)
    }

    /// Rotate the hue in HSL space
    pub fn shift_hue_hsl(self, shift: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + shift, s, l)
    }

    /// Scale saturation and value in HSV space
    pub fn scale_hsv(self, saturation_scale: f32, value_scale: f32) -> Self {
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s * saturation_scale, v * value_scale)
    }

    /// Scale saturation and lightness in HSL space
    pub fn scale_hsl(self, saturation_scale: f32, lightness_scale: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s * saturation_scale, l * lightness_scale)
    }

    /// Linear interpolation from `a` (coef 0.0) to `b` (coef 1.0)
    ///
    /// The coefficient is not clamped: values outside 0..=1 extrapolate and
    /// the result is clamped per channel.
    pub fn lerp(a: Color, b: Color, coef: f32) -> Self {
        let channel = |x: u8, y: u8| {
            let x = f32::from(x);
            let y = f32::from(y);
            clamp_channel_f32(x + (y - x) * coef)
        };
        Self::rgb(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
    }

    /// Apply a per-channel integer operation
    #[inline]
    fn zip_with(a: Color, b: Color, op: impl Fn(i32, i32) -> i32) -> Self {
        let apply = |x: u8, y: u8| clamp_channel(op(i32::from(x), i32::from(y)));
        Self::rgb(apply(a.r, b.r), apply(a.g, b.g), apply(a.b, b.b))
    }

    /// Per-channel maximum
    pub fn lighten(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, i32::max)
    }

    /// Per-channel minimum
    pub fn darken(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, i32::min)
    }

    /// `1 - (1 - a) * (1 - b)` per channel
    pub fn screen(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, |x, y| 255 - ((255 - x) * (255 - y)) / 255)
    }

    /// `b / (1 - a)` per channel, saturating to white when `a` is 255
    pub fn color_dodge(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, |x, y| {
            if x < 255 {
                (255 * y) / (255 - x)
            } else {
                255
            }
        })
    }

    /// `1 - (1 - a) / b` per channel, black when `b` is 0
    pub fn color_burn(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, |x, y| {
            if y > 0 {
                255 - (255 * (255 - x)) / y
            } else {
                0
            }
        })
    }

    /// `a + b - 1` per channel
    pub fn burn(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, |x, y| x + y - 255)
    }

    /// Multiply or screen depending on `b`, threshold at 128
    pub fn overlay(a: Color, b: Color) -> Self {
        Self::zip_with(a, b, |x, y| {
            if y <= 128 {
                (2 * x * y) / 255
            } else {
                255 - (2 * (255 - x) * (255 - y)) / 255
            }
        })
    }
}

/// HSL helper: one channel from the two intermediate values and a hue offset
fn hue_to_channel(v1: f32, v2: f32, hue: f32) -> f32 {
    let mut h = hue;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if 6.0 * h < 1.0 {
        v1 + (v2 - v1) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        v2
    } else if 3.0 * h < 2.0 {
        v1 + (v2 - v1) * 6.0 * (2.0 / 3.0 - h)
    } else {
        v1
    }
}

impl Add for Color {
    type Output = Color;

    /// Saturating per-channel addition
    fn add(self, other: Color) -> Color {
        Color::zip_with(self, other, |x, y| x + y)
    }
}

impl Sub for Color {
    type Output = Color;

    /// Saturating per-channel subtraction
    fn sub(self, other: Color) -> Color {
        Color::zip_with(self, other, |x, y| x - y)
    }
}

impl Mul for Color {
    type Output = Color;

    /// Per-channel product normalized by 255
    fn mul(self, other: Color) -> Color {
        Color::zip_with(self, other, |x, y| (x * y) / 255)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    /// Scale every channel, clamped
    fn mul(self, scalar: f32) -> Color {
        let scale = |x: u8| clamp_channel_f32(f32::from(x) * scalar);
        Color::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Color, b: Color) -> bool {
        let d = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs() <= 1;
        d(a.r(), b.r()) && d(a.g(), b.g()) && d(a.b(), b.b())
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_xrgb_packing() {
        let color = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(color.to_xrgb(), 0x0012_3456);
        assert_eq!(Color::from_xrgb(0xFF12_3456), color);
    }

    #[test]
    fn test_primary_colors_from_hsv() {
        assert_eq!(Color::from_hsv(0.0, 100.0, 100.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(120.0, 100.0, 100.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsv(240.0, 100.0, 100.0), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsv(0.0, 0.0, 100.0), Color::WHITE);
    }

    #[test]
    fn test_primary_colors_from_hsl() {
        assert_eq!(Color::from_hsl(0.0, 100.0, 50.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 100.0, 50.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 100.0, 50.0), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(0.0, 0.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Color::from_hsv(360.0, 100.0, 100.0), Color::rgb(255, 0, 0));
        assert_eq!(
            Color::from_hsv(-120.0, 100.0, 100.0),
            Color::from_hsv(240.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_grey_has_zero_hue_and_saturation() {
        let (h, s, v) = Color::rgb(128, 128, 128).to_hsv();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 50.2).abs() < 0.1);

        let (h, s, _) = Color::rgb(128, 128, 128).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_black_hsv() {
        assert_eq!(Color::BLACK.to_hsv(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_shift_hue() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.shift_hue_hsv(120.0), Color::rgb(0, 255, 0));
        assert_eq!(red.shift_hue_hsl(240.0), Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let a = Color::rgb(200, 100, 10);
        let b = Color::rgb(100, 100, 20);
        assert_eq!(a + b, Color::rgb(255, 200, 30));
        assert_eq!(a - b, Color::rgb(100, 0, 0));
        assert_eq!(a * Color::WHITE, a);
        assert_eq!(a * Color::BLACK, Color::BLACK);
        assert_eq!(a * 2.0, Color::rgb(255, 200, 20));
        assert_eq!(a * -1.0, Color::BLACK);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(250, 240, 230);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
        assert_eq!(Color::lerp(a, b, 0.5), Color::rgb(130, 130, 130));
        assert_eq!(Color::lerp(a, b, 2.0), Color::WHITE);
    }

    #[test]
    fn test_blend_functions() {
        let a = Color::rgb(100, 200, 0);
        let b = Color::rgb(50, 255, 128);
        assert_eq!(Color::lighten(a, b), Color::rgb(100, 255, 128));
        assert_eq!(Color::darken(a, b), Color::rgb(50, 200, 0));
        assert_eq!(Color::screen(Color::BLACK, b), b);
        assert_eq!(Color::color_dodge(Color::WHITE, b), Color::WHITE);
        assert_eq!(Color::color_burn(a, Color::BLACK), Color::BLACK);
        assert_eq!(Color::burn(Color::BLACK, Color::BLACK), Color::BLACK);
        assert_eq!(Color::burn(Color::WHITE, a), a);
        assert_eq!(Color::overlay(Color::BLACK, Color::BLACK), Color::BLACK);
        assert_eq!(Color::overlay(Color::WHITE, Color::WHITE), Color::WHITE);
    }

    #[test]
    fn test_blend_reference_values() {
        let base = Color::rgb(100, 200, 50);
        // The overlay threshold sits between 128 and 129
        assert_eq!(Color::overlay(base, Color::rgb(128, 128, 128)), Color::rgb(100, 200, 50));
        assert_eq!(Color::overlay(base, Color::rgb(129, 129, 129)), Color::rgb(102, 201, 53));

        let a = Color::rgb(100, 50, 200);
        let b = Color::rgb(60, 120, 30);
        assert_eq!(Color::screen(a, b), Color::rgb(137, 147, 207));
        assert_eq!(Color::color_dodge(a, b), Color::rgb(98, 149, 139));

        let a = Color::rgb(200, 150, 230);
        assert_eq!(Color::color_burn(a, Color::rgb(220, 240, 250)), Color::rgb(192, 144, 230));
        assert_eq!(Color::burn(a, Color::rgb(100, 180, 60)), Color::rgb(45, 75, 35));

        let grey = Color::rgb(128, 128, 128);
        assert_eq!(grey * grey, Color::rgb(64, 64, 64));
        assert_eq!(Color::rgb(200, 255, 255) * Color::rgb(100, 77, 77), Color::rgb(78, 77, 77));
    }

    proptest! {
        #[test]
        fn prop_hsl_round_trip(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            let (h, s, l) = color.to_hsl();
            prop_assert!(close(Color::from_hsl(h, s, l), color));
        }

        #[test]
        fn prop_hsv_round_trip(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            let (h, s, v) = color.to_hsv();
            prop_assert!(close(Color::from_hsv(h, s, v), color));
        }

        #[test]
        fn prop_hue_in_range(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            let (h, _, _) = color.to_hsv();
            prop_assert!((0.0..360.0).contains(&h));
            let (h, _, _) = color.to_hsl();
            prop_assert!((0.0..360.0).contains(&h));
        }

        #[test]
        fn prop_lerp_stays_between(a in any::<[u8; 3]>(), b in any::<[u8; 3]>(), t in 0.0f32..=1.0) {
            let out = Color::lerp(a.into(), b.into(), t);
            for (o, (x, y)) in [out.r(), out.g(), out.b()].into_iter().zip(a.into_iter().zip(b)) {
                prop_assert!(o >= x.min(y) && o <= x.max(y));
            }
        }
    }
}
