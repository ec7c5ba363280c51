//! In-place color filters.
//!
//! Every filter visits each pixel once and only looks at that pixel, so the
//! order pixels are visited in does not matter. The order filters are
//! applied in does: each reads the previous one's output.
//!
//! Blend amounts are computed in `f32` and truncated toward zero before
//! being added back to the integer channels. Nothing is clamped.

use crate::{buffer::ColorBuffer, types::Rgb};

/// One step of a preset's filter chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// [`gradient_blend`]
    Gradient {
        target: Rgb,
        multiplier: f32,
        flip: bool,
    },
    /// [`full_blend`]
    Full { target: Rgb, multiplier: f32 },
    /// [`sharp_blend`]
    Sharp { target: Rgb, multiplier: f32 },
    /// [`add_color`]
    Add { offset: Rgb },
}

impl Filter {
    pub fn apply(&self, buffer: &mut ColorBuffer) {
        match *self {
            Filter::Gradient {
                target,
                multiplier,
                flip,
            } => gradient_blend(buffer, target, multiplier, flip),
            Filter::Full { target, multiplier } => full_blend(buffer, target, multiplier),
            Filter::Sharp { target, multiplier } => sharp_blend(buffer, target, multiplier),
            Filter::Add { offset } => add_color(buffer, offset),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Filter::Gradient { .. } => "gradient",
            Filter::Full { .. } => "full",
            Filter::Sharp { .. } => "sharp",
            Filter::Add { .. } => "add",
        }
    }
}

/// Per-channel step from `color` toward `target`, scaled and truncated.
#[inline]
fn blend_delta(color: Rgb, target: Rgb, scale: f32) -> Rgb {
    (target.wrapping_sub(color).as_vec3() * scale).as_ivec3()
}

/// Positional weight of the gradient blend at `(x, y)`.
///
/// `raw = 0.4 * y / height + 0.6 * x / width`, mirrored to `1 - raw` when
/// `flip` is set, then cubed. Without `flip` it runs from `0` at the top-left
/// corner up toward `1` at the bottom-right; with `flip` it runs from `1`
/// down toward `0`.
#[inline]
pub fn gradient_weight(x: usize, y: usize, width: usize, height: usize, flip: bool) -> f32 {
    let raw = (y as f32 / height as f32) * 0.4 + (x as f32 / width as f32) * 0.6;
    let flip = flip as i32;
    let m = (flip * 2 - 1) as f32 * (flip as f32 - raw);
    m * m * m
}

/// Moves every non-black pixel toward `target` by
/// `multiplier * gradient_weight(x, y)`.
pub fn gradient_blend(buffer: &mut ColorBuffer, target: Rgb, multiplier: f32, flip: bool) {
    let (width, height) = (buffer.width(), buffer.height());
    let pixels = buffer.pixels_mut();

    for y in 0..height {
        for x in 0..width {
            let m = gradient_weight(x, y, width, height, flip);
            let color = &mut pixels[x + y * width];
            if *color != Rgb::ZERO {
                // `(d * multiplier) * m`, not `d * (multiplier * m)`.
                let delta = (target.wrapping_sub(*color).as_vec3() * multiplier * m).as_ivec3();
                *color = color.wrapping_add(delta);
            }
        }
    }
}

/// Moves every non-black pixel toward `target` by `multiplier`.
pub fn full_blend(buffer: &mut ColorBuffer, target: Rgb, multiplier: f32) {
    for color in buffer.pixels_mut().iter_mut().filter(|c| **c != Rgb::ZERO) {
        *color = color.wrapping_add(blend_delta(*color, target, multiplier));
    }
}

/// Like [`full_blend`], but every channel moves by the smallest of the three
/// per-channel steps.
///
/// Applying one shared step to all channels desaturates the pixel.
pub fn sharp_blend(buffer: &mut ColorBuffer, target: Rgb, multiplier: f32) {
    for color in buffer.pixels_mut().iter_mut().filter(|c| **c != Rgb::ZERO) {
        let step = blend_delta(*color, target, multiplier).min_element();
        *color = color.wrapping_add(Rgb::splat(step));
    }
}

/// Adds `offset` to every pixel, black ones included.
pub fn add_color(buffer: &mut ColorBuffer, offset: Rgb) {
    for color in buffer.pixels_mut() {
        *color = color.wrapping_add(offset);
    }
}
