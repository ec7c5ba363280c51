use crate::types::Rgb;

/// How signed channels are turned into bytes at handoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelPolicy {
    /// Keep the low 8 bits, so `256` becomes `0` and `-1` becomes `255`.
    #[default]
    Wrap,
    /// Saturate into `0..=255`.
    Clamp,
}

impl ChannelPolicy {
    #[inline]
    pub fn to_byte(self, channel: i32) -> u8 {
        match self {
            ChannelPolicy::Wrap => channel as u8,
            ChannelPolicy::Clamp => channel.clamp(0, 255) as u8,
        }
    }
}

/// Row-major texture of unclamped colors, black on creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl ColorBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::ZERO; width * height],
        }
    }

    /// Wraps existing pixels.
    ///
    /// ### Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Self {
        assert_eq!(pixels.len(), width * height, "pixel count mismatch");
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[x + y * self.width]
    }

    /// Converts to tightly packed RGBA8 with opaque alpha, rows top to bottom.
    ///
    /// This is the only place channels are narrowed to bytes.
    pub fn to_rgba8(&self, policy: ChannelPolicy) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            out.extend_from_slice(&[
                policy.to_byte(c.x),
                policy.to_byte(c.y),
                policy.to_byte(c.z),
                255,
            ]);
        }
        out
    }
}
