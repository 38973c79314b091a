use serde::{Deserialize, Serialize};

/// Alpha applied to icons of disabled items and inactive nodes.
pub const DIMMED_ALPHA: f32 = 0.3;

/// Straight-alpha color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white: the untinted baseline.
    pub const BASELINE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the color with alpha clamped to `max`.
    #[must_use]
    pub fn with_alpha_at_most(self, max: f32) -> Self {
        Self {
            a: self.a.min(max),
            ..self
        }
    }

    /// Converts to 8-bit RGB, dropping alpha.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Current tint for one row's draw calls.
///
/// A fresh pen starts at [`Rgba::BASELINE`] for every row, so no tint can leak from one row into
/// the next regardless of call order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    tint: Rgba,
}

impl Pen {
    pub const fn baseline() -> Self {
        Self {
            tint: Rgba::BASELINE,
        }
    }

    #[inline]
    pub const fn tint(&self) -> Rgba {
        self.tint
    }

    /// Switches to the translucent tint used for disabled content.
    pub const fn dim(&mut self) {
        self.tint = Rgba::new(1.0, 1.0, 1.0, DIMMED_ALPHA);
    }

    pub const fn reset(&mut self) {
        self.tint = Rgba::BASELINE;
    }

    pub fn is_baseline(&self) -> bool {
        self.tint == Rgba::BASELINE
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::baseline()
    }
}
