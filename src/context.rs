/// Rectangle in host pixels.
///
/// `x`/`y` are the top-left corner of the row's label area. Connectors are drawn to the left of
/// `x`, so derived rectangles may have negative coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RowRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge of the rectangle.
    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }
}
