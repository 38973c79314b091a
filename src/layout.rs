use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::canvas::Surface;

/// Icon edge length.
pub const ICON_SIZE: f32 = 16.0;
/// Horizontal advance per drawn icon.
pub const ICON_ADVANCE: f32 = 20.0;
/// Per-item step used when reserving room for an icon strip.
pub const STRIP_STEP: f32 = 25.0;
/// Room reserved for a single-item strip.
pub const STRIP_BASE: f32 = 20.0;
/// Room for a label's leading icon and gaps.
pub const LABEL_PADDING: f32 = 30.0;
/// Gap between a label's icon and its text.
pub const LABEL_ICON_GAP: f32 = 10.0;
/// How far a header band extends past the row's right edge.
pub const HEADER_MARGIN: f32 = 50.0;
/// Distance between neighbouring ancestor connectors.
pub const CONNECTOR_STEP: f32 = 14.0;
/// Distance from the row's left edge to the node's own connector.
pub const CONNECTOR_INSET: f32 = 8.0;

/// Go/no-go gate for packing one more element against the row's right edge.
///
/// `label_width` is the width of the node's own name, which the packed elements must not cover.
pub fn fits(label_width: f32, row_width: f32, current_offset: f32, required_space: f32) -> bool {
    if label_width > row_width {
        return false;
    }
    label_width + current_offset + required_space <= row_width
}

/// Room reserved for an icon strip of `item_count` items.
#[allow(clippy::cast_precision_loss)]
pub fn icon_strip_space(item_count: usize) -> f32 {
    (item_count as f32 - 1.0).mul_add(STRIP_STEP, STRIP_BASE)
}

/// Room reserved for a tag/layer element whose widest known value is `longest` wide.
pub fn label_space(longest: f32) -> f32 {
    longest + LABEL_PADDING
}

/// Distinct label values seen this session, used to reserve a stable column width.
#[derive(Clone, Debug, Default)]
pub struct ActiveValueSet {
    values: FxHashSet<String>,
}

impl ActiveValueSet {
    pub fn new() -> Self {
        Self {
            values: FxHashSet::with_capacity_and_hasher(8, FxBuildHasher),
        }
    }

    /// Records a value. Returns `true` if it was not seen before.
    pub fn observe(&mut self, value: &str) -> bool {
        if self.values.contains(value) {
            return false;
        }
        self.values.insert(value.to_owned())
    }

    /// Width of the widest recorded value, or `0.0` when empty.
    pub fn longest_width<S: Surface + ?Sized>(&self, surface: &S) -> f32 {
        self.values
            .iter()
            .map(|value| surface.text_width(value))
            .fold(0.0, f32::max)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn rejects_name_wider_than_row() {
        assert!(!fits(120.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn accepts_exact_fit() {
        assert!(fits(40.0, 100.0, 20.0, 40.0));
        assert!(!fits(40.0, 100.0, 20.0, 40.5));
    }

    #[test]
    fn stricter_as_offset_grows() {
        let (label, width, required) = (30.0, 200.0, 50.0);
        let mut was_fit = true;
        for step in 0..40 {
            let offset = step as f32 * 7.5;
            let now = fits(label, width, offset, required);
            assert!(was_fit || !now, "fits again at offset {offset}");
            was_fit = now;
        }
        assert!(!was_fit);
    }

    #[test]
    fn reserved_spaces() {
        assert!((icon_strip_space(1) - 20.0).abs() < f32::EPSILON);
        assert!((icon_strip_space(3) - 70.0).abs() < f32::EPSILON);
        assert!((icon_strip_space(0) + 5.0).abs() < f32::EPSILON);
        assert!((label_space(42.0) - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn longest_width_over_seen_values() {
        let canvas = RecordingCanvas::<&str>::with_char_width(5.0);
        let mut values = ActiveValueSet::new();
        assert!(values.longest_width(&canvas).abs() < f32::EPSILON);

        assert!(values.observe("Player"));
        assert!(values.observe("UI"));
        assert!(!values.observe("Player"));

        assert_eq!(values.len(), 2);
        assert!((values.longest_width(&canvas) - 30.0).abs() < f32::EPSILON);

        values.clear();
        assert!(values.is_empty());
    }
}
