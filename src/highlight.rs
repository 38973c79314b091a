use serde::{Deserialize, Serialize};

use crate::context::RowRect;
use crate::layout::HEADER_MARGIN;
use crate::style::Rgba;

/// Highest alpha a header band may use, so row text stays legible.
pub const MAX_HEADER_ALPHA: f32 = 0.25;

/// Tints rows whose name contains `prefix`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightRule {
    pub prefix: String,
    pub color: Rgba,
}

impl HighlightRule {
    pub fn new(prefix: impl Into<String>, color: Rgba) -> Self {
        Self {
            prefix: prefix.into(),
            color,
        }
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.prefix.as_str())
    }
}

/// Returns the color of the first rule matching `name`, in list order.
pub fn match_rule(name: &str, rules: &[HighlightRule]) -> Option<Rgba> {
    rules
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.color)
}

/// Background band for a matched row: the row widened past its right edge, with alpha clamped.
pub fn header_band(row: RowRect, color: Rgba) -> (RowRect, Rgba) {
    let band = RowRect {
        width: row.width + HEADER_MARGIN,
        ..row
    };
    (band, color.with_alpha_at_most(MAX_HEADER_ALPHA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let rules = [
            HighlightRule::new("Foo", Rgba::RED),
            HighlightRule::new("FooBar", Rgba::BLUE),
        ];
        assert_eq!(match_rule("FooBarBaz", &rules), Some(Rgba::RED));
    }

    #[test]
    fn matches_anywhere_in_name() {
        let rules = [HighlightRule::new("---", Rgba::GREEN)];
        assert_eq!(match_rule("--- Enemies ---", &rules), Some(Rgba::GREEN));
        assert_eq!(match_rule("Enemies", &rules), None);
    }

    #[test]
    fn empty_rules_never_match() {
        assert_eq!(match_rule("anything", &[]), None);
    }

    #[test]
    fn band_extends_and_clamps() {
        let row = RowRect::new(32.0, 48.0, 200.0, 16.0);
        let (band, color) = header_band(row, Rgba::new(0.2, 0.4, 0.6, 0.8));

        assert_eq!(band, RowRect::new(32.0, 48.0, 250.0, 16.0));
        assert!((color.a - MAX_HEADER_ALPHA).abs() < f32::EPSILON);
        assert!((color.g - 0.4).abs() < f32::EPSILON);
    }
}
