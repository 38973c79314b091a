use crate::canvas::Surface;
use crate::context::RowRect;
use crate::layout::{CONNECTOR_INSET, CONNECTOR_STEP, ICON_SIZE};
use crate::model::DecorTree;
use crate::style::Rgba;

const LINE_THICKNESS: f32 = 2.0;
const LEAF_TICK_LENGTH: f32 = 7.0;
const LEAF_TICK_Y: f32 = 7.0;

/// Colors for the connector lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorColors {
    /// Leaf marker (trunk and tick).
    pub main: Rgba,
    /// Ancestor segments.
    pub sub: Rgba,
}

/// Draws the leaf marker for childless nodes, then one vertical segment per ancestor.
///
/// Segments step [`CONNECTOR_STEP`] further left for every level up. Returns the number of
/// ancestor segments drawn.
pub fn draw_connectors<T, S>(
    tree: &T,
    surface: &mut S,
    id: T::Id,
    row: RowRect,
    colors: ConnectorColors,
) -> usize
where
    T: DecorTree + ?Sized,
    S: Surface + ?Sized,
{
    let anchor_x = row.x - CONNECTOR_INSET;

    if tree.child_count(id) == 0 {
        surface.fill_rect(
            RowRect::new(anchor_x, row.y, LINE_THICKNESS, ICON_SIZE),
            colors.main,
        );
        surface.fill_rect(
            RowRect::new(
                anchor_x + LINE_THICKNESS,
                row.y + LEAF_TICK_Y,
                LEAF_TICK_LENGTH,
                LINE_THICKNESS,
            ),
            colors.main,
        );
    }

    let mut segments = 0;
    let mut x = anchor_x;
    let mut current = id;
    while let Some(parent) = tree.parent(current) {
        x -= CONNECTOR_STEP;
        surface.fill_rect(
            RowRect::new(x, row.y, LINE_THICKNESS, ICON_SIZE),
            colors.sub,
        );
        segments += 1;
        current = parent;
    }
    segments
}
