//! Row overlays for tree views: ancestry connectors, item icon strips, tag/layer labels and
//! prefix-triggered header bands.
//!
//! The host owns the tree ([`DecorTree`]) and icon lookup ([`IconSource`]); [`RowDecorator`]
//! draws onto any [`Canvas`] once per visible row and keeps the per-node caches between repaints.
//! [`DecorationOverlay`] and [`BufferCanvas`] plug the decorator into ratatui.

mod cache;
mod canvas;
mod config;
mod connector;
mod context;
mod decorator;
mod diagnostics;
#[cfg(test)]
mod fixture;
mod highlight;
mod icons;
mod layout;
mod model;
pub mod prelude;
mod style;
mod widget;

pub use cache::{DecorationCache, DecorationEntry};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, Surface};
pub use config::{ConfigError, DecorConfig};
pub use connector::{ConnectorColors, draw_connectors};
pub use context::RowRect;
pub use decorator::{RowDecorator, RowOutcome};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use highlight::{HighlightRule, MAX_HEADER_ALPHA, header_band, match_rule};
pub use icons::{IconRegistry, IconSource, OverlayAsset, OverlayAssets};
pub use layout::{ActiveValueSet, fits, icon_strip_space, label_space};
pub use model::{AttachedItem, DecorTree, ItemInfo};
pub use style::{DIMMED_ALPHA, Pen, Rgba};
pub use widget::{BufferCanvas, CellMetrics, ConnectorGlyphs, DecorationOverlay, OverlayRow};

/// Layout constants, in host pixels.
pub mod metrics {
    pub use crate::layout::{
        CONNECTOR_INSET, CONNECTOR_STEP, HEADER_MARGIN, ICON_ADVANCE, ICON_SIZE, LABEL_ICON_GAP,
        LABEL_PADDING, STRIP_BASE, STRIP_STEP,
    };
}
