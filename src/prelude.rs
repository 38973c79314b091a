pub use crate::{
    AttachedItem, BufferCanvas, Canvas, CellMetrics, ConnectorGlyphs, DecorConfig, DecorTree,
    DecorationOverlay, Diagnostic, DiagnosticSink, HighlightRule, IconSource, ItemInfo,
    OverlayAsset, OverlayRow, RecordingCanvas, Rgba, RowDecorator, RowOutcome, RowRect, Severity,
    Surface, TracingSink,
};
