use std::marker::PhantomData;

use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::StatefulWidget;

use crate::canvas::{Canvas, Surface};
use crate::context::RowRect;
use crate::decorator::RowDecorator;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::icons::IconSource;
use crate::model::DecorTree;
use crate::style::Rgba;

/// Host-pixel size of one terminal cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

impl CellMetrics {
    #[allow(clippy::cast_possible_truncation)]
    fn col(&self, x: f32) -> i32 {
        (x / self.px_per_col).round() as i32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn row(&self, y: f32) -> i32 {
        (y / self.px_per_row).round() as i32
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cols(&self, width: f32) -> usize {
        (width / self.px_per_col).ceil().max(0.0) as usize
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rows(&self, height: f32) -> usize {
        (height / self.px_per_row).ceil().max(0.0) as usize
    }

    /// Pixel rectangle of a row's label area.
    pub fn row_rect(&self, x: u16, y: u16, width: u16) -> RowRect {
        RowRect::new(
            f32::from(x) * self.px_per_col,
            f32::from(y) * self.px_per_row,
            f32::from(width) * self.px_per_col,
            self.px_per_row,
        )
    }
}

/// Glyphs used for thin connector rectangles.
#[derive(Clone, Copy)]
pub struct ConnectorGlyphs<'a> {
    pub vert: &'a str,
    pub horiz: &'a str,
    /// A horizontal tick drawn over a vertical line.
    pub joint: &'a str,
}

impl ConnectorGlyphs<'static> {
    pub const fn unicode() -> Self {
        Self {
            vert: "│",
            horiz: "─",
            joint: "├",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            vert: "|",
            horiz: "-",
            joint: "+",
        }
    }
}

/// [`Canvas`] over a ratatui [`Buffer`].
///
/// Icons are glyph strings (up to two cells wide). Thin rectangles become line glyphs, larger
/// ones tint the background. Everything outside the buffer area is clipped.
pub struct BufferCanvas<'a, 'g> {
    buf: &'a mut Buffer,
    metrics: CellMetrics,
    glyphs: ConnectorGlyphs<'g>,
}

impl<'a, 'g> BufferCanvas<'a, 'g> {
    pub const fn new(buf: &'a mut Buffer, metrics: CellMetrics) -> Self {
        Self {
            buf,
            metrics,
            glyphs: ConnectorGlyphs::unicode(),
        }
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: ConnectorGlyphs<'g>) -> Self {
        self.glyphs = glyphs;
        self
    }

    fn position(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(col).ok()?;
        let y = u16::try_from(row).ok()?;
        let area = self.buf.area;
        (x >= area.left() && x < area.right() && y >= area.top() && y < area.bottom())
            .then_some((x, y))
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, max_cols: usize, style: Style) {
        let Some((x, y)) = self.position(col, row) else {
            return;
        };
        let room = usize::from(self.buf.area.right() - x);
        self.buf.set_stringn(x, y, text, max_cols.min(room), style);
    }
}

fn blend(under: Color, over: Rgba) -> Color {
    let (ur, ug, ub) = match under {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let (or, og, ob) = over.to_rgb8();
    let alpha = over.a.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mix = |u: u8, o: u8| {
        f32::from(o)
            .mul_add(alpha, f32::from(u) * (1.0 - alpha))
            .round() as u8
    };
    Color::Rgb(mix(ur, or), mix(ug, og), mix(ub, ob))
}

fn fg(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

impl Surface for BufferCanvas<'_, '_> {
    fn fill_rect(&mut self, rect: RowRect, color: Rgba) {
        let metrics = self.metrics;
        let col = metrics.col(rect.x);
        let row = metrics.row(rect.y);

        if rect.height <= metrics.px_per_row / 4.0 {
            let Some(pos) = self.position(col, row) else {
                return;
            };
            let cell = &mut self.buf[pos];
            let symbol = if cell.symbol() == self.glyphs.vert {
                self.glyphs.joint
            } else {
                self.glyphs.horiz
            };
            cell.set_symbol(symbol).set_fg(fg(color));
            return;
        }

        if rect.width <= metrics.px_per_col / 2.0 {
            let Some(pos) = self.position(col, row) else {
                return;
            };
            self.buf[pos].set_symbol(self.glyphs.vert).set_fg(fg(color));
            return;
        }

        let rows = metrics.rows(rect.height);
        let cols = metrics.cols(rect.width);
        for dy in 0..rows {
            for dx in 0..cols {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let Some(pos) = self.position(col + dx as i32, row + dy as i32) else {
                    continue;
                };
                let cell = &mut self.buf[pos];
                let bg = blend(cell.bg, color);
                cell.set_bg(bg);
            }
        }
    }

    fn draw_label(&mut self, rect: RowRect, text: &str, color: Rgba) {
        let col = self.metrics.col(rect.x);
        let row = self.metrics.row(rect.y);
        let max_cols = self.metrics.cols(rect.width);
        self.put_str(col, row, text, max_cols, Style::default().fg(fg(color)));
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str) -> f32 {
        Span::raw(text).width() as f32 * self.metrics.px_per_col
    }
}

impl<I: AsRef<str>> Canvas<I> for BufferCanvas<'_, '_> {
    fn draw_icon(&mut self, rect: RowRect, icon: &I, tint: Rgba) {
        let col = self.metrics.col(rect.x);
        let row = self.metrics.row(rect.y);
        let max_cols = self.metrics.cols(rect.width);
        let mut style = Style::default();
        if tint.a < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }
        self.put_str(col, row, icon.as_ref(), max_cols, style);
    }
}

/// A row to decorate: the node and how many columns its label is indented by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayRow<Id> {
    pub id: Id,
    pub indent: u16,
}

/// Draws decorations for consecutive rows, one per line of the area.
///
/// The rightmost `gutter` columns are left out of each row's label area; the icon strip starts
/// there.
pub struct DecorationOverlay<'a, H, D = TracingSink>
where
    H: DecorTree + IconSource,
{
    host: &'a H,
    rows: &'a [OverlayRow<H::Id>],
    metrics: CellMetrics,
    glyphs: ConnectorGlyphs<'a>,
    gutter: u16,
    _sink: PhantomData<D>,
}

impl<'a, H, D> DecorationOverlay<'a, H, D>
where
    H: DecorTree + IconSource,
{
    pub fn new(host: &'a H, rows: &'a [OverlayRow<H::Id>]) -> Self {
        Self {
            host,
            rows,
            metrics: CellMetrics::default(),
            glyphs: ConnectorGlyphs::unicode(),
            gutter: 2,
            _sink: PhantomData,
        }
    }

    #[must_use]
    pub const fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: ConnectorGlyphs<'a>) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub const fn gutter(mut self, gutter: u16) -> Self {
        self.gutter = gutter;
        self
    }
}

impl<H, D> StatefulWidget for DecorationOverlay<'_, H, D>
where
    H: DecorTree + IconSource,
    H::Icon: AsRef<str>,
    D: DiagnosticSink,
{
    type State = RowDecorator<H::Id, H::Icon, D>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut canvas = BufferCanvas::new(buf, self.metrics).glyphs(self.glyphs);
        for (line, row) in self.rows.iter().take(usize::from(area.height)).enumerate() {
            let indent = row.indent.min(area.width);
            let width = area.width.saturating_sub(indent).saturating_sub(self.gutter);
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + line as u16;
            let rect = self.metrics.row_rect(area.x + indent, y, width);
            state.draw(self.host, &mut canvas, row.id, rect);
        }
    }
}
