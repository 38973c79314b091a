use crate::context::RowRect;
use crate::style::Rgba;

/// Icon-independent drawing primitives.
///
/// Every primitive receives its color explicitly; a surface keeps no "current color".
pub trait Surface {
    /// Fills a rectangle with a solid (possibly translucent) color.
    fn fill_rect(&mut self, rect: RowRect, color: Rgba);
    /// Draws a left-aligned text label.
    fn draw_label(&mut self, rect: RowRect, text: &str, color: Rgba);
    /// Returns the rendered width of `text` in the label style.
    fn text_width(&self, text: &str) -> f32;
}

/// Surface that can also draw host icons of type `I`.
pub trait Canvas<I>: Surface {
    /// Draws an icon into `rect`, modulated by `tint`.
    fn draw_icon(&mut self, rect: RowRect, icon: &I, tint: Rgba);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<I> {
    Rect {
        rect: RowRect,
        color: Rgba,
    },
    Icon {
        rect: RowRect,
        icon: I,
        tint: Rgba,
    },
    Label {
        rect: RowRect,
        text: String,
        color: Rgba,
    },
}

/// Canvas that records draw calls in order and measures text with a fixed advance per char.
#[derive(Clone, Debug)]
pub struct RecordingCanvas<I> {
    commands: Vec<DrawCommand<I>>,
    char_width: f32,
}

impl<I> RecordingCanvas<I> {
    /// Default per-character advance, matching a 12px UI font.
    pub const DEFAULT_CHAR_WIDTH: f32 = 7.0;

    pub const fn new() -> Self {
        Self::with_char_width(Self::DEFAULT_CHAR_WIDTH)
    }

    pub const fn with_char_width(char_width: f32) -> Self {
        Self {
            commands: Vec::new(),
            char_width,
        }
    }

    pub fn commands(&self) -> &[DrawCommand<I>] {
        &self.commands
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand<I>> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn icons(&self) -> impl Iterator<Item = (&RowRect, &I, &Rgba)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Icon { rect, icon, tint } => Some((rect, icon, tint)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&RowRect, &Rgba)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = (&RowRect, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label { rect, text, .. } => Some((rect, text.as_str())),
            _ => None,
        })
    }
}

impl<I> Default for RecordingCanvas<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Surface for RecordingCanvas<I> {
    fn fill_rect(&mut self, rect: RowRect, color: Rgba) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_label(&mut self, rect: RowRect, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Label {
            rect,
            text: text.to_owned(),
            color,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f32;
        chars * self.char_width
    }
}

impl<I: Clone> Canvas<I> for RecordingCanvas<I> {
    fn draw_icon(&mut self, rect: RowRect, icon: &I, tint: Rgba) {
        self.commands.push(DrawCommand::Icon {
            rect,
            icon: icon.clone(),
            tint,
        });
    }
}
