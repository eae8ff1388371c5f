// Render module
// Consumers that turn a finished trace into something to look at

pub mod palette;
pub mod storyboard;

use crate::trace::Trace;

/// Downstream consumer of a finished trace.
///
/// The trace is borrowed immutably, so rendering can never alter frames
/// and rendering the same trace twice sees identical input.
pub trait Renderer<T> {
    type Output;
    type Error;

    fn render(&mut self, trace: &Trace<T>) -> Result<Self::Output, Self::Error>;
}

pub use palette::{
    cell_color, get_palette, highlight_color, list_palette_names, list_palettes, palette_color,
    Palette,
};
pub use storyboard::StoryboardRenderer;
