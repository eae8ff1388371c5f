// Text storyboard renderer
// One block per frame: timestamp, colored cells and the caption

use std::fmt::{self, Write};

use super::palette::{cell_color, Palette};
use super::Renderer;
use crate::trace::{Highlight, Trace};

/// Renders a trace as a plain-text storyboard
pub struct StoryboardRenderer {
    palette: Palette,
    /// Time each frame stays on screen
    interval_ms: u64,
}

impl StoryboardRenderer {
    pub fn new(palette: Palette, interval_ms: u64) -> Self {
        StoryboardRenderer {
            palette,
            interval_ms,
        }
    }

    /// Start time of frame `index`, formatted mm:ss.t
    pub fn timestamp(&self, index: usize) -> String {
        let total_ms = (index as u64).saturating_mul(self.interval_ms);
        let minutes = total_ms / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let tenths = (total_ms % 1000) / 100;
        format!("{:02}:{:02}.{}", minutes, seconds, tenths)
    }
}

fn cell_marker(highlight: Highlight) -> char {
    match highlight {
        Highlight::Default => ' ',
        Highlight::Comparing => '?',
        Highlight::Placed => '+',
        Highlight::Dividing => '|',
        Highlight::Merging => '~',
        Highlight::SortedLocally => '-',
        Highlight::Sorted => '*',
    }
}

impl<T: fmt::Display> Renderer<T> for StoryboardRenderer {
    type Output = String;
    type Error = fmt::Error;

    fn render(&mut self, trace: &Trace<T>) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let total = trace.len();

        for (index, frame) in trace.iter().enumerate() {
            writeln!(
                out,
                "frame {}/{} @ {}",
                index + 1,
                total,
                self.timestamp(index)
            )?;

            let mut cells = Vec::with_capacity(frame.array().len());
            for (position, (value, highlight)) in frame
                .array()
                .iter()
                .zip(frame.annotation().iter())
                .enumerate()
            {
                let marker = cell_marker(highlight);
                cells.push(format!(
                    "{m}{}{m}:{}",
                    value,
                    cell_color(&self.palette, position, highlight),
                    m = marker
                ));
            }
            writeln!(out, "  {}", cells.join(" "))?;
            writeln!(out, "  {}", frame.description())?;
        }

        Ok(out)
    }
}
