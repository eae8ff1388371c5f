// Palettes
// Display colors for resting cells and for each highlight kind

use serde::{Deserialize, Serialize};

use crate::trace::Highlight;

/// Named set of colors cycled across array positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
}

fn palette(name: &str, description: &str, colors: &[&str]) -> Palette {
    Palette {
        name: name.to_string(),
        description: description.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

fn google_palette() -> Palette {
    palette(
        "GOOGLE",
        "Brand-style blue, red, yellow and green boxes.",
        &["blue", "red", "yellow", "green", "red", "blue"],
    )
}

fn classic_palette() -> Palette {
    palette("CLASSIC", "Plain white bars on a chart.", &["white"])
}

/// Get a palette by name
pub fn get_palette(name: &str) -> Option<Palette> {
    match name.to_uppercase().as_str() {
        "GOOGLE" => Some(google_palette()),
        "CLASSIC" => Some(classic_palette()),
        _ => None,
    }
}

/// List all available palettes
pub fn list_palettes() -> Vec<Palette> {
    vec![google_palette(), classic_palette()]
}

/// Get all palette names
pub fn list_palette_names() -> Vec<String> {
    vec!["GOOGLE".to_string(), "CLASSIC".to_string()]
}

/// Resting color of position `index`: colors cycle by index
pub fn palette_color(palette: &Palette, index: usize) -> &str {
    if palette.colors.is_empty() {
        return "white";
    }
    &palette.colors[index % palette.colors.len()]
}

/// Fixed color for an active highlight; `None` for Default
pub fn highlight_color(highlight: Highlight) -> Option<&'static str> {
    match highlight {
        Highlight::Default => None,
        Highlight::Comparing => Some("yellow"),
        Highlight::Placed => Some("green"),
        Highlight::Dividing => Some("lightcoral"),
        Highlight::Merging => Some("lightblue"),
        Highlight::SortedLocally => Some("green"),
        Highlight::Sorted => Some("lightgreen"),
    }
}

/// Color a cell is drawn with in a frame
pub fn cell_color(palette: &Palette, index: usize, highlight: Highlight) -> &str {
    match highlight_color(highlight) {
        Some(color) => color,
        None => palette_color(palette, index),
    }
}
