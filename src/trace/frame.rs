// Frame and annotation types
// A frame is an immutable snapshot of the working array at one instant

use serde::{Deserialize, Serialize};

/// Semantic highlight for a single array position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Not involved in the current step
    #[default]
    Default,

    /// One side of a comparison about to be decided
    Comparing,

    /// Value just written (merge) or exchanged (bubble)
    Placed,

    /// Range about to be split in two
    Dividing,

    /// Range whose halves are being merged
    Merging,

    /// Range sorted relative to itself, not necessarily final
    SortedLocally,

    /// Position holds its final value
    Sorted,
}

impl Highlight {
    /// Convert from string representation
    /// Accepts both PascalCase and snake_case
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "Default" | "default" => Some(Highlight::Default),
            "Comparing" | "comparing" => Some(Highlight::Comparing),
            "Placed" | "placed" => Some(Highlight::Placed),
            "Dividing" | "dividing" => Some(Highlight::Dividing),
            "Merging" | "merging" => Some(Highlight::Merging),
            "SortedLocally" | "sorted_locally" => Some(Highlight::SortedLocally),
            "Sorted" | "sorted" => Some(Highlight::Sorted),
            _ => None,
        }
    }

    /// Convert to snake_case string representation
    pub fn to_string(&self) -> &'static str {
        match self {
            Highlight::Default => "default",
            Highlight::Comparing => "comparing",
            Highlight::Placed => "placed",
            Highlight::Dividing => "dividing",
            Highlight::Merging => "merging",
            Highlight::SortedLocally => "sorted_locally",
            Highlight::Sorted => "sorted",
        }
    }

    /// Human-readable name for captions and legends
    pub fn display_name(&self) -> &'static str {
        match self {
            Highlight::Default => "Unsorted",
            Highlight::Comparing => "Comparing",
            Highlight::Placed => "Placed",
            Highlight::Dividing => "Dividing",
            Highlight::Merging => "Merging",
            Highlight::SortedLocally => "Sorted (local)",
            Highlight::Sorted => "Sorted",
        }
    }
}

/// Per-index highlight mapping
///
/// Always holds exactly one highlight per array position, so a frame's
/// annotation covers every index exactly once by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(Vec<Highlight>);

impl Annotation {
    /// Every position gets the same highlight
    pub fn uniform(len: usize, highlight: Highlight) -> Self {
        Annotation(vec![highlight; len])
    }

    /// Positions in `[left, right]` get `highlight`, the rest Default.
    /// Bounds past the end are clipped.
    pub fn range(len: usize, left: usize, right: usize, highlight: Highlight) -> Self {
        let mut annotation = Annotation::uniform(len, Highlight::Default);
        annotation.fill(left, right, highlight);
        annotation
    }

    /// Overwrite the highlight of `[left, right]`, clipped to the length
    pub fn fill(&mut self, left: usize, right: usize, highlight: Highlight) {
        if self.0.is_empty() || left > right {
            return;
        }
        let end = right.min(self.0.len() - 1);
        for slot in self.0.iter_mut().take(end + 1).skip(left) {
            *slot = highlight;
        }
    }

    /// Overwrite a single position; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, highlight: Highlight) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = highlight;
        }
    }

    pub fn get(&self, index: usize) -> Option<Highlight> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices carrying the given highlight, ascending
    pub fn indices_with(&self, highlight: Highlight) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, h)| **h == highlight)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Highlight> + '_ {
        self.0.iter().copied()
    }
}

/// One immutable snapshot in a trace
///
/// Fields are private: once built, a frame can only be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame<T> {
    array: Vec<T>,
    annotation: Annotation,
    description: String,
}

impl<T: Clone> Frame<T> {
    /// Build a frame from borrowed state, copying both the array and the annotation
    pub(crate) fn snapshot(array: &[T], annotation: &Annotation, description: String) -> Self {
        Frame {
            array: array.to_vec(),
            annotation: annotation.clone(),
            description,
        }
    }
}

impl<T> Frame<T> {
    /// Array values at the instant the frame was recorded
    pub fn array(&self) -> &[T] {
        &self.array
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Explanatory caption
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Snapshot length and annotation length agree
    pub fn is_well_formed(&self) -> bool {
        self.array.len() == self.annotation.len()
    }
}

/// Format values as `[a, b, c]` for captions
pub fn format_values<T: std::fmt::Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
