// Sorting run types
// Algorithm identifiers, run options, results and errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::trace::{CancelFlag, RecordError, Trace};

/// Values the instrumented algorithms can sort and caption
pub trait SortValue: PartialOrd + Copy + fmt::Display {}

impl<T: PartialOrd + Copy + fmt::Display> SortValue for T {}

/// Instrumented algorithms available for tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Recursive divide and stable merge
    MergeSort,

    /// Adjacent-swap passes with optional early exit
    BubbleSort,
}

impl SortAlgorithm {
    /// Parse from a user-supplied name
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "merge" | "merge_sort" | "mergesort" => Some(SortAlgorithm::MergeSort),
            "bubble" | "bubble_sort" | "bubblesort" => Some(SortAlgorithm::BubbleSort),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn to_string(&self) -> &'static str {
        match self {
            SortAlgorithm::MergeSort => "merge_sort",
            SortAlgorithm::BubbleSort => "bubble_sort",
        }
    }

    /// Human-readable name for titles
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::MergeSort => "Merge Sort",
            SortAlgorithm::BubbleSort => "Bubble Sort",
        }
    }

    pub fn all() -> [SortAlgorithm; 2] {
        [SortAlgorithm::MergeSort, SortAlgorithm::BubbleSort]
    }
}

/// Errors that can occur during a traced sort
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Run cancelled after {frames} frames")]
    Cancelled { frames: usize },
}

impl From<RecordError> for SortError {
    fn from(error: RecordError) -> Self {
        match error {
            RecordError::Cancelled { frames } => SortError::Cancelled { frames },
            shape @ RecordError::ShapeMismatch { .. } => {
                SortError::InvariantViolation(shape.to_string())
            }
        }
    }
}

/// Knobs for a single run
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Bubble sort stops after a pass with zero swaps
    pub early_exit: bool,

    /// Stop recording once this many frames exist
    pub frame_budget: Option<usize>,

    /// External cancellation
    pub cancel: CancelFlag,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            early_exit: true,
            frame_budget: None,
            cancel: CancelFlag::new(),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Trace ends with the all-sorted frame
    Completed,
    /// Trace is a well-formed prefix
    Cancelled,
}

impl RunStatus {
    pub fn to_string(&self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::Cancelled => "cancelled",
        }
    }
}

/// Result of a traced sort
#[derive(Debug, Clone)]
pub struct SortRun<T> {
    pub algorithm: SortAlgorithm,
    /// Untouched copy of the input
    pub input: Vec<T>,
    pub trace: Trace<T>,
    pub status: RunStatus,
}

impl<T> SortRun<T> {
    pub fn is_complete(&self) -> bool {
        self.status == RunStatus::Completed
    }
}
