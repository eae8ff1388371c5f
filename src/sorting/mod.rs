// Sorting module
// Instrumented algorithms that record a frame trace while they sort

pub mod bubble_sort;
pub mod merge_sort;
pub mod runner;
pub mod types;

pub use bubble_sort::bubble_sort;
pub use merge_sort::merge_sort;
pub use runner::{run_sort, validate_input};
pub use types::{RunStatus, SortAlgorithm, SortError, SortOptions, SortRun, SortValue};
