// sortreel - Sorting Algorithm Explainer Traces
// Module declarations

pub mod commands;
pub mod config;
pub mod input;
pub mod render;
pub mod sorting;
pub mod state;
pub mod trace;

pub use sorting::{run_sort, SortAlgorithm, SortError, SortOptions, SortRun};
pub use trace::{Annotation, Frame, Highlight, Trace, TraceRecorder};
