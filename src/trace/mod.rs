// Trace data model
// Frames, annotations, the recorder and JSONL persistence

pub mod frame;
pub mod recorder;
pub mod writer;

pub use frame::{format_values, Annotation, Frame, Highlight};
pub use recorder::{CancelFlag, RecordError, Trace, TraceRecorder};
pub use writer::{read_trace_file, TraceError, TraceWriter};
