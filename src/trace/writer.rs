// Trace persistence
// Append-only JSONL trace file, one frame per line

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::frame::Frame;
use super::recorder::{RecordError, Trace};

/// Errors that can occur during trace file operations
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed trace: {0}")]
    Malformed(#[from] RecordError),
}

/// Serialize a frame to a JSON line (with newline)
pub fn to_json_line<T: Serialize>(frame: &Frame<T>) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(frame)?;
    Ok(format!("{}\n", json))
}

/// Trace file writer
/// Manages an append-only JSONL trace file
pub struct TraceWriter {
    file_path: PathBuf,
}

impl TraceWriter {
    /// Create a new trace writer for a specific file
    pub fn new(file_path: PathBuf) -> Self {
        TraceWriter { file_path }
    }

    /// Append one frame to the file
    /// Creates file if it doesn't exist
    pub fn write<T: Serialize>(&self, frame: &Frame<T>) -> Result<(), TraceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        let json_line = to_json_line(frame)?;
        file.write_all(json_line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Append every frame of a trace, in order
    pub fn write_trace<T: Serialize>(&self, trace: &Trace<T>) -> Result<(), TraceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        for frame in trace {
            let json_line = to_json_line(frame)?;
            file.write_all(json_line.as_bytes())?;
        }

        file.flush()?;
        Ok(())
    }

    /// Get the trace file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Read a trace back from a JSONL file
pub fn read_trace_file<T: DeserializeOwned>(path: &Path) -> Result<Trace<T>, TraceError> {
    let contents = std::fs::read_to_string(path)?;
    let mut frames = Vec::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let frame: Frame<T> = serde_json::from_str(line)?;
        frames.push(frame);
    }

    Ok(Trace::from_frames(frames)?)
}
