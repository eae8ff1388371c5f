// Data models for stored runs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sorting::{RunStatus, SortAlgorithm, SortRun};

/// Summary of a stored run, written next to its trace file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub algorithm: SortAlgorithm,
    pub status: RunStatus,
    pub input: Vec<i64>,
    pub frame_count: usize,
    pub final_array: Vec<i64>,
    pub trace_path: String,
    pub trace_sha256: String,
}

impl RunManifest {
    pub fn new(id: Uuid, run: &SortRun<i64>, trace_path: String, trace_sha256: String) -> Self {
        RunManifest {
            id,
            created_at: Utc::now(),
            algorithm: run.algorithm,
            status: run.status,
            input: run.input.clone(),
            frame_count: run.trace.len(),
            final_array: run.trace.final_array().map(|a| a.to_vec()).unwrap_or_default(),
            trace_path,
            trace_sha256,
        }
    }

    /// File name stem shared by the trace and the manifest
    pub fn file_stem(algorithm: SortAlgorithm, id: &Uuid) -> String {
        format!("{}_{}", algorithm.to_string(), id)
    }
}
