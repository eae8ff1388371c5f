// File system operations for storing traces and manifests
use log::info;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use super::models::RunManifest;
use crate::sorting::SortRun;
use crate::trace::{TraceError, TraceWriter};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to get app data directory")]
    NoAppDataDir,
    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Get the app data directory for sortreel
pub fn get_app_data_dir() -> StorageResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StorageError::NoAppDataDir)?;
    let app_dir = data_dir.join("sortreel");
    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

/// Default directory for run outputs
pub fn default_output_dir() -> StorageResult<PathBuf> {
    let runs_dir = get_app_data_dir()?.join("runs");
    fs::create_dir_all(&runs_dir)?;
    Ok(runs_dir)
}

/// Store a file in `dir` and return its path and SHA256 hash
pub fn store_file(dir: &Path, filename: &str, data: &[u8]) -> StorageResult<(PathBuf, String)> {
    fs::create_dir_all(dir)?;

    let file_path = dir.join(filename);
    let mut file = fs::File::create(&file_path)?;
    file.write_all(data)?;

    Ok((file_path, calculate_sha256(data)))
}

/// Calculate SHA256 hash of data
pub fn calculate_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Write a run's trace (JSONL) and manifest (JSON) into `dir`
pub fn save_run(run: &SortRun<i64>, dir: &Path) -> StorageResult<RunManifest> {
    fs::create_dir_all(dir)?;

    let id = Uuid::new_v4();
    let stem = RunManifest::file_stem(run.algorithm, &id);

    let trace_path = dir.join(format!("{}.jsonl", stem));
    if trace_path.exists() {
        fs::remove_file(&trace_path)?;
    }
    TraceWriter::new(trace_path.clone()).write_trace(&run.trace)?;
    let trace_sha256 = calculate_sha256(&fs::read(&trace_path)?);

    let manifest = RunManifest::new(
        id,
        run,
        trace_path.to_string_lossy().to_string(),
        trace_sha256,
    );
    let manifest_json = serde_json::to_vec_pretty(&manifest)?;
    let (manifest_path, _) = store_file(dir, &format!("{}.json", stem), &manifest_json)?;

    info!(
        "Saved {} frames to {} (manifest {})",
        manifest.frame_count,
        trace_path.display(),
        manifest_path.display()
    );

    Ok(manifest)
}

/// Read a manifest written by `save_run`
pub fn read_manifest(path: &Path) -> StorageResult<RunManifest> {
    let contents = fs::read(path)?;
    Ok(serde_json::from_slice(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{run_sort, RunStatus, SortAlgorithm, SortOptions};
    use crate::trace::{read_trace_file, Trace};
    use tempfile::TempDir;

    #[test]
    fn test_calculate_sha256() {
        let data = b"hello world";
        let hash = calculate_sha256(data);
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let (path, hash) = store_file(temp_dir.path(), "a.txt", b"hello world").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello world");
        assert_eq!(hash, calculate_sha256(b"hello world"));
    }

    #[test]
    fn test_save_run_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let run = run_sort(SortAlgorithm::BubbleSort, &[5, 1, 4, 2, 8], &SortOptions::default()).unwrap();

        let manifest = save_run(&run, temp_dir.path()).unwrap();
        assert_eq!(manifest.status, RunStatus::Completed);
        assert_eq!(manifest.frame_count, run.trace.len());
        assert_eq!(manifest.final_array, vec![1, 2, 4, 5, 8]);
        assert_eq!(manifest.input, vec![5, 1, 4, 2, 8]);

        let trace_path = PathBuf::from(&manifest.trace_path);
        let bytes = fs::read(&trace_path).unwrap();
        assert_eq!(manifest.trace_sha256, calculate_sha256(&bytes));

        let read_back: Trace<i64> = read_trace_file(&trace_path).unwrap();
        assert_eq!(read_back, run.trace);

        let manifest_path = trace_path.with_extension("json");
        assert_eq!(read_manifest(&manifest_path).unwrap(), manifest);
    }
}
