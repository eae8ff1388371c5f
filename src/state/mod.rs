// State management module
// Run manifests and file system storage of traces

pub mod models;
pub mod storage;

pub use models::RunManifest;
pub use storage::{
    calculate_sha256, default_output_dir, read_manifest, save_run, store_file, StorageError,
};
