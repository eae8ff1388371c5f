// Run configuration
// Defaults match a short classroom clip; any field can come from a JSON file

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::input::ArraySource;
use crate::sorting::{SortAlgorithm, SortOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
}

/// Settings for one explainer run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainerConfig {
    pub algorithm: SortAlgorithm,

    /// Array to sort
    pub source: ArraySource,

    /// Bubble sort stops after a pass with zero swaps
    pub early_exit: bool,

    /// Time each frame stays on screen in milliseconds
    pub frame_interval_ms: u64,

    /// Palette name for resting cells
    pub palette: String,

    /// Stop recording after this many frames
    pub max_frames: Option<usize>,

    /// Where traces and manifests are written.
    /// None means the app data directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        ExplainerConfig {
            algorithm: SortAlgorithm::MergeSort,
            source: ArraySource::default(),
            early_exit: true,
            frame_interval_ms: 1500,
            palette: "GOOGLE".to_string(),
            max_frames: None,
            output_dir: None,
        }
    }
}

impl ExplainerConfig {
    /// Options handed to the sorting run
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            early_exit: self.early_exit,
            frame_budget: self.max_frames,
            ..SortOptions::default()
        }
    }

    /// Check fields that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if crate::render::get_palette(&self.palette).is_none() {
            return Err(ConfigError::UnknownPalette(self.palette.clone()));
        }
        Ok(())
    }
}

/// Load a config from a JSON file; missing fields take their defaults
pub fn load_config(path: &Path) -> Result<ExplainerConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: ExplainerConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
