// Commands
// Entry points behind the CLI; every error is flattened into CommandError
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ExplainerConfig;
use crate::render::{self, Palette, Renderer, StoryboardRenderer};
use crate::sorting::{self, SortAlgorithm};
use crate::state::{self, RunManifest};
use crate::trace::{self, Trace};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

impl CommandError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

// ==================== RUN COMMANDS ====================

/// Result of `generate`: the stored manifest plus the in-memory trace
#[derive(Debug)]
pub struct GeneratedRun {
    pub manifest: RunManifest,
    pub trace: Trace<i64>,
}

/// Trace a sort as configured and store the result
pub fn generate(config: &ExplainerConfig) -> CommandResult<GeneratedRun> {
    config.validate()?;

    let input = config.source.resolve()?;
    log::info!(
        "Tracing {} over {}",
        config.algorithm.display_name(),
        trace::format_values(&input)
    );

    let run = sorting::run_sort(config.algorithm, &input, &config.sort_options())?;

    let output_dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => state::default_output_dir()?,
    };
    let manifest = state::save_run(&run, &output_dir)?;

    Ok(GeneratedRun {
        manifest,
        trace: run.trace,
    })
}

/// Render a stored trace file as a storyboard
pub fn inspect(path: &Path, palette: &str, interval_ms: u64) -> CommandResult<String> {
    let trace: Trace<i64> = trace::read_trace_file(path)?;
    storyboard(&trace, palette, interval_ms)
}

/// Render an in-memory trace as a storyboard
pub fn storyboard(trace: &Trace<i64>, palette: &str, interval_ms: u64) -> CommandResult<String> {
    let palette = resolve_palette(palette)?;
    let mut renderer = StoryboardRenderer::new(palette, interval_ms);
    Ok(renderer.render(trace)?)
}

/// Locate the trace file for a manifest path or return the path unchanged
pub fn trace_path_for(path: &Path) -> CommandResult<PathBuf> {
    if path.extension().map(|ext| ext == "json").unwrap_or(false) {
        let manifest = state::read_manifest(path)?;
        return Ok(PathBuf::from(manifest.trace_path));
    }
    Ok(path.to_path_buf())
}

// ==================== CATALOG COMMANDS ====================

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSummary {
    pub name: String,
    pub display_name: String,
}

pub fn list_algorithms() -> Vec<AlgorithmSummary> {
    SortAlgorithm::all()
        .iter()
        .map(|a| AlgorithmSummary {
            name: a.to_string().to_string(),
            display_name: a.display_name().to_string(),
        })
        .collect()
}

pub fn list_palettes() -> Vec<Palette> {
    render::list_palettes()
}

fn resolve_palette(name: &str) -> CommandResult<Palette> {
    render::get_palette(name).ok_or_else(|| CommandError {
        message: format!("Unknown palette: {}", name),
    })
}
