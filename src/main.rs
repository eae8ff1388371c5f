//! sortreel CLI - trace sorting algorithms frame by frame.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sortreel_lib::commands::{self, CommandResult};
use sortreel_lib::config::{load_config, ExplainerConfig};
use sortreel_lib::input::{parse_values, ArraySource};
use sortreel_lib::sorting::SortAlgorithm;

/// sortreel - step-by-step sorting explainer traces.
#[derive(Parser)]
#[command(name = "sortreel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort an array and store its frame trace
    Generate {
        /// Algorithm to trace (merge, bubble)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Literal values, e.g. "5,1,4,2,8"
        #[arg(long)]
        values: Option<String>,

        /// Number of random values
        #[arg(short, long)]
        size: Option<usize>,

        /// Smallest random value
        #[arg(long)]
        min: Option<i64>,

        /// Largest random value
        #[arg(long)]
        max: Option<i64>,

        /// Seed for reproducible random arrays
        #[arg(long)]
        seed: Option<u64>,

        /// Keep bubble-sorting after a pass with no swaps
        #[arg(long)]
        no_early_exit: bool,

        /// Stop recording after this many frames
        #[arg(long)]
        max_frames: Option<usize>,

        /// JSON config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for trace and manifest files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Palette for the printed storyboard
        #[arg(long)]
        palette: Option<String>,

        /// Milliseconds per frame in the printed storyboard
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Print the storyboard after generating
        #[arg(short, long)]
        print: bool,
    },

    /// Print the storyboard of a stored trace (.jsonl) or manifest (.json)
    Inspect {
        /// Path to the trace or manifest file
        trace: PathBuf,

        /// Palette for cell colors
        #[arg(long, default_value = "GOOGLE")]
        palette: String,

        /// Milliseconds per frame
        #[arg(long, default_value = "1500")]
        interval_ms: u64,
    },

    /// List traceable algorithms
    Algorithms,

    /// List palettes
    Palettes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e.message());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> CommandResult<()> {
    match command {
        Commands::Generate {
            algorithm,
            values,
            size,
            min,
            max,
            seed,
            no_early_exit,
            max_frames,
            config,
            output_dir,
            palette,
            interval_ms,
            print,
        } => {
            let mut cfg = match config {
                Some(path) => load_config(&path)?,
                None => ExplainerConfig::default(),
            };

            if let Some(name) = algorithm {
                cfg.algorithm = SortAlgorithm::from_string(&name)
                    .ok_or_else(|| format!("Unknown algorithm: {}", name))?;
            }

            if let Some(text) = values {
                cfg.source = ArraySource::Literal {
                    values: parse_values(&text)?,
                };
            } else if size.is_some() || min.is_some() || max.is_some() || seed.is_some() {
                let (d_size, d_min, d_max, d_seed) = match cfg.source {
                    ArraySource::Random {
                        size,
                        min,
                        max,
                        seed,
                    } => (size, min, max, seed),
                    ArraySource::Literal { .. } => (8, 1, 20, None),
                };
                cfg.source = ArraySource::Random {
                    size: size.unwrap_or(d_size),
                    min: min.unwrap_or(d_min),
                    max: max.unwrap_or(d_max),
                    seed: seed.or(d_seed),
                };
            }

            if no_early_exit {
                cfg.early_exit = false;
            }
            if max_frames.is_some() {
                cfg.max_frames = max_frames;
            }
            if output_dir.is_some() {
                cfg.output_dir = output_dir;
            }
            if let Some(name) = palette {
                cfg.palette = name;
            }
            if let Some(ms) = interval_ms {
                cfg.frame_interval_ms = ms;
            }

            let generated = commands::generate(&cfg)?;
            if print {
                let text =
                    commands::storyboard(&generated.trace, &cfg.palette, cfg.frame_interval_ms)?;
                print!("{}", text);
            }

            let manifest = &generated.manifest;
            println!(
                "{} {} ({} frames, {}) -> {}",
                manifest.algorithm.display_name(),
                manifest.id,
                manifest.frame_count,
                manifest.status.to_string(),
                manifest.trace_path
            );
            Ok(())
        }

        Commands::Inspect {
            trace,
            palette,
            interval_ms,
        } => {
            let path = commands::trace_path_for(&trace)?;
            print!("{}", commands::inspect(&path, &palette, interval_ms)?);
            Ok(())
        }

        Commands::Algorithms => {
            for algorithm in commands::list_algorithms() {
                println!("{:<12} {}", algorithm.name, algorithm.display_name);
            }
            Ok(())
        }

        Commands::Palettes => {
            for palette in commands::list_palettes() {
                println!(
                    "{:<8} {} ({})",
                    palette.name,
                    palette.description,
                    palette.colors.join(", ")
                );
            }
            Ok(())
        }
    }
}
