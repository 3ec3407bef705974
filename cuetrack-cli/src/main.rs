//! Cuetrack CLI Tool
//!
//! Command-line interface for resolving timeline records at a playback time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cuetrack_core::resolver::index_or_sentinel;
use cuetrack_core::{sweep, time, PlaybackState, SweepConfig, Timeline};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuetrack")]
#[command(about = "Resolve current, visible and active timeline records at a playback time")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the timeline at a single playback time
    Query {
        /// Input JSON record file
        input: PathBuf,

        /// Playback time in seconds
        #[arg(short, long)]
        time: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through playback time and print every state change
    Sweep {
        /// Input JSON record file
        input: PathBuf,

        /// First playback time in seconds
        #[arg(long, default_value = "0")]
        start: f64,

        /// Last playback time in seconds (defaults to the timeline duration)
        #[arg(long)]
        end: Option<f64>,

        /// Seconds between samples
        #[arg(long, default_value = "1")]
        step: f64,

        /// Print one JSON object per change
        #[arg(long)]
        json: bool,
    },

    /// Show timeline information
    Info {
        /// Input JSON record file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query { input, time, json } => query(&input, time, json)?,

        Commands::Sweep {
            input,
            start,
            end,
            step,
            json,
        } => {
            let config = SweepConfig { start, end, step };
            sweep_timeline(&input, &config, json)?
        }

        Commands::Info { input } => {
            let timeline = load_timeline(&input)?;
            print_info(&timeline);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_timeline(input: &Path) -> Result<Timeline> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open record file {}", input.display()))?;
    let timeline = Timeline::read(BufReader::new(file)).context("Failed to read timeline")?;

    debug!(records = timeline.len(), path = %input.display(), "loaded timeline");
    if !timeline.is_sorted() {
        warn!("records are not sorted by timestamp; results assume ascending order");
    }
    if timeline.malformed_count() > 0 {
        warn!(
            malformed = timeline.malformed_count(),
            "some records lack a timestamp or clear time"
        );
    }

    Ok(timeline)
}

fn query(input: &Path, time: f64, json: bool) -> Result<()> {
    let time = time::validate(time).context("Invalid playback time")?;
    let timeline = load_timeline(input)?;
    let state = timeline.state_at(time);

    if json {
        let output = serde_json::to_string_pretty(&state).context("Failed to encode result")?;
        println!("{}", output);
    } else {
        println!(
            "Time: {}s ({} ms)",
            time,
            time::seconds_to_millis(time)
        );
        print_state(&state);
    }

    Ok(())
}

fn sweep_timeline(input: &Path, config: &SweepConfig, json: bool) -> Result<()> {
    let timeline = load_timeline(input)?;
    let changes = sweep::sweep(&timeline, config).context("Failed to sweep timeline")?;

    for change in &changes {
        if json {
            let line = serde_json::json!({ "time": change.time, "state": change.state });
            println!("{}", line);
        } else {
            println!("\n@ {}s", change.time);
            print_state(&change.state);
        }
    }

    if !json {
        println!("\n{} state changes", changes.len());
    }

    Ok(())
}

fn print_state(state: &PlaybackState) {
    println!("Current index: {}", index_or_sentinel(state.index));
    println!(
        "Visible window: {} .. {}",
        index_or_sentinel(state.interval.first),
        index_or_sentinel(state.interval.last)
    );
    println!("Cleared: {:?}", state.interval.cleared);
    println!("Enabled: {}", state.enabled);
}

fn print_info(timeline: &Timeline) {
    println!("\n=== Timeline Information ===");
    println!("Records: {}", timeline.len());
    println!("Malformed records: {}", timeline.malformed_count());
    println!("Sorted by timestamp: {}", timeline.is_sorted());
    println!(
        "Duration: {:.2} seconds ({} ms)",
        timeline.duration(),
        time::seconds_to_millis(timeline.duration())
    );

    println!("\n=== Records (first 10) ===");
    for (i, record) in timeline.records().iter().take(10).enumerate() {
        let timestamp = record
            .timestamp
            .map_or_else(|| "-".to_string(), |t| format!("{}s", t));
        let clear = match record.clear {
            Some(clear) => match clear.at() {
                Some(at) => format!("{}s", at),
                None => "never".to_string(),
            },
            None => "-".to_string(),
        };
        println!("  [{}] at {} cleared {}", i, timestamp, clear);
    }
    if timeline.len() > 10 {
        println!("  ... and {} more records", timeline.len() - 10);
    }
}
