//! `daylayout` CLI — lay out one day's calendar events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a JSON array of {start, end, ...} events (stdin → stdout)
//! echo '[{"start":540,"end":600},{"start":560,"end":620}]' | daylayout layout
//!
//! # From file to file, on a 900-wide track, with pixel boxes
//! daylayout layout -i day.json -o laid-out.json --track-width 900 --geometry
//!
//! # Load defaults from a config file; flags still win
//! daylayout layout -i day.json --config layout.json
//!
//! # Report how many columns the busiest collision group needs
//! daylayout ratio -i day.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use day_layout::LayoutConfig;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daylayout",
    version,
    about = "Overlap layout for day-view calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign a width and slot to every event
    Layout {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Total horizontal space shared by one day's columns
        #[arg(long)]
        track_width: Option<f64>,
        /// JSON config file (track_width, geometry allowances)
        #[arg(long)]
        config: Option<String>,
        /// Attach pixel geometry (left, top, width, height) to each event
        #[arg(long)]
        geometry: bool,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the largest width ratio any collision group needs
    Ratio {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Layout {
            input,
            output,
            track_width,
            config,
            geometry,
            compact,
        } => {
            let config = load_config(config.as_deref(), track_width)?;
            debug!(track_width = config.track_width, geometry, "laying out");

            let json = read_input(input.as_deref())?;
            let laid_out = day_layout::lay_out_json(&json, &config, geometry)
                .context("Failed to lay out events")?;

            let rendered = if compact {
                laid_out
            } else {
                let value: serde_json::Value = serde_json::from_str(&laid_out)?;
                serde_json::to_string_pretty(&value)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Ratio { input } => {
            let json = read_input(input.as_deref())?;
            let ratio = day_layout::max_width_ratio_json(&json)
                .context("Failed to compute width ratio")?;
            println!("{}", ratio);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean JSON. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the layout config from an optional file, then apply flag overrides.
///
/// - no `--config`: defaults (600-wide track)
/// - `--config layout.json`: any subset of fields, the rest default
/// - `--track-width` overrides whatever the file says
fn load_config(path: Option<&str>, track_width: Option<f64>) -> Result<LayoutConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            LayoutConfig::from_json(&raw)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => LayoutConfig::default(),
    };

    if let Some(width) = track_width {
        config.track_width = width;
    }
    config.validate().context("Invalid layout configuration")?;

    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
