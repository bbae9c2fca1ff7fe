//! Phantom CLI - Command-line interface for wood phantom generation
//!
//! This binary generates synthetic wood ring volumes and exports their slices.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use phantom_backend_volume::SliceAxis;
use phantom_cli::commands;
use phantom_cli::input::ParamOverrides;

/// Phantom - Synthetic wood ring volume generator
#[derive(Parser)]
#[command(name = "phantom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a volume and export depth slices as PNG
    Generate {
        /// Path to a JSON parameter file
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        overrides: ParamOverrides,

        /// Output directory for slice images
        #[arg(short, long, default_value = ".")]
        out: String,

        /// Depth slices to export, comma separated (default: every 200th and the last)
        #[arg(long, value_delimiter = ',')]
        slices: Option<Vec<u32>>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate parameters and print the derived tilt geometry
    Validate {
        /// Path to a JSON parameter file
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        overrides: ParamOverrides,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a volume and export one section along any axis
    Section {
        /// Path to a JSON parameter file
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        overrides: ParamOverrides,

        /// Slice axis (axial, coronal, sagittal)
        #[arg(long, default_value = "axial")]
        axis: SliceAxis,

        /// Index along the axis
        #[arg(long, default_value_t = 0)]
        index: u32,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the default parameter file as JSON
    Defaults,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Generate {
            config,
            overrides,
            out,
            slices,
            json,
        } => commands::generate::run(
            config.as_deref(),
            &overrides,
            &out,
            slices.as_deref(),
            json,
        ),
        Commands::Validate {
            config,
            overrides,
            json,
        } => commands::validate::run(config.as_deref(), &overrides, json),
        Commands::Section {
            config,
            overrides,
            axis,
            index,
            out,
            json,
        } => commands::section::run(config.as_deref(), &overrides, axis, index, &out, json),
        Commands::Defaults => commands::defaults::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
