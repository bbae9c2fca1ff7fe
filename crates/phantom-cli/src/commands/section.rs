//! Section command implementation
//!
//! Generates a volume and writes one section along any axis.

use anyhow::Result;
use colored::Colorize;
use phantom_backend_volume::png::{write_section, PngConfig};
use phantom_backend_volume::{generate, SliceAxis};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, ExportedFile};
use super::Failure;
use crate::input::{load_params, ParamOverrides};

/// Run the section command
///
/// # Returns
/// Exit code: 0 success, 1 parameter error, 2 generation or export error
pub fn run(
    config: Option<&str>,
    overrides: &ParamOverrides,
    axis: SliceAxis,
    index: u32,
    out: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let outcome = execute(config, overrides, axis, index, Path::new(out));

    match (&outcome, json_output) {
        (Ok(file), true) => print_json(file)?,
        (Err(failure), true) => print_json(&failure.to_json())?,
        (Ok(file), false) => {
            println!(
                "{} {} section {} -> {}",
                "SUCCESS".green().bold(),
                axis,
                file.index,
                file.path
            );
        }
        (Err(failure), false) => {
            println!("{} {}", "SECTION FAILED".red().bold(), failure.message);
        }
    }

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => failure.exit_code(),
    })
}

pub(crate) fn execute(
    config: Option<&str>,
    overrides: &ParamOverrides,
    axis: SliceAxis,
    index: u32,
    out: &Path,
) -> Result<ExportedFile, Failure> {
    let params = load_params(config, overrides).map_err(|e| Failure::config(&e))?;
    let volume = generate(&params)?;

    let extent = volume.extent(axis);
    if index >= extent {
        return Err(Failure::params(format!(
            "{} index {} is out of range (extent {})",
            axis, index, extent
        )));
    }

    write_section(&volume, axis, index, out, &PngConfig::default())
        .map_err(|e| Failure::export(format!("{}: {}", out.display(), e)))?;

    Ok(ExportedFile {
        index,
        path: out.display().to_string(),
    })
}
