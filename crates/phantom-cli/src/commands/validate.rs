//! Validate command implementation
//!
//! Checks parameters and prints the derived tilt geometry without generating.

use anyhow::Result;
use colored::Colorize;
use phantom_backend_volume::{plan, TiltGeometry};
use phantom_spec::canonical_params_hash;
use std::process::ExitCode;

use super::json_output::{print_json, ValidateOutput};
use super::Failure;
use crate::input::{load_params, ParamOverrides};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config: Option<&str>, overrides: &ParamOverrides, json_output: bool) -> Result<ExitCode> {
    let outcome = execute(config, overrides);

    if json_output {
        let output = match &outcome {
            Ok((hash, geometry)) => ValidateOutput {
                valid: true,
                params_hash: Some(hash.clone()),
                geometry: Some(*geometry),
                errors: Vec::new(),
            },
            Err(failure) => ValidateOutput {
                valid: false,
                params_hash: None,
                geometry: None,
                errors: vec![failure.to_json()],
            },
        };
        print_json(&output)?;
    } else {
        match &outcome {
            Ok((hash, geometry)) => {
                println!("{}", "VALID".green().bold());
                println!(
                    "  {} {}x{}x{}",
                    "Volume:".dimmed(),
                    geometry.depth,
                    geometry.height,
                    geometry.width
                );
                println!(
                    "  {} {}x{} -> {} rows, crop x {}",
                    "Working canvas:".dimmed(),
                    geometry.resize_width,
                    geometry.resize_height,
                    geometry.stretch_height,
                    geometry.crop_x
                );
                println!("  {} {}", "Params hash:".dimmed(), hash);
            }
            Err(failure) => {
                println!("{} {}", "INVALID".red().bold(), failure.message);
            }
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
) -> Result<(String, TiltGeometry), Failure> {
    let params = load_params(config, overrides).map_err(|e| Failure::config(&e))?;
    let geometry = plan(&params)?;
    let hash = canonical_params_hash(&params).map_err(|e| Failure::params(e.to_string()))?;
    Ok((hash, geometry))
}
