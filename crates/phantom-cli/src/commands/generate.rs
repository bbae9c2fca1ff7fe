//! Generate command implementation
//!
//! Generates a phantom volume and exports selected depth slices as PNG.

use anyhow::Result;
use colored::Colorize;
use phantom_backend_volume::png::{write_slice, PngConfig};
use phantom_backend_volume::{default_export_slices, generate_with_report, GenerationReport};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{print_json, ExportedFile, GenerateOutput};
use super::Failure;
use crate::input::{load_params, ParamOverrides};

/// Run the generate command
///
/// # Arguments
/// * `config` - Optional path to a JSON parameter file
/// * `overrides` - Flag overrides applied on top of the file
/// * `out_dir` - Directory slices are written to
/// * `slices` - Depth indices to export (default: every 200th plus the last)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 parameter error, 2 generation or export error
pub fn run(
    config: Option<&str>,
    overrides: &ParamOverrides,
    out_dir: &str,
    slices: Option<&[u32]>,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    if !json_output {
        if let Some(path) = config {
            println!("{} {}", "Config:".cyan().bold(), path);
        }
        println!("{} {}", "Output directory:".cyan().bold(), out_dir);
    }

    let outcome = execute(config, overrides, Path::new(out_dir), slices);
    let duration_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let output = match &outcome {
            Ok((report, files)) => GenerateOutput {
                success: true,
                report: Some(report.clone()),
                files: files.clone(),
                errors: Vec::new(),
                duration_ms,
            },
            Err(failure) => GenerateOutput {
                success: false,
                report: None,
                files: Vec::new(),
                errors: vec![failure.to_json()],
                duration_ms,
            },
        };
        print_json(&output)?;
    } else {
        match &outcome {
            Ok((report, files)) => print_summary(report, files, duration_ms),
            Err(failure) => {
                println!("\n{} {}", "GENERATION FAILED".red().bold(), failure.message);
            }
        }
    }

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => failure.exit_code(),
    })
}

/// Generate and export; returns the report and the written files.
pub(crate) fn execute(
    config: Option<&str>,
    overrides: &ParamOverrides,
    out_dir: &Path,
    slices: Option<&[u32]>,
) -> Result<(GenerationReport, Vec<ExportedFile>), Failure> {
    let params = load_params(config, overrides).map_err(|e| Failure::config(&e))?;

    let slices = match slices {
        Some(list) => list.to_vec(),
        None => default_export_slices(params.depth),
    };
    if let Some(bad) = slices.iter().find(|&&i| i >= params.depth) {
        return Err(Failure::params(format!(
            "slice index {} is out of range (depth {})",
            bad, params.depth
        )));
    }

    let result = generate_with_report(&params)?;

    fs::create_dir_all(out_dir).map_err(|e| {
        Failure::export(format!(
            "failed to create output directory {}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let config = PngConfig::default();
    let mut files = Vec::with_capacity(slices.len());
    for index in slices {
        let path = out_dir.join(format!("slice_{:04}.png", index));
        write_slice(&result.volume, index, &path, &config)
            .map_err(|e| Failure::export(format!("{}: {}", path.display(), e)))?;
        log::debug!("wrote {}", path.display());
        files.push(ExportedFile {
            index,
            path: path.display().to_string(),
        });
    }

    Ok((result.report, files))
}

fn print_summary(report: &GenerationReport, files: &[ExportedFile], duration_ms: u64) {
    let [depth, height, width] = report.shape;
    println!(
        "\n{} {}x{}x{} volume (depth x height x width)",
        "SUCCESS".green().bold(),
        depth,
        height,
        width
    );
    let g = &report.geometry;
    if g.is_flat() {
        println!("  {} none", "Tilt:".dimmed());
    } else {
        println!(
            "  {} working canvas {}x{}, stretched to {} rows, crop offsets 0..={}",
            "Tilt:".dimmed(),
            g.resize_width,
            g.resize_height,
            g.stretch_height,
            g.max_offset()
        );
    }
    println!(
        "  {} {} rings around ({}, {})",
        "Rings:".dimmed(),
        report.ring_count,
        report.pivot[0],
        report.pivot[1]
    );
    println!("  {} {}", "Params hash:".dimmed(), report.params_hash);
    println!("  {} {}", "Volume hash:".dimmed(), report.volume_hash);
    for file in files {
        println!("  {} {}", "->".green(), file.path);
    }
    println!("{} {}ms", "Done in".dimmed(), duration_ms);
}
