//! Defaults command implementation
//!
//! Prints the default parameter file, a starting point for `--config`.

use anyhow::Result;
use phantom_spec::GenerationParameters;
use std::process::ExitCode;

use super::json_output::print_json;

/// Run the defaults command
pub fn run() -> Result<ExitCode> {
    print_json(&GenerationParameters::default())?;
    Ok(ExitCode::SUCCESS)
}
