//! Parameter loading.
//!
//! Parameters come from an optional JSON config file, then individual
//! command-line flags override whatever the file set.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use phantom_spec::GenerationParameters;

/// Command-line overrides for generation parameters.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamOverrides {
    /// Seed for the random stream
    #[arg(long)]
    pub seed: Option<u32>,

    /// Cross-section width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Cross-section height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of depth slices
    #[arg(long)]
    pub depth: Option<u32>,

    /// Early wood ring width range, as MIN,MAX
    #[arg(long, value_parser = parse_range)]
    pub early_width: Option<[u32; 2]>,

    /// Early wood gray range, as MIN,MAX
    #[arg(long, value_parser = parse_range)]
    pub early_gray: Option<[u32; 2]>,

    /// Late wood ring width range, as MIN,MAX
    #[arg(long, value_parser = parse_range)]
    pub late_width: Option<[u32; 2]>,

    /// Late wood gray range, as MIN,MAX
    #[arg(long, value_parser = parse_range)]
    pub late_gray: Option<[u32; 2]>,

    /// Grain tilt in degrees (0 disables tilt)
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,
}

impl ParamOverrides {
    /// Apply every set override to `params`.
    pub fn apply(&self, mut params: GenerationParameters) -> GenerationParameters {
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(width) = self.width {
            params.resolution[0] = width;
        }
        if let Some(height) = self.height {
            params.resolution[1] = height;
        }
        if let Some(depth) = self.depth {
            params.depth = depth;
        }
        if let Some(range) = self.early_width {
            params.early_wood_width_range = range;
        }
        if let Some(range) = self.early_gray {
            params.early_wood_gray_range = range;
        }
        if let Some(range) = self.late_width {
            params.late_wood_width_range = range;
        }
        if let Some(range) = self.late_gray {
            params.late_wood_gray_range = range;
        }
        if let Some(rotation) = self.rotation {
            params.rotation_degrees = rotation;
        }
        params
    }
}

/// Parse an inclusive range written as `MIN,MAX`.
pub fn parse_range(s: &str) -> Result<[u32; 2], String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", s))?;
    let min = min
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid minimum '{}': {}", min.trim(), e))?;
    let max = max
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid maximum '{}': {}", max.trim(), e))?;
    Ok([min, max])
}

/// Read parameters from a JSON config file.
pub fn read_params_file(path: &Path) -> Result<GenerationParameters> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let params = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(params)
}

/// Load parameters from an optional config file and apply overrides.
pub fn load_params(
    config: Option<&str>,
    overrides: &ParamOverrides,
) -> Result<GenerationParameters> {
    let base = match config {
        Some(path) => read_params_file(Path::new(path))?,
        None => GenerationParameters::default(),
    };
    let params = overrides.apply(base);
    log::debug!("resolved parameters: {:?}", params);
    Ok(params)
}
