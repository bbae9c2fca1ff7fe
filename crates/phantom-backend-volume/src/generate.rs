//! Main entry point for phantom generation.
//!
//! Validates parameters, derives the tilt geometry, paints the ring field at
//! the working size, and extrudes it into the final volume.

use log::info;
use serde::Serialize;
use thiserror::Error;

use phantom_spec::{canonical_params_hash, validate_params, GenerationParameters, ParamsError};

use crate::extrude::extrude_with_geometry;
use crate::ring_field::RingFieldGenerator;
use crate::tilt::TiltGeometry;
use crate::volume::Volume;

/// Errors from phantom generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resampling failed: {0}")]
    Resampling(String),
}

impl From<ParamsError> for GenerateError {
    fn from(err: ParamsError) -> Self {
        GenerateError::InvalidParameter(err.to_string())
    }
}

/// Summary of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Canonical BLAKE3 hash of the parameters.
    pub params_hash: String,
    /// BLAKE3 hash of the volume shape and voxels.
    pub volume_hash: String,
    /// Volume shape as [depth, height, width].
    pub shape: [u32; 3],
    /// Working canvas and crop window.
    pub geometry: TiltGeometry,
    /// Crop offset of the last slice (the first is always 0).
    pub max_offset: u32,
    /// Ring pivot on the working canvas as [x, y].
    pub pivot: [u32; 2],
    /// Number of rings painted.
    pub ring_count: usize,
    /// Radius of the outermost ring.
    pub initial_radius: u32,
}

/// Result of a generation call with its report.
#[derive(Debug)]
pub struct GenerationResult {
    /// The generated volume.
    pub volume: Volume,
    /// What was generated.
    pub report: GenerationReport,
}

/// Validate parameters and derive the tilt geometry without generating.
pub fn plan(params: &GenerationParameters) -> Result<TiltGeometry, GenerateError> {
    validate_params(params)?;
    TiltGeometry::derive(
        params.width(),
        params.height(),
        params.depth,
        params.rotation_degrees,
    )
}

/// Generate a wood phantom volume.
///
/// # Example
///
/// ```
/// use phantom_backend_volume::generate;
/// use phantom_spec::GenerationParameters;
///
/// let params = GenerationParameters::default()
///     .with_resolution(32, 24)
///     .with_depth(8);
/// let volume = generate(&params).unwrap();
/// assert_eq!(volume.shape(), (8, 24, 32));
/// ```
pub fn generate(params: &GenerationParameters) -> Result<Volume, GenerateError> {
    generate_with_report(params).map(|result| result.volume)
}

/// Generate a wood phantom volume and a report describing it.
pub fn generate_with_report(
    params: &GenerationParameters,
) -> Result<GenerationResult, GenerateError> {
    let geometry = plan(params)?;

    let field = RingFieldGenerator::from_params(params).generate(
        params.seed,
        geometry.resize_width,
        geometry.resize_height,
    )?;
    let volume = extrude_with_geometry(&field.image, &geometry)?;

    let report = GenerationReport {
        params_hash: canonical_params_hash(params)?,
        volume_hash: volume.content_hash(),
        shape: [volume.depth(), volume.height(), volume.width()],
        geometry,
        max_offset: geometry.max_offset(),
        pivot: field.pivot,
        ring_count: field.rings.len(),
        initial_radius: field.initial_radius(),
    };

    info!(
        "generated {}x{}x{} phantom (seed {}, rotation {} deg, {} rings)",
        report.shape[0],
        report.shape[1],
        report.shape[2],
        params.seed,
        params.rotation_degrees,
        report.ring_count
    );

    Ok(GenerationResult { volume, report })
}

/// Slices exported when the caller names none: every 200th slice plus the
/// last one.
pub fn default_export_slices(depth: u32) -> Vec<u32> {
    if depth == 0 {
        return Vec::new();
    }
    let mut slices: Vec<u32> = (0..depth).step_by(200).collect();
    if slices.last() != Some(&(depth - 1)) {
        slices.push(depth - 1);
    }
    slices
}
