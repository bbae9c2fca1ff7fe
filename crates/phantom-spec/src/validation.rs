//! Static parameter validation.
//!
//! These checks need only the parameters themselves. Tilt geometry that can
//! only be judged after deriving the working canvas is checked by the
//! generation backend.

use crate::error::ParamsError;
use crate::params::GenerationParameters;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 4096;
/// Largest accepted number of depth slices.
pub const MAX_DEPTH: u32 = 8192;
/// Largest accepted output volume, in bytes (one byte per voxel).
pub const MAX_VOLUME_BYTES: u64 = 1 << 31;
/// Tilt magnitude must stay strictly below this.
pub const MAX_ROTATION_DEGREES: f64 = 90.0;

/// Validate that resolution is positive and bounded.
///
/// # Example
/// ```
/// use phantom_spec::validate_resolution;
///
/// assert!(validate_resolution(400, 300).is_ok());
/// assert!(validate_resolution(0, 300).is_err());
/// ```
pub fn validate_resolution(width: u32, height: u32) -> Result<(), ParamsError> {
    if width == 0 || height == 0 {
        return Err(ParamsError::invalid(
            "resolution",
            format!("must be at least 1x1, got [{}, {}]", width, height),
        ));
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ParamsError::invalid(
            "resolution",
            format!(
                "is too large: max is {}x{}, got [{}, {}]",
                MAX_DIMENSION, MAX_DIMENSION, width, height
            ),
        ));
    }

    Ok(())
}

/// Validate the slice count.
pub fn validate_depth(depth: u32) -> Result<(), ParamsError> {
    if depth == 0 {
        return Err(ParamsError::invalid("depth", "must be at least 1, got 0"));
    }
    if depth > MAX_DEPTH {
        return Err(ParamsError::invalid(
            "depth",
            format!("is too large: max is {}, got {}", MAX_DEPTH, depth),
        ));
    }
    Ok(())
}

/// Validate an inclusive ring width range.
///
/// Widths must be at least one pixel so the ring loop always shrinks.
///
/// # Example
/// ```
/// use phantom_spec::validate_width_range;
///
/// assert!(validate_width_range("early_wood_width_range", [3, 6]).is_ok());
/// assert!(validate_width_range("early_wood_width_range", [0, 6]).is_err());
/// assert!(validate_width_range("early_wood_width_range", [6, 3]).is_err());
/// ```
pub fn validate_width_range(name: &str, range: [u32; 2]) -> Result<(), ParamsError> {
    let [min, max] = range;
    if min == 0 {
        return Err(ParamsError::invalid(
            name,
            format!("minimum width must be at least 1, got [{}, {}]", min, max),
        ));
    }
    if min > max {
        return Err(ParamsError::invalid(
            name,
            format!("must have min <= max, got [{}, {}]", min, max),
        ));
    }
    Ok(())
}

/// Validate an inclusive gray level range.
pub fn validate_gray_range(name: &str, range: [u32; 2]) -> Result<(), ParamsError> {
    let [min, max] = range;
    if max > u8::MAX as u32 {
        return Err(ParamsError::invalid(
            name,
            format!("gray levels must be in [0, 255], got [{}, {}]", min, max),
        ));
    }
    if min > max {
        return Err(ParamsError::invalid(
            name,
            format!("must have min <= max, got [{}, {}]", min, max),
        ));
    }
    Ok(())
}

/// Validate the tilt angle.
pub fn validate_rotation(degrees: f64) -> Result<(), ParamsError> {
    if !degrees.is_finite() {
        return Err(ParamsError::invalid(
            "rotation_degrees",
            format!("must be finite, got {}", degrees),
        ));
    }
    if degrees.abs() >= MAX_ROTATION_DEGREES {
        return Err(ParamsError::invalid(
            "rotation_degrees",
            format!(
                "must be in (-{0}, {0}), got {1}",
                MAX_ROTATION_DEGREES, degrees
            ),
        ));
    }
    Ok(())
}

/// Validate all parameters that can be judged without deriving tilt geometry.
///
/// # Returns
/// * `Ok(())` if every field is valid
/// * `Err(ParamsError)` for the first invalid field
pub fn validate_params(params: &GenerationParameters) -> Result<(), ParamsError> {
    validate_resolution(params.width(), params.height())?;
    validate_depth(params.depth)?;
    validate_width_range("early_wood_width_range", params.early_wood_width_range)?;
    validate_gray_range("early_wood_gray_range", params.early_wood_gray_range)?;
    validate_width_range("late_wood_width_range", params.late_wood_width_range)?;
    validate_gray_range("late_wood_gray_range", params.late_wood_gray_range)?;
    validate_rotation(params.rotation_degrees)?;

    let voxels = params.width() as u64 * params.height() as u64 * params.depth as u64;
    if voxels > MAX_VOLUME_BYTES {
        return Err(ParamsError::invalid(
            "depth",
            format!(
                "volume is too large: max is {} voxels, got {}",
                MAX_VOLUME_BYTES, voxels
            ),
        ));
    }

    Ok(())
}
