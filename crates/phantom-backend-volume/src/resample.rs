//! Vertical stretch of the working ring field.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::generate::GenerateError;

/// Interpolation used for the tilt stretch.
pub const STRETCH_FILTER: FilterType = FilterType::CatmullRom;

/// Stretch `field` to `target_height` rows, keeping its width.
///
/// Fails with [`GenerateError::Resampling`] if the filter does not return a
/// canvas of exactly the requested size.
pub fn stretch_rows(field: &GrayImage, target_height: u32) -> Result<GrayImage, GenerateError> {
    if target_height == 0 {
        return Err(GenerateError::Resampling(
            "cannot stretch to zero rows".to_string(),
        ));
    }
    if target_height == field.height() {
        return Ok(field.clone());
    }

    let stretched = imageops::resize(field, field.width(), target_height, STRETCH_FILTER);
    if stretched.dimensions() != (field.width(), target_height) {
        return Err(GenerateError::Resampling(format!(
            "expected a {}x{} canvas, got {}x{}",
            field.width(),
            target_height,
            stretched.width(),
            stretched.height()
        )));
    }
    Ok(stretched)
}
