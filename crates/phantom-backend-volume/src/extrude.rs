//! Volumetric extrusion of a ring field.
//!
//! Without tilt the ring field is repeated along depth. With tilt the field is
//! stretched to `stretch_height` rows and each slice is a `height x width`
//! window whose top row slides down by `offset(i)`.

use image::GrayImage;
use log::{debug, warn};

use crate::generate::GenerateError;
use crate::resample::stretch_rows;
use crate::tilt::TiltGeometry;
use crate::volume::Volume;

/// Extrude a ring field into a volume.
///
/// `field` must have the working size the tilt derivation asks for:
/// `resolution` itself without tilt, `(resize_width, resize_height)` with it.
pub fn extrude(
    field: &GrayImage,
    resolution: [u32; 2],
    depth: u32,
    rotation_degrees: f64,
) -> Result<Volume, GenerateError> {
    let geometry = TiltGeometry::derive(resolution[0], resolution[1], depth, rotation_degrees)?;
    extrude_with_geometry(field, &geometry)
}

/// Extrude a ring field using an already derived geometry.
pub fn extrude_with_geometry(
    field: &GrayImage,
    geometry: &TiltGeometry,
) -> Result<Volume, GenerateError> {
    let expected = (geometry.resize_width, geometry.resize_height);
    if field.dimensions() != expected {
        return Err(GenerateError::InvalidParameter(format!(
            "ring field is {}x{}, expected a {}x{} working canvas",
            field.width(),
            field.height(),
            expected.0,
            expected.1
        )));
    }

    if geometry.is_flat() {
        return Ok(Volume::repeat_slice(field, geometry.depth));
    }

    if geometry.travel() > geometry.depth {
        warn!(
            "tilt moves the crop window {} rows over {} slices; consecutive slices will skip rows",
            geometry.travel(),
            geometry.depth
        );
    }

    // stretch_rows returns exactly stretch_height rows, and derive keeps
    // max_offset + height within that.
    let stretched = stretch_rows(field, geometry.stretch_height)?;

    debug!(
        "extruding {} slices from a {}x{} canvas, crop x {}..{}, offsets 0..={}",
        geometry.depth,
        stretched.width(),
        stretched.height(),
        geometry.crop_x,
        geometry.crop_x + geometry.width,
        geometry.max_offset()
    );

    let stride = stretched.width() as usize;
    let width = geometry.width as usize;
    let x0 = geometry.crop_x as usize;
    let raw = stretched.as_raw();

    let mut data =
        Vec::with_capacity(geometry.depth as usize * geometry.height as usize * width);
    for slice in 0..geometry.depth {
        let top = geometry.offset(slice) as usize;
        for row in top..top + geometry.height as usize {
            let start = row * stride + x0;
            data.extend_from_slice(&raw[start..start + width]);
        }
    }

    Ok(Volume::from_slices(
        geometry.depth,
        geometry.height,
        geometry.width,
        data,
    ))
}
