//! Tilt geometry.
//!
//! A tilted phantom is cut from an oversized ring field. The field is painted
//! at a working size, stretched vertically, and each depth slice takes a
//! window that slides down the stretched canvas by `offset(i)` rows.
//!
//! ```text
//! b              = height + tan(theta) * depth
//! d              = cos(theta) * b
//! resize_width   = floor(d / height * width)
//! resize_height  = floor(d)
//! stretch_height = floor(b)
//! offset(i)      = floor(i * (stretch_height - height) / depth)
//! ```

use serde::Serialize;

use crate::generate::GenerateError;

/// Largest working canvas side accepted after the tilt derivation.
pub const MAX_WORKING_DIMENSION: u32 = 16384;

/// Working canvas and crop window for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TiltGeometry {
    /// Final slice width.
    pub width: u32,
    /// Final slice height.
    pub height: u32,
    /// Number of slices.
    pub depth: u32,
    /// Width the ring field is painted at.
    pub resize_width: u32,
    /// Height the ring field is painted at.
    pub resize_height: u32,
    /// Height the ring field is stretched to before cropping.
    pub stretch_height: u32,
    /// First column of the crop window.
    pub crop_x: u32,
}

impl TiltGeometry {
    /// Geometry for an untilted volume: the working canvas is the final slice.
    pub fn flat(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
            resize_width: width,
            resize_height: height,
            stretch_height: height,
            crop_x: 0,
        }
    }

    /// Derive the working canvas for a tilt of `rotation_degrees`.
    ///
    /// Returns [`TiltGeometry::flat`] for a zero angle. Angles whose stretched
    /// canvas would be shorter than the crop, or whose working width is
    /// narrower than the crop, are rejected as invalid parameters.
    pub fn derive(
        width: u32,
        height: u32,
        depth: u32,
        rotation_degrees: f64,
    ) -> Result<Self, GenerateError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(GenerateError::InvalidParameter(format!(
                "volume must be at least 1x1x1, got {}x{}x{}",
                width, height, depth
            )));
        }
        if !rotation_degrees.is_finite() {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation_degrees must be finite, got {}",
                rotation_degrees
            )));
        }
        if rotation_degrees == 0.0 {
            return Ok(Self::flat(width, height, depth));
        }

        let theta = rotation_degrees.to_radians();
        let b = height as f64 + theta.tan() * depth as f64;
        let d = theta.cos() * b;

        let stretch_height = b.floor();
        let resize_height = d.floor();
        let resize_width = (d / height as f64 * width as f64).floor();

        if !(stretch_height.is_finite() && resize_height.is_finite() && resize_width.is_finite()) {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation of {} degrees gives a non-finite working canvas",
                rotation_degrees
            )));
        }
        if stretch_height < height as f64 {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation of {} degrees stretches the canvas to {} rows, \
                 shorter than the crop height {}",
                rotation_degrees, stretch_height, height
            )));
        }
        if resize_height < 1.0 {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation of {} degrees gives an empty working canvas",
                rotation_degrees
            )));
        }
        if resize_width < width as f64 {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation of {} degrees gives a working width of {}, \
                 narrower than the crop width {}",
                rotation_degrees, resize_width, width
            )));
        }
        let limit = MAX_WORKING_DIMENSION as f64;
        if resize_width > limit || stretch_height > limit {
            return Err(GenerateError::InvalidParameter(format!(
                "rotation of {} degrees needs a {}x{} working canvas, max is {}x{}",
                rotation_degrees, resize_width, stretch_height, MAX_WORKING_DIMENSION,
                MAX_WORKING_DIMENSION
            )));
        }

        let resize_width = resize_width as u32;
        Ok(Self {
            width,
            height,
            depth,
            resize_width,
            resize_height: resize_height as u32,
            stretch_height: stretch_height as u32,
            crop_x: resize_width / 2 - width / 2,
        })
    }

    /// Whether slices are plain copies of the ring field.
    pub fn is_flat(&self) -> bool {
        self.stretch_height == self.height && self.resize_width == self.width
    }

    /// First row of the crop window for `slice`.
    #[inline]
    pub fn offset(&self, slice: u32) -> u32 {
        let travel = (self.stretch_height - self.height) as u64;
        (slice as u64 * travel / self.depth as u64) as u32
    }

    /// Offset of the last slice.
    pub fn max_offset(&self) -> u32 {
        self.offset(self.depth - 1)
    }

    /// Rows the crop window travels across the whole depth.
    pub fn travel(&self) -> u32 {
        self.stretch_height - self.height
    }
}
