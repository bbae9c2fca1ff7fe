//! The generated volume and its slicing contract.

use std::fmt;
use std::str::FromStr;

use image::GrayImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from volume construction and slicing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VolumeError {
    #[error("{axis} index {index} is out of range (extent {extent})")]
    IndexOutOfRange {
        axis: SliceAxis,
        index: u32,
        extent: u32,
    },

    #[error("expected {expected} bytes for a {depth}x{height}x{width} volume, got {actual}")]
    ShapeMismatch {
        depth: u32,
        height: u32,
        width: u32,
        expected: usize,
        actual: usize,
    },

    #[error("unknown slice axis: {0} (expected axial, coronal, or sagittal)")]
    UnknownAxis(String),
}

/// The three orthogonal slicing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceAxis {
    /// Front to back: fixes a depth index, yields a `height x width` image.
    Axial,
    /// Top to bottom: fixes a row, yields a `depth x width` image.
    Coronal,
    /// Left to right: fixes a column, yields a `depth x height` image.
    Sagittal,
}

impl SliceAxis {
    /// All axes in viewer order.
    pub const ALL: [SliceAxis; 3] = [SliceAxis::Axial, SliceAxis::Coronal, SliceAxis::Sagittal];

    /// Lowercase axis name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SliceAxis::Axial => "axial",
            SliceAxis::Coronal => "coronal",
            SliceAxis::Sagittal => "sagittal",
        }
    }
}

impl fmt::Display for SliceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliceAxis {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "axial" => Ok(SliceAxis::Axial),
            "coronal" => Ok(SliceAxis::Coronal),
            "sagittal" => Ok(SliceAxis::Sagittal),
            _ => Err(VolumeError::UnknownAxis(s.to_string())),
        }
    }
}

/// A `depth x height x width` block of 8-bit intensities, indexed
/// `(slice, row, column)` and stored slice-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Volume {
    depth: u32,
    height: u32,
    width: u32,
    data: Vec<u8>,
}

impl fmt::Debug for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Volume")
            .field("depth", &self.depth)
            .field("height", &self.height)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl Volume {
    /// Wrap raw slice-major bytes.
    pub fn from_raw(depth: u32, height: u32, width: u32, data: Vec<u8>) -> Result<Self, VolumeError> {
        let expected = depth as usize * height as usize * width as usize;
        if data.len() != expected {
            return Err(VolumeError::ShapeMismatch {
                depth,
                height,
                width,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            depth,
            height,
            width,
            data,
        })
    }

    /// Wrap bytes already assembled to exactly `depth * height * width`.
    pub(crate) fn from_slices(depth: u32, height: u32, width: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            depth as usize * height as usize * width as usize
        );
        Self {
            depth,
            height,
            width,
            data,
        }
    }

    /// Stack `depth` copies of one slice.
    pub fn repeat_slice(slice: &GrayImage, depth: u32) -> Self {
        let (width, height) = slice.dimensions();
        let raw = slice.as_raw();
        let mut data = Vec::with_capacity(raw.len() * depth as usize);
        for _ in 0..depth {
            data.extend_from_slice(raw);
        }
        Self {
            depth,
            height,
            width,
            data,
        }
    }

    /// Shape as `(depth, rows, columns)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.depth as usize, self.height as usize, self.width as usize)
    }

    /// Number of slices.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Rows per slice.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Columns per slice.
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn slice_len(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Voxel at `(slice, row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is outside the volume. Use [`Volume::section`] for
    /// a checked read.
    #[inline]
    pub fn get(&self, z: u32, y: u32, x: u32) -> u8 {
        assert!(
            z < self.depth && y < self.height && x < self.width,
            "voxel ({}, {}, {}) is outside a {}x{}x{} volume",
            z,
            y,
            x,
            self.depth,
            self.height,
            self.width
        );
        let idx = z as usize * self.slice_len() + y as usize * self.width as usize + x as usize;
        self.data[idx]
    }

    /// Raw row-major bytes of one depth slice.
    pub fn slice(&self, z: u32) -> Result<&[u8], VolumeError> {
        if z >= self.depth {
            return Err(VolumeError::IndexOutOfRange {
                axis: SliceAxis::Axial,
                index: z,
                extent: self.depth,
            });
        }
        let len = self.slice_len();
        let start = z as usize * len;
        Ok(&self.data[start..start + len])
    }

    /// All voxels, slice-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the volume and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Number of valid indices along `axis`.
    pub fn extent(&self, axis: SliceAxis) -> u32 {
        match axis {
            SliceAxis::Axial => self.depth,
            SliceAxis::Coronal => self.height,
            SliceAxis::Sagittal => self.width,
        }
    }

    /// Render the 2-D section at `index` along `axis`.
    pub fn section(&self, axis: SliceAxis, index: u32) -> Result<GrayImage, VolumeError> {
        let extent = self.extent(axis);
        if index >= extent {
            return Err(VolumeError::IndexOutOfRange {
                axis,
                index,
                extent,
            });
        }

        let (w, h, bytes) = match axis {
            SliceAxis::Axial => (self.width, self.height, self.slice(index)?.to_vec()),
            SliceAxis::Coronal => {
                let mut bytes = Vec::with_capacity(self.depth as usize * self.width as usize);
                let row_start = index as usize * self.width as usize;
                for z in 0..self.depth as usize {
                    let start = z * self.slice_len() + row_start;
                    bytes.extend_from_slice(&self.data[start..start + self.width as usize]);
                }
                (self.width, self.depth, bytes)
            }
            SliceAxis::Sagittal => {
                let mut bytes = Vec::with_capacity(self.depth as usize * self.height as usize);
                for z in 0..self.depth {
                    for y in 0..self.height {
                        bytes.push(self.get(z, y, index));
                    }
                }
                (self.height, self.depth, bytes)
            }
        };

        let actual = bytes.len();
        GrayImage::from_raw(w, h, bytes).ok_or(VolumeError::ShapeMismatch {
            depth: 1,
            height: h,
            width: w,
            expected: w as usize * h as usize,
            actual,
        })
    }

    /// BLAKE3 hash of the shape and voxel data.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.depth.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.data);
        hasher.finalize().to_hex().to_string()
    }
}
