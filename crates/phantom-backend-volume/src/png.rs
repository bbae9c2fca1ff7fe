//! Deterministic PNG writer for volume slices.
//!
//! Uses fixed compression settings so the same slice always encodes to the
//! same bytes.

use std::io::Write;
use std::path::Path;

use image::GrayImage;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::volume::{SliceAxis, Volume, VolumeError};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Volume error: {0}")]
    Volume(#[from] VolumeError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for speed.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a grayscale image to a PNG file.
pub fn write_grayscale(image: &GrayImage, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_grayscale_to_writer(image, writer, config)
}

/// Write a grayscale image to any writer.
pub fn write_grayscale_to_writer<W: Write>(
    image: &GrayImage,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_raw())?;

    Ok(())
}

/// Write depth slice `index` of a volume to a PNG file.
pub fn write_slice(
    volume: &Volume,
    index: u32,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_section(volume, SliceAxis::Axial, index, path, config)
}

/// Write the section at `index` along `axis` to a PNG file.
pub fn write_section(
    volume: &Volume,
    axis: SliceAxis,
    index: u32,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let section = volume.section(axis, index)?;
    write_grayscale(&section, path, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a Vec<u8> and return the hash.
pub fn write_grayscale_to_vec_with_hash(
    image: &GrayImage,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(image, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
