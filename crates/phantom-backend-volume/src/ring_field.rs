//! Ring field painter.
//!
//! Paints concentric discs of alternating early and late wood around a random
//! pivot. Discs are painted from the largest radius inward, each one
//! overwriting the previous, so every pixel ends up carrying the color of the
//! smallest disc that still reaches it.

use image::GrayImage;
use log::debug;
use phantom_spec::{validate_gray_range, validate_width_range, GenerationParameters, WoodBand, WoodType};

use crate::generate::GenerateError;
use crate::rng::{DeterministicRng, RandomStream};

/// One painted ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    /// Disc radius in pixels at the time the ring was painted.
    pub radius: u32,
    /// Width drawn for this ring (the radius shrinks by this much next).
    pub width: u32,
    /// Gray level the disc was painted with.
    pub color: u8,
    /// Wood type of this ring.
    pub wood: WoodType,
}

/// A painted 2-D ring field.
#[derive(Debug, Clone)]
pub struct RingField {
    /// Pivot (center of all rings) as [x, y].
    pub pivot: [u32; 2],
    /// Rings in painting order (largest radius first).
    pub rings: Vec<Ring>,
    /// The painted image.
    pub image: GrayImage,
}

impl RingField {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Starting radius of the painting loop.
    pub fn initial_radius(&self) -> u32 {
        self.rings.first().map(|r| r.radius).unwrap_or(0)
    }
}

/// Ring field generator configuration.
#[derive(Debug, Clone, Copy)]
pub struct RingFieldGenerator {
    /// Early wood ranges.
    pub early: WoodBand,
    /// Late wood ranges.
    pub late: WoodBand,
}

impl RingFieldGenerator {
    /// Create a generator from explicit wood bands.
    pub fn new(early: WoodBand, late: WoodBand) -> Self {
        Self { early, late }
    }

    /// Create a generator using the wood bands of a parameter set.
    pub fn from_params(params: &GenerationParameters) -> Self {
        Self::new(params.band(WoodType::Early), params.band(WoodType::Late))
    }

    fn band(&self, wood: WoodType) -> &WoodBand {
        match wood {
            WoodType::Early => &self.early,
            WoodType::Late => &self.late,
        }
    }

    fn validate(&self, width: u32, height: u32) -> Result<(), GenerateError> {
        if width == 0 || height == 0 {
            return Err(GenerateError::InvalidParameter(format!(
                "ring field must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        validate_width_range("early_wood_width_range", self.early.width_range)?;
        validate_gray_range("early_wood_gray_range", self.early.gray_range)?;
        validate_width_range("late_wood_width_range", self.late.width_range)?;
        validate_gray_range("late_wood_gray_range", self.late.gray_range)?;
        Ok(())
    }

    /// Paint a ring field seeded with `seed`.
    pub fn generate(&self, seed: u32, width: u32, height: u32) -> Result<RingField, GenerateError> {
        let mut rng = DeterministicRng::new(seed);
        self.generate_with(&mut rng, width, height)
    }

    /// Paint a ring field drawing from an arbitrary random stream.
    pub fn generate_with<R: RandomStream>(
        &self,
        rng: &mut R,
        width: u32,
        height: u32,
    ) -> Result<RingField, GenerateError> {
        self.validate(width, height)?;

        let cx = rng.below(width) as i64;
        let cy = rng.below(height) as i64;
        let mut wood = if rng.coin() {
            WoodType::Early
        } else {
            WoodType::Late
        };

        let w = width as i64;
        let h = height as i64;
        // sqrt((w + h)^2) is exactly w + h; the margin keeps the outermost
        // disc larger than any pivot-to-corner distance.
        let mut ring_size = w + h;

        let mut image = GrayImage::new(width, height);
        let mut rings = Vec::new();

        while ring_size > 0 {
            let band = self.band(wood);
            let ring_width = rng.inclusive(band.width_range[0], band.width_range[1]);
            let ring_color = rng.inclusive(band.gray_range[0], band.gray_range[1]) as u8;

            paint_disc(&mut image, cx, cy, ring_size, ring_color);
            rings.push(Ring {
                radius: ring_size as u32,
                width: ring_width,
                color: ring_color,
                wood,
            });

            ring_size -= ring_width as i64;
            wood = wood.flip();
        }

        debug!(
            "ring field {}x{}: pivot ({}, {}), {} rings",
            width,
            height,
            cx,
            cy,
            rings.len()
        );

        Ok(RingField {
            pivot: [cx as u32, cy as u32],
            rings,
            image,
        })
    }
}

/// Paint a ring field with explicit wood bands.
pub fn generate_ring_field(
    seed: u32,
    width: u32,
    height: u32,
    early: WoodBand,
    late: WoodBand,
) -> Result<RingField, GenerateError> {
    RingFieldGenerator::new(early, late).generate(seed, width, height)
}

/// Fill every pixel within `radius` of `(cx, cy)` with `color`.
///
/// The scanned box is `[c - r, c + r)` on both axes, clipped to the canvas.
fn paint_disc(image: &mut GrayImage, cx: i64, cy: i64, radius: i64, color: u8) {
    let w = image.width() as i64;
    let h = image.height() as i64;

    let x_min = (cx - radius).max(0);
    let x_max = (cx + radius).min(w);
    let y_min = (cy - radius).max(0);
    let y_max = (cy + radius).min(h);
    let r2 = radius * radius;

    let buf: &mut [u8] = image;
    for y in y_min..y_max {
        let dy = y - cy;
        let dy2 = dy * dy;
        if dy2 > r2 {
            continue;
        }
        let row = (y * w) as usize;
        for x in x_min..x_max {
            let dx = x - cx;
            if dx * dx + dy2 <= r2 {
                buf[row + x as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_generator() -> RingFieldGenerator {
        RingFieldGenerator::from_params(&GenerationParameters::default())
    }

    #[test]
    fn test_paint_disc_includes_radius_boundary() {
        let mut image = GrayImage::new(9, 9);
        paint_disc(&mut image, 4, 4, 2, 9);

        assert_eq!(image.get_pixel(4, 4)[0], 9);
        assert_eq!(image.get_pixel(2, 4)[0], 9);
        assert_eq!(image.get_pixel(4, 2)[0], 9);
        // Exclusive upper bound of the box: (4 + 2, 4) is never visited.
        assert_eq!(image.get_pixel(6, 4)[0], 0);
        // Outside the disc.
        assert_eq!(image.get_pixel(2, 2)[0], 0);
    }

    #[test]
    fn test_paint_disc_clips_to_canvas() {
        let mut image = GrayImage::new(4, 3);
        paint_disc(&mut image, 0, 0, 100, 7);
        assert!(image.pixels().all(|p| p[0] == 7));
    }

    #[test]
    fn test_initial_radius_is_width_plus_height() {
        let field = default_generator().generate(3, 40, 25).unwrap();
        assert_eq!(field.initial_radius(), 65);
        assert_eq!(field.width(), 40);
        assert_eq!(field.height(), 25);
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let result = default_generator().generate(0, 0, 10);
        assert!(matches!(result, Err(GenerateError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_width_band_rejected() {
        let params = GenerationParameters::default().with_early_wood([0, 3], [175, 200]);
        let result = RingFieldGenerator::from_params(&params).generate(0, 10, 10);
        assert!(matches!(result, Err(GenerateError::InvalidParameter(_))));
    }

    #[test]
    fn test_single_pixel_canvas() {
        let field = default_generator().generate(5, 1, 1).unwrap();
        assert_eq!(field.pivot, [0, 0]);
        let last = field.rings.last().unwrap();
        assert_eq!(field.image.get_pixel(0, 0)[0], last.color);
    }
}
