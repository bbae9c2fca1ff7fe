//! Generation parameters for the wood phantom.

use serde::{Deserialize, Serialize};

/// Default cross-section resolution [width, height].
pub const DEFAULT_RESOLUTION: [u32; 2] = [400, 400];
/// Default number of depth slices.
pub const DEFAULT_DEPTH: u32 = 1000;
/// Default early wood ring width range (pixels, inclusive).
pub const DEFAULT_EARLY_WOOD_WIDTH_RANGE: [u32; 2] = [3, 6];
/// Default early wood gray range (inclusive).
pub const DEFAULT_EARLY_WOOD_GRAY_RANGE: [u32; 2] = [175, 200];
/// Default late wood ring width range (pixels, inclusive).
pub const DEFAULT_LATE_WOOD_WIDTH_RANGE: [u32; 2] = [3, 6];
/// Default late wood gray range (inclusive).
pub const DEFAULT_LATE_WOOD_GRAY_RANGE: [u32; 2] = [50, 75];

/// Parameters for one wood phantom volume.
///
/// Identical parameters (seed included) always produce a bit-identical
/// volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationParameters {
    /// Seed for the pseudo-random stream.
    #[serde(default)]
    pub seed: u32,
    /// Final cross-section resolution [width, height] in pixels.
    #[serde(default = "default_resolution")]
    pub resolution: [u32; 2],
    /// Number of slices along the depth axis.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Early wood ring width range [min, max] in pixels.
    #[serde(default = "default_early_wood_width_range")]
    pub early_wood_width_range: [u32; 2],
    /// Early wood gray level range [min, max] (0 to 255).
    #[serde(default = "default_early_wood_gray_range")]
    pub early_wood_gray_range: [u32; 2],
    /// Late wood ring width range [min, max] in pixels.
    #[serde(default = "default_late_wood_width_range")]
    pub late_wood_width_range: [u32; 2],
    /// Late wood gray level range [min, max] (0 to 255).
    #[serde(default = "default_late_wood_gray_range")]
    pub late_wood_gray_range: [u32; 2],
    /// Grain tilt relative to the depth axis, in degrees. Zero disables tilt.
    #[serde(default)]
    pub rotation_degrees: f64,
}

fn default_resolution() -> [u32; 2] {
    DEFAULT_RESOLUTION
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_early_wood_width_range() -> [u32; 2] {
    DEFAULT_EARLY_WOOD_WIDTH_RANGE
}

fn default_early_wood_gray_range() -> [u32; 2] {
    DEFAULT_EARLY_WOOD_GRAY_RANGE
}

fn default_late_wood_width_range() -> [u32; 2] {
    DEFAULT_LATE_WOOD_WIDTH_RANGE
}

fn default_late_wood_gray_range() -> [u32; 2] {
    DEFAULT_LATE_WOOD_GRAY_RANGE
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            seed: 0,
            resolution: DEFAULT_RESOLUTION,
            depth: DEFAULT_DEPTH,
            early_wood_width_range: DEFAULT_EARLY_WOOD_WIDTH_RANGE,
            early_wood_gray_range: DEFAULT_EARLY_WOOD_GRAY_RANGE,
            late_wood_width_range: DEFAULT_LATE_WOOD_WIDTH_RANGE,
            late_wood_gray_range: DEFAULT_LATE_WOOD_GRAY_RANGE,
            rotation_degrees: 0.0,
        }
    }
}

impl GenerationParameters {
    /// Set the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the final cross-section resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = [width, height];
        self
    }

    /// Set the number of depth slices.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the early wood width and gray ranges.
    pub fn with_early_wood(mut self, width_range: [u32; 2], gray_range: [u32; 2]) -> Self {
        self.early_wood_width_range = width_range;
        self.early_wood_gray_range = gray_range;
        self
    }

    /// Set the late wood width and gray ranges.
    pub fn with_late_wood(mut self, width_range: [u32; 2], gray_range: [u32; 2]) -> Self {
        self.late_wood_width_range = width_range;
        self.late_wood_gray_range = gray_range;
        self
    }

    /// Set the grain tilt in degrees.
    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Final cross-section width in pixels.
    pub fn width(&self) -> u32 {
        self.resolution[0]
    }

    /// Final cross-section height in pixels.
    pub fn height(&self) -> u32 {
        self.resolution[1]
    }

    /// Ring width and gray ranges for a wood type.
    pub fn band(&self, wood: WoodType) -> WoodBand {
        match wood {
            WoodType::Early => WoodBand {
                width_range: self.early_wood_width_range,
                gray_range: self.early_wood_gray_range,
            },
            WoodType::Late => WoodBand {
                width_range: self.late_wood_width_range,
                gray_range: self.late_wood_gray_range,
            },
        }
    }

    /// Smallest ring width either wood type can draw.
    pub fn min_ring_width(&self) -> u32 {
        self.early_wood_width_range[0].min(self.late_wood_width_range[0])
    }
}

/// The two alternating wood types of an annual ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodType {
    /// Light, wide-celled wood grown early in the season.
    Early,
    /// Dark, dense wood grown late in the season.
    Late,
}

impl WoodType {
    /// The other wood type.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            WoodType::Early => WoodType::Late,
            WoodType::Late => WoodType::Early,
        }
    }
}

/// Inclusive width and gray ranges for one wood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoodBand {
    /// Ring width range [min, max] in pixels.
    pub width_range: [u32; 2],
    /// Gray level range [min, max].
    pub gray_range: [u32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_documented_constants() {
        let params = GenerationParameters::default();
        assert_eq!(params.seed, 0);
        assert_eq!(params.resolution, [400, 400]);
        assert_eq!(params.depth, 1000);
        assert_eq!(params.early_wood_width_range, [3, 6]);
        assert_eq!(params.early_wood_gray_range, [175, 200]);
        assert_eq!(params.late_wood_width_range, [3, 6]);
        assert_eq!(params.late_wood_gray_range, [50, 75]);
        assert_eq!(params.rotation_degrees, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: GenerationParameters =
            serde_json::from_str(r#"{"seed": 3, "rotation_degrees": 20.0}"#).unwrap();
        assert_eq!(
            params,
            GenerationParameters::default()
                .with_seed(3)
                .with_rotation_degrees(20.0)
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<GenerationParameters, _> =
            serde_json::from_str(r#"{"seed": 3, "rot_deg": 20.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let params = GenerationParameters::default()
            .with_seed(11)
            .with_resolution(64, 32)
            .with_late_wood([2, 4], [10, 20]);
        let json = serde_json::to_string(&params).unwrap();
        let parsed: GenerationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_band_selects_wood_type() {
        let params = GenerationParameters::default()
            .with_early_wood([1, 2], [200, 210])
            .with_late_wood([5, 9], [10, 20]);

        assert_eq!(
            params.band(WoodType::Early),
            WoodBand {
                width_range: [1, 2],
                gray_range: [200, 210],
            }
        );
        assert_eq!(params.band(WoodType::Late).width_range, [5, 9]);
        assert_eq!(params.min_ring_width(), 1);
    }

    #[test]
    fn test_wood_type_flip_alternates() {
        assert_eq!(WoodType::Early.flip(), WoodType::Late);
        assert_eq!(WoodType::Late.flip(), WoodType::Early);
        assert_eq!(WoodType::Early.flip().flip(), WoodType::Early);
    }
}
