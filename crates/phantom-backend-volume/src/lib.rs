//! Wood Phantom Volume Generation Backend
//!
//! This crate synthesizes 3-D greyscale volumes that look like the ring
//! pattern of a wood log, for use as test data in imaging pipelines. All
//! output is byte-identical given the same seed and parameters.
//!
//! # Pipeline
//!
//! 1. **Tilt geometry** ([`tilt`]): derive the working canvas from the
//!    resolution, depth, and grain tilt.
//! 2. **Ring field** ([`ring_field`]): paint alternating early and late wood
//!    discs around a random pivot on the working canvas.
//! 3. **Extrusion** ([`extrude`]): repeat the field along depth, or stretch it
//!    ([`resample`]) and slide a crop window down it for tilted grain.
//!
//! The resulting [`Volume`] can be sliced along any axis ([`volume`],
//! [`viewer`]) and exported slice by slice as PNG ([`png`]).
//!
//! # Example
//!
//! ```
//! use phantom_backend_volume::{generate_with_report, SliceAxis};
//! use phantom_spec::GenerationParameters;
//!
//! let params = GenerationParameters::default()
//!     .with_seed(3)
//!     .with_resolution(48, 32)
//!     .with_depth(16)
//!     .with_rotation_degrees(10.0);
//!
//! let result = generate_with_report(&params).unwrap();
//! assert_eq!(result.volume.shape(), (16, 32, 48));
//!
//! let side = result.volume.section(SliceAxis::Sagittal, 0).unwrap();
//! assert_eq!(side.dimensions(), (32, 16));
//! ```
//!
//! # Determinism
//!
//! - Same parameters + same seed = byte-identical volume
//! - PCG32 RNG is used for all random draws, in a fixed order
//! - PNG encoding uses fixed compression settings

pub mod extrude;
pub mod generate;
pub mod png;
pub mod resample;
pub mod ring_field;
pub mod rng;
pub mod tilt;
pub mod viewer;
pub mod volume;

// Re-export main types for convenience
pub use extrude::{extrude, extrude_with_geometry};
pub use generate::{
    default_export_slices, generate, generate_with_report, plan, GenerateError,
    GenerationReport, GenerationResult,
};
pub use png::{PngConfig, PngError};
pub use ring_field::{generate_ring_field, Ring, RingField, RingFieldGenerator};
pub use rng::{DeterministicRng, RandomStream};
pub use tilt::TiltGeometry;
pub use viewer::SliceCursor;
pub use volume::{SliceAxis, Volume, VolumeError};
