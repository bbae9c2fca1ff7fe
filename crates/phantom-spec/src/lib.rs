//! Wood Phantom Parameter Library
//!
//! This crate provides the parameter types, validation, and canonical hashing
//! for wood phantom generation. Parameters are plain JSON documents; every
//! field has a documented default so a config file only needs to name the
//! values it changes.
//!
//! # Example
//!
//! ```
//! use phantom_spec::{GenerationParameters, validate_params, canonical_params_hash};
//!
//! let params = GenerationParameters::default()
//!     .with_seed(7)
//!     .with_resolution(128, 96)
//!     .with_depth(64)
//!     .with_rotation_degrees(5.0);
//!
//! assert!(validate_params(&params).is_ok());
//!
//! let hash = canonical_params_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`params`]: Generation parameters and their defaults
//! - [`validation`]: Static parameter validation
//! - [`hash`]: Canonical parameter hashing
//! - [`error`]: Error types

pub mod error;
pub mod hash;
pub mod params;
pub mod validation;

pub use error::ParamsError;
pub use hash::canonical_params_hash;
pub use params::{GenerationParameters, WoodBand, WoodType};
pub use validation::{
    validate_depth, validate_gray_range, validate_params, validate_resolution,
    validate_rotation, validate_width_range, MAX_DEPTH, MAX_DIMENSION, MAX_ROTATION_DEGREES,
    MAX_VOLUME_BYTES,
};
