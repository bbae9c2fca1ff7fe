//! Wood phantom CLI library.
//!
//! This crate provides the parameter loading and command implementations
//! behind the `phantom` binary.

pub mod commands;
pub mod input;
