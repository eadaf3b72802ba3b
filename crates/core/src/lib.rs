//! Core sampling logic for dataset subsetting
//!
//! This crate provides the uniform without-replacement draw and the
//! run-scoped random source it consumes.

pub mod rng;
pub mod sample;

pub use rng::rng_from_seed;
pub use sample::sample;
