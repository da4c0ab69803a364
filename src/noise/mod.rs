//! Noise generation module for terrain synthesis.
//!
//! Uses simdnoise for SIMD-accelerated simplex noise.

mod fields;
mod fractal;

pub use fields::{NoiseConfig, NoiseFields};
pub use fractal::{sample_tileable_fbm, FractalNoiseConfig};
