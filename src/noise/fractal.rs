//! Multi-octave fractal Brownian motion (fBm) noise, tileable in x.

use serde::{Deserialize, Serialize};
use simdnoise::NoiseBuilder;

/// Configuration for one multi-octave fractal noise field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalNoiseConfig {
    /// Number of noise octaves.
    pub octaves: u8,
    /// Spatial frequency of the field: one map width spans `scale` units of
    /// noise space.
    pub scale: f32,
    /// Frequency multiplier per octave (typically 2.0).
    pub lacunarity: f32,
    /// Amplitude decay per octave.
    pub persistence: f32,
    /// Added to the map seed, so fields sharing a base seed stay independent.
    pub seed_offset: i32,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 6,
            scale: 2.0,
            lacunarity: 2.0,
            persistence: 0.5,
            seed_offset: 0,
        }
    }
}

/// simdnoise's raw 3-D simplex output spans roughly [-0.022, 0.022], not
/// [-1, 1]. Every downstream threshold (water level, hill and mountain
/// cutoffs, the fault band) assumes a unit-range field, so each octave
/// sample is rescaled by this measured amplitude before weighting.
const RAW_SIMPLEX_AMPLITUDE: f32 = 0.022;

/// Samples fractal noise at a map cell, periodic in x with period `width`.
///
/// The (x, y) cell coordinate is wrapped onto a cylinder whose circumference
/// is `scale` units of noise space, then sampled with 3D simplex noise.
/// Noise at `x` and `x + width` therefore agrees, which makes the map's
/// horizontal wrap numerically consistent, not just index-consistent.
///
/// # Returns
/// A noise value in approximately [-1, 1] (normalized by amplitude sum).
pub fn sample_tileable_fbm(
    x: f32,
    y: f32,
    width: f32,
    seed: i32,
    config: &FractalNoiseConfig,
) -> f32 {
    let angle = std::f32::consts::TAU * (x / width).rem_euclid(1.0);
    let radius = config.scale / std::f32::consts::TAU;
    let px = radius * angle.cos();
    let py = radius * angle.sin();
    let pz = y * config.scale / width;

    let mut total = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;
    let mut max_amplitude = 0.0f32;

    for octave in 0..config.octaves {
        // Each octave gets its own seed so the bands decorrelate.
        let octave_seed = seed
            .wrapping_add(config.seed_offset)
            .wrapping_add(octave as i32 * 31337);

        let value = NoiseBuilder::fbm_3d_offset(
            px * frequency,
            1,
            py * frequency,
            1,
            pz * frequency,
            1,
        )
        .with_seed(octave_seed)
        .with_freq(1.0)
        .with_octaves(1)
        .generate()
        .0[0]
            / RAW_SIMPLEX_AMPLITUDE;

        total += value * amplitude;
        max_amplitude += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    total / max_amplitude
}
