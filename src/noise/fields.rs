//! The layered noise fields that drive per-tile terrain attributes.

use serde::{Deserialize, Serialize};

use crate::climate::equator_distance;

use super::{sample_tileable_fbm, FractalNoiseConfig};

/// Configuration for the four terrain noise fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Land-mass field producing the raw land/ocean height.
    pub land: FractalNoiseConfig,
    /// Low-frequency field whose ridge transform marks tectonic faults.
    pub fault: FractalNoiseConfig,
    /// Higher-frequency field that erodes the fault ridges jagged.
    pub erosion: FractalNoiseConfig,
    /// Mid-frequency field giving per-tile hilliness.
    pub hill: FractalNoiseConfig,
    /// Land-mass boost near the equatorial band.
    pub equatorial_multiplier: f32,
    /// Lower bound of the fault ridge band that survives log compression.
    pub fault_threshold: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            land: FractalNoiseConfig {
                octaves: 12,
                scale: 1.5,
                lacunarity: 2.0,
                persistence: 0.5,
                seed_offset: 0,
            },
            fault: FractalNoiseConfig {
                octaves: 5,
                scale: 3.5,
                lacunarity: 2.0,
                persistence: 0.5,
                seed_offset: 10,
            },
            erosion: FractalNoiseConfig {
                octaves: 8,
                scale: 10.0,
                lacunarity: 2.0,
                persistence: 0.85,
                seed_offset: 0,
            },
            hill: FractalNoiseConfig {
                octaves: 8,
                scale: 5.0,
                lacunarity: 2.0,
                persistence: 0.9,
                seed_offset: 0,
            },
            equatorial_multiplier: 2.5,
            fault_threshold: 0.95,
        }
    }
}

/// Evaluates the seeded noise fields for one map.
///
/// All methods are pure and deterministic for a given (x, y, seed) tuple:
/// replicated lookups through the map's wrap/mirror addressing never need to
/// recompute noise, but would get identical values if they did.
#[derive(Debug, Clone)]
pub struct NoiseFields {
    width: f32,
    height: f32,
    seed: i32,
    config: NoiseConfig,
}

impl NoiseFields {
    pub fn new(width: u32, height: u32, seed: i32, config: NoiseConfig) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            seed,
            config,
        }
    }

    /// Raw land/ocean height: one fractal sample boosted toward the
    /// equatorial band and suppressed toward the poles. The result is not
    /// renormalized to [-1, 1] after the bias.
    pub fn base_height(&self, x: u32, y: u32) -> f32 {
        let h = sample_tileable_fbm(x as f32, y as f32, self.width, self.seed, &self.config.land);
        let eq = equator_distance(y as f32, self.height);
        let m = self.config.equatorial_multiplier;
        (h + h * (10.0 * (1.01 - eq)).log10() * m) / (m + 1.0)
    }

    /// Tectonic-fault intensity: the ridge transform of a low-frequency
    /// field, log-compressed to a narrow ridge band and multiplied by a
    /// higher-frequency erosion field so faults come out jagged rather than
    /// smooth.
    pub fn fault_level(&self, x: u32, y: u32) -> f32 {
        let (xf, yf) = (x as f32, y as f32);
        let ridge =
            1.0 - sample_tileable_fbm(xf, yf, self.width, self.seed, &self.config.fault).abs();
        let band = ((ridge - self.config.fault_threshold)
            / (1.0 - self.config.fault_threshold))
            .max(0.0);
        let eroded = ridge
            * sample_tileable_fbm(xf, yf, self.width, self.seed, &self.config.erosion).abs();
        eroded * (band * 9.0 + 1.0).log10()
    }

    /// Hilliness in [0, 1]. The amplitude-normalized sample can overshoot
    /// slightly, so the magnitude is capped; the moisture accumulator's
    /// `1 - ruggedness` term relies on the bound.
    pub fn hilliness(&self, x: u32, y: u32) -> f32 {
        sample_tileable_fbm(x as f32, y as f32, self.width, self.seed, &self.config.hill)
            .abs()
            .min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> NoiseFields {
        NoiseFields::new(32, 32, 5, NoiseConfig::default())
    }

    #[test]
    fn attributes_are_deterministic() {
        let f = fields();
        assert_eq!(f.base_height(3, 4), f.base_height(3, 4));
        assert_eq!(f.fault_level(3, 4), f.fault_level(3, 4));
        assert_eq!(f.hilliness(3, 4), f.hilliness(3, 4));
    }

    #[test]
    fn hilliness_stays_in_unit_range() {
        let f = fields();
        for y in 0..32 {
            for x in 0..32 {
                let h = f.hilliness(x, y);
                assert!((0.0..=1.0).contains(&h));
            }
        }
    }

    #[test]
    fn fault_level_is_finite() {
        let f = fields();
        for y in 0..32 {
            for x in 0..32 {
                assert!(f.fault_level(x, y).is_finite());
            }
        }
    }

    #[test]
    fn base_height_is_finite_across_latitudes() {
        // The log bias shrinks toward the poles but must never hit log(0):
        // equator_distance tops out at 1 and the argument bottoms out at 0.1.
        let f = fields();
        for y in 0..32 {
            assert!(f.base_height(10, y).is_finite());
        }
    }
}
