//! Rainfall simulation parameters.

use serde::{Deserialize, Serialize};

/// Configuration for the rainfall pass.
///
/// Reach values are fractions of the map width and are converted to whole
/// tiles at simulation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainfallConfig {
    /// How far upwind moisture is gathered, as a fraction of map width.
    pub moisture_reach: f32,
    /// Length of the downwind orographic scan, as a fraction of map width.
    pub rainfall_influence: f32,
    /// Rain-factor increment per downwind hill tile.
    pub hill_factor: f32,
    /// Rain-factor increment per downwind mountain tile.
    pub mountain_factor: f32,
    /// Rain factor before any orographic increments.
    pub base_rain_factor: f32,
    /// Fraction of accumulated moisture kept when the upwind path crosses
    /// ice.
    pub ice_moisture_factor: f32,
    /// Sample lattice spacing and paint-block half-width, in tiles.
    pub kernel_radius: u32,
}

impl Default for RainfallConfig {
    fn default() -> Self {
        // Tuned for believable output on roughly square maps, not physical
        // realism.
        Self {
            moisture_reach: 0.1,
            rainfall_influence: 0.03,
            hill_factor: 0.03,
            mountain_factor: 0.1,
            base_rain_factor: 0.5,
            ice_moisture_factor: 0.25,
            kernel_radius: 3,
        }
    }
}
