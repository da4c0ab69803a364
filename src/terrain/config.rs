//! Classification thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the terrain decision rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Base height below which a cell can be water.
    pub water_level: f32,
    /// Height band around the water level that reads as coast.
    pub coast_threshold: f32,
    /// Fault intensity above which otherwise-flat land reads as mountain.
    pub mountain_fault_threshold: f32,
    /// Ruggedness above which land reads as mountain.
    pub mountain_hill_threshold: f32,
    /// Combined ruggedness + fault above which land reads as hill.
    pub hill_threshold: f32,
    /// Scales the altitude at which terrain ices over toward the poles.
    pub ice_altitude_factor: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            water_level: 0.025,
            coast_threshold: 0.02,
            mountain_fault_threshold: 0.08,
            mountain_hill_threshold: 0.4,
            hill_threshold: 0.19,
            ice_altitude_factor: 1.0,
        }
    }
}
