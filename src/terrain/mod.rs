//! Terrain categories, per-cell tiles, and the classification rule.

mod config;

pub use config::TerrainConfig;

use serde::{Deserialize, Serialize};

/// Terrain category. `as_str()` is stable and used for label export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Ocean,
    Coast,
    Plain,
    Hill,
    Mountain,
    Ice,
}

impl Terrain {
    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Ocean => "ocean",
            Terrain::Coast => "coast",
            Terrain::Plain => "plain",
            Terrain::Hill => "hill",
            Terrain::Mountain => "mountain",
            Terrain::Ice => "ice",
        }
    }

    /// Base RGB before rainfall shading.
    pub fn base_rgb(self) -> [u8; 3] {
        match self {
            Terrain::Ocean => [0, 0, 150],
            Terrain::Coast => [64, 64, 255],
            Terrain::Plain => [32, 150, 64],
            Terrain::Hill => [100, 100, 0],
            Terrain::Mountain => [150, 150, 180],
            Terrain::Ice => [220, 220, 255],
        }
    }
}

/// One grid cell's derived attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Closeness to the poles, 0 at the equator.
    pub equator_distance: f32,
    /// Raw land/ocean height, no fault or hill contribution.
    pub base_height: f32,
    /// Tectonic-fault intensity.
    pub fault: f32,
    /// `base_height + fault * 0.5`.
    pub elevation: f32,
    /// Hilliness in [0, 1].
    pub ruggedness: f32,
    pub is_land: bool,
    /// Written exactly once, by the rainfall pass.
    pub rainfall: f32,
    pub terrain: Terrain,
}

impl Tile {
    /// Builds a tile from its raw noise attributes.
    ///
    /// Classification happens eagerly here: it depends only on attributes
    /// that are final at construction time, so computing it up front is
    /// equivalent to the compute-on-first-read cache and removes the
    /// ordering subtlety between the attribute and rainfall passes.
    pub fn new(
        equator_distance: f32,
        base_height: f32,
        fault: f32,
        ruggedness: f32,
        config: &TerrainConfig,
    ) -> Self {
        let elevation = base_height + fault * 0.5;
        let is_land = base_height >= config.water_level
            || elevation >= config.water_level + config.coast_threshold;
        let terrain = classify(
            equator_distance,
            base_height,
            fault,
            elevation,
            ruggedness,
            config,
        );
        Self {
            equator_distance,
            base_height,
            fault,
            elevation,
            ruggedness,
            is_land,
            rainfall: 0.0,
            terrain,
        }
    }

    /// Terrain color shaded by rainfall: each channel is reduced by the
    /// tile's rainfall scalar and clamped to the valid channel range.
    pub fn color(&self) -> [u8; 3] {
        self.terrain
            .base_rgb()
            .map(|c| (c as f32 - self.rainfall).clamp(0.0, 255.0) as u8)
    }
}

/// The terrain decision rule. First match wins; total over all inputs.
pub fn classify(
    equator_distance: f32,
    base_height: f32,
    fault: f32,
    elevation: f32,
    ruggedness: f32,
    config: &TerrainConfig,
) -> Terrain {
    let alt = elevation;
    if alt + alt * ruggedness > (1.0 - equator_distance) * config.ice_altitude_factor {
        return Terrain::Ice;
    }
    if base_height < config.water_level && alt < config.water_level + config.coast_threshold {
        if config.water_level - base_height > config.coast_threshold {
            Terrain::Ocean
        } else {
            Terrain::Coast
        }
    } else if ruggedness > config.mountain_hill_threshold {
        Terrain::Mountain
    } else if ruggedness + fault > config.hill_threshold && ruggedness > fault {
        Terrain::Hill
    } else if fault > config.mountain_fault_threshold {
        Terrain::Mountain
    } else {
        Terrain::Plain
    }
}
