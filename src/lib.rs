//! Deterministic procedural terrain map generator.
//!
//! Given a grid size and a seed, this crate derives per-cell geophysical
//! attributes (elevation, fault intensity, ruggedness) from layered coherent
//! noise, classifies each cell into a terrain category, and simulates a
//! simplified atmospheric-moisture/rainfall field by tracing prevailing-wind
//! paths across the grid. The map is a torus horizontally and reflects
//! vertically at the poles.

pub mod climate;
pub mod export;
pub mod map;
pub mod noise;
pub mod terrain;

pub use climate::{equator_distance, prevailing_wind, RainfallConfig};
pub use map::{trace_line, Map, MapConfig, MapError};
pub use noise::{FractalNoiseConfig, NoiseConfig, NoiseFields};
pub use terrain::{Terrain, TerrainConfig, Tile};
