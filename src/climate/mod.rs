//! Latitude geometry, prevailing winds, and the rainfall simulation.

mod config;
mod rainfall;
mod wind;

pub use config::RainfallConfig;
pub use rainfall::simulate_rainfall;
pub use wind::{equator_distance, prevailing_wind, WindLines};
