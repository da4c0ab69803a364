//! Wind-traced moisture accumulation and blocky rainfall painting.

use glam::IVec2;

use crate::map::Map;
use crate::terrain::Terrain;

use super::wind::WindLines;
use super::RainfallConfig;

/// Runs the rainfall pass over a fully attributed map.
///
/// Samples a sparse lattice spaced `kernel_radius` tiles apart in both axes.
/// For each land sample, the prevailing-wind line for its row is walked
/// upwind to gather moisture and downwind (for a fixed step budget) to pick
/// up orographic lift, then `rain_factor * moisture` is painted onto the
/// `2 * kernel_radius` square block centered on the sample. Blocks from later
/// samples overwrite overlapping blocks from earlier ones and are not
/// blended; the blockiness at low kernel resolution is a property of the
/// design.
///
/// Returns the maximum rainfall produced, as a diagnostic.
pub fn simulate_rainfall(map: &mut Map, config: &RainfallConfig) -> f32 {
    let width = map.width() as i64;
    let height = map.height() as i64;
    let reach_tiles = (config.moisture_reach * map.width() as f32).round();
    let influence_tiles = (config.rainfall_influence * map.width() as f32).round() as i32;
    let radius = config.kernel_radius.max(1) as i64;

    let mut lines = WindLines::new(map.height(), reach_tiles);
    let mut max_rainfall = 0.0f32;

    let mut y = 0i64;
    while y < height {
        let line = lines.for_row(y).to_vec();
        let mut x = 0i64;
        while x < width {
            if map.tile(x, y).is_land {
                let rainfall = sample_rainfall(map, x, y, &line, influence_tiles, config);
                max_rainfall = max_rainfall.max(rainfall);
                // Last writer wins over any earlier overlapping block.
                for ty in (y - radius)..(y + radius) {
                    for tx in (x - radius)..(x + radius) {
                        map.tile_mut(tx, ty).rainfall = rainfall;
                    }
                }
            }
            x += radius;
        }
        y += radius;
    }

    max_rainfall
}

/// Walks one sample's wind line and returns its rainfall value.
///
/// The walk starts at the first step away from the sample; the sample tile
/// itself never feeds its own scan. The upwind scan stops irreversibly at the
/// first mountain; the downwind scan runs on its fixed budget regardless.
/// Once the budget is spent and the upwind path is blocked there is nothing
/// left to accumulate.
fn sample_rainfall(
    map: &Map,
    x: i64,
    y: i64,
    line: &[IVec2],
    influence_tiles: i32,
    config: &RainfallConfig,
) -> f32 {
    let mut clear_line = true;
    let mut moisture = 0.0f32;
    let mut rain_factor = config.base_rain_factor;
    let mut reach = influence_tiles;

    // line[0] is the zero offset, i.e. the sample itself.
    for offset in &line[1..] {
        let (wx, wy) = (offset.x as i64, offset.y as i64);
        if clear_line {
            let upwind = map.tile(x + wx, y + wy);
            match upwind.terrain {
                Terrain::Ocean | Terrain::Coast => moisture += 1.0,
                Terrain::Mountain => clear_line = false,
                Terrain::Ice => moisture *= config.ice_moisture_factor,
                _ => {
                    moisture += (1.0 - upwind.equator_distance) * (1.0 - upwind.ruggedness);
                }
            }
        }
        if reach != 0 {
            match map.tile(x - wx, y - wy).terrain {
                Terrain::Hill => rain_factor += config.hill_factor,
                Terrain::Mountain => rain_factor += config.mountain_factor,
                _ => {}
            }
            reach -= 1;
        } else if !clear_line {
            break;
        }
    }

    rain_factor * moisture
}
