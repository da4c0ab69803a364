//! Latitude-banded prevailing wind model.

use std::collections::HashMap;

use glam::{IVec2, Vec2};

use crate::map::trace_line;

/// Closeness to the poles: 0 at the equator (mid-height), 1 at both poles.
pub fn equator_distance(y: f32, height: f32) -> f32 {
    (height - y * 2.0).abs() / height
}

/// Unit wind vector for a row.
///
/// The wind angle is `-equator_distance * 2π`, rotating smoothly with
/// latitude. Deliberately simplified: bands rotate with latitude rather than
/// forming discrete Coriolis cells.
pub fn prevailing_wind(y: f32, height: f32) -> Vec2 {
    let angle = -equator_distance(y, height) * std::f32::consts::TAU;
    Vec2::new(angle.cos(), angle.sin())
}

/// Per-row cache of rasterized upwind paths.
///
/// Wind direction depends only on the row, so the traced line is computed
/// once per row and memoized.
pub struct WindLines {
    height: f32,
    reach_tiles: f32,
    lines: HashMap<i64, Vec<IVec2>>,
}

impl WindLines {
    /// `reach_tiles` is the upwind reach already converted to whole tiles.
    pub fn new(height: u32, reach_tiles: f32) -> Self {
        Self {
            height: height as f32,
            reach_tiles,
            lines: HashMap::new(),
        }
    }

    /// Ordered offsets walking upwind from a sample on row `y`, starting at
    /// the origin.
    pub fn for_row(&mut self, y: i64) -> &[IVec2] {
        let height = self.height;
        let reach = self.reach_tiles;
        self.lines.entry(y).or_insert_with(|| {
            let wind = prevailing_wind(y as f32, height);
            trace_line(wind.x * -reach, wind.y * -reach)
        })
    }
}
