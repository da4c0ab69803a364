//! Plain-text PPM (P3) export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::map::Map;

/// Errors that can occur during PPM export.
#[derive(Error, Debug)]
pub enum PpmExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exports the map as a plain-text PPM image.
///
/// The header is the `P3` format tag, the dimensions, and the maximum
/// channel value, followed by one "R G B" triple per pixel in row-major
/// order (see <http://netpbm.sourceforge.net/doc/ppm.html>).
pub fn export_map_ppm(map: &Map, path: &Path) -> Result<(), PpmExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", map.width(), map.height())?;
    writeln!(writer, "255")?;
    for (_, tile) in map.tiles() {
        let [r, g, b] = tile.color();
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;

    #[test]
    fn ppm_has_header_and_one_line_per_pixel() {
        let map = Map::generate(8, 8, 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.ppm");
        export_map_ppm(&map, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "8 8");
        assert_eq!(lines[2], "255");
        assert_eq!(lines.len(), 3 + 64);
        for line in &lines[3..] {
            let channels: Vec<u32> = line
                .split_whitespace()
                .map(|c| c.parse().unwrap())
                .collect();
            assert_eq!(channels.len(), 3);
            assert!(channels.iter().all(|&c| c <= 255));
        }
    }
}
