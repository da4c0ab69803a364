//! Terrain label export as structured text.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::map::Map;

/// Errors that can occur during label export.
#[derive(Error, Debug)]
pub enum LabelExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exports the terrain classification as a 2-D JSON array of label strings,
/// one inner array per map row.
pub fn export_map_labels(map: &Map, path: &Path) -> Result<(), LabelExportError> {
    let mut rows: Vec<Vec<&str>> =
        vec![Vec::with_capacity(map.width() as usize); map.height() as usize];
    for ((_, y), tile) in map.tiles() {
        rows[y as usize].push(tile.terrain.as_str());
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, &rows)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;

    #[test]
    fn labels_round_trip_through_json() {
        let map = Map::generate(8, 6, 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        export_map_labels(&map, &path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let rows: Vec<Vec<String>> = serde_json::from_reader(file).unwrap();
        assert_eq!(rows.len(), 6);
        let known = ["ocean", "coast", "plain", "hill", "mountain", "ice"];
        for row in &rows {
            assert_eq!(row.len(), 8);
            for label in row {
                assert!(known.contains(&label.as_str()), "unknown label {label}");
            }
        }
    }
}
