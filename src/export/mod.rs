//! Map export writers.
//!
//! The core exposes only a per-tile terrain label and shaded color; these
//! writers turn those into files.

mod labels;
mod png;
mod ppm;

pub use labels::{export_map_labels, LabelExportError};
pub use png::{export_map_png, PngExportError, PngExportOptions};
pub use ppm::{export_map_ppm, PpmExportError};
