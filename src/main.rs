//! Terramap CLI - deterministic terrain map generator.
//!
//! Generate a terrain map from a seed and export it as a PNG image, a
//! plain-text PPM image, or a JSON array of terrain labels.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use terramap::export::{export_map_labels, export_map_png, export_map_ppm, PngExportOptions};
use terramap::{Map, MapConfig, Terrain};

/// Deterministic procedural terrain map generator.
#[derive(Parser)]
#[command(name = "terramap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain map and export it.
    Generate {
        /// Map width in tiles.
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Map height in tiles.
        #[arg(long, default_value = "1024")]
        height: u32,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<i32>,

        /// Output file path.
        #[arg(short, long, default_value = "./map.png")]
        output: PathBuf,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,

        /// Rainfall sample spacing and paint half-width, in tiles.
        #[arg(long, default_value = "3")]
        kernel_radius: u32,

        /// Upwind moisture reach as a fraction of map width.
        #[arg(long, default_value = "0.1")]
        moisture_reach: f32,

        /// Base height below which a cell can be water.
        #[arg(long, default_value = "0.025")]
        water_level: f32,
    },

    /// Generate a map and print terrain statistics instead of an image.
    Info {
        /// Map width in tiles.
        #[arg(long, default_value = "256")]
        width: u32,

        /// Map height in tiles.
        #[arg(long, default_value = "256")]
        height: u32,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<i32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// RGB PNG image.
    Png,
    /// Plain-text PPM (P3) image.
    Ppm,
    /// 2-D JSON array of terrain labels.
    Labels,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            seed,
            output,
            format,
            kernel_radius,
            moisture_reach,
            water_level,
        } => {
            run_generate(
                width,
                height,
                seed,
                output,
                format,
                kernel_radius,
                moisture_reach,
                water_level,
            );
        }
        Commands::Info {
            width,
            height,
            seed,
        } => {
            run_info(width, height, seed);
        }
    }
}

fn run_generate(
    width: u32,
    height: u32,
    seed: Option<i32>,
    output: PathBuf,
    format: ExportFormat,
    kernel_radius: u32,
    moisture_reach: f32,
    water_level: f32,
) {
    if !(8..=8192).contains(&width) || !(8..=8192).contains(&height) {
        eprintln!("Error: Width and height must be between 8 and 8192");
        std::process::exit(1);
    }

    if kernel_radius == 0 || kernel_radius > width.min(height) / 2 {
        eprintln!("Error: Kernel radius must be between 1 and half the smaller map dimension");
        std::process::exit(1);
    }

    if !(0.0..=0.5).contains(&moisture_reach) {
        eprintln!("Error: Moisture reach must be between 0.0 and 0.5");
        std::process::exit(1);
    }

    let seed = seed.unwrap_or_else(fallback_seed);

    println!("Terramap - Procedural Terrain Generator");
    println!("=======================================");
    println!("Size: {}x{} tiles", width, height);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    let mut config = MapConfig::default();
    config.rainfall.kernel_radius = kernel_radius;
    config.rainfall.moisture_reach = moisture_reach;
    config.terrain.water_level = water_level;

    println!("\nGenerating map...");
    let start = Instant::now();
    let map = Map::generate_with(width, height, seed, &config);
    println!(
        "Generation finished in {:.2}s (max rainfall {:.2})",
        start.elapsed().as_secs_f32(),
        map.max_rainfall
    );

    let export_start = Instant::now();
    let result = match format {
        ExportFormat::Png => export_map_png(&map, &output, &PngExportOptions::default())
            .map_err(|e| e.to_string()),
        ExportFormat::Ppm => export_map_ppm(&map, &output).map_err(|e| e.to_string()),
        ExportFormat::Labels => export_map_labels(&map, &output).map_err(|e| e.to_string()),
    };
    if let Err(e) = result {
        eprintln!("Error: Export failed: {}", e);
        std::process::exit(1);
    }
    println!(
        "Exported {} in {:.2}s",
        output.display(),
        export_start.elapsed().as_secs_f32()
    );
}

fn run_info(width: u32, height: u32, seed: Option<i32>) {
    let seed = seed.unwrap_or_else(fallback_seed);

    println!("Terramap - Map Info");
    println!("===================");
    println!("Size: {}x{} tiles", width, height);
    println!("Seed: {}", seed);

    let start = Instant::now();
    let map = Map::generate(width, height, seed);
    println!("Generated in {:.2}s\n", start.elapsed().as_secs_f32());

    let labels = [
        Terrain::Ocean,
        Terrain::Coast,
        Terrain::Plain,
        Terrain::Hill,
        Terrain::Mountain,
        Terrain::Ice,
    ];
    let total = (width as u64 * height as u64) as f64;
    for label in labels {
        let count = map.tiles().filter(|(_, t)| t.terrain == label).count();
        println!(
            "{:>9}: {:>8} tiles ({:.1}%)",
            label.as_str(),
            count,
            count as f64 / total * 100.0
        );
    }
    println!("\nMax rainfall: {:.2}", map.max_rainfall);
}

/// Seed from the wall clock when none was given.
fn fallback_seed() -> i32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i32)
        .unwrap_or(0)
}
