//! `cube-life` - seed a grid from an IPv4 address, evolve it, and export
//! the live cells as a Wavefront OBJ cube mesh.
//!
//! **Usage:**
//! ```text
//! cube-life <ADDRESS> [--size N] [--generations N] [--threads N] [--out DIR]
//! ```
//!
//! Writes `<DIR>/<ADDRESS>.obj` and `<DIR>/<ADDRESS>.mtl`. Set `RUST_LOG=debug`
//! for per-generation live counts.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cube_life::config::DEFAULT_GENERATIONS;
use cube_life::seed::SEED_GRID_SIZE;
use cube_life::{Address, LifeConfig, Material, ObjExporter, SceneSink, Simulation};

/// Evolve an IPv4 address into a cube mesh.
#[derive(Parser)]
#[command(name = "cube-life", about = "Evolve an IPv4 address into a cube mesh")]
struct Args {
    /// Seed address in dotted form, e.g. 10.0.0.1.
    address: String,

    /// Side length of the cubic grid.
    #[arg(long, default_value_t = SEED_GRID_SIZE)]
    size: i16,

    /// Number of generations to run.
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u32,

    /// Step on a thread pool of this many workers.
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory for the OBJ and MTL files.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let address: Address = args
        .address
        .parse()
        .with_context(|| format!("Invalid address: {}", args.address))?;

    let mut config = LifeConfig::default()
        .size(args.size)
        .generations(args.generations);
    if let Some(threads) = args.threads {
        config = config.threads(threads);
    }

    let sim = Simulation::run(address, &config).context("Simulation failed")?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory: {}", args.out.display()))?;

    let name = address.to_string();
    let mut exporter = ObjExporter::new(&args.out);
    exporter.add_object(&name, &sim.mesh, Material::from_address(&address))?;
    let path = exporter.render(&name)?;

    println!(
        "{}: {} live cells, {} points, {} faces -> {}",
        name,
        sim.grid.live_count(),
        sim.mesh.points.len(),
        sim.mesh.faces.len(),
        path.display()
    );

    Ok(())
}
