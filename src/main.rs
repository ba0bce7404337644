use std::path::{Path, PathBuf};

use anyhow::Context;
use biomegen::config::Params;
use biomegen::field::Field;
use biomegen::render;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(317955);
    let width: i32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1024);
    let height: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1024);
    let out_dir: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));
    let params = match args.get(5) {
        Some(path) => Params::load(Path::new(path))?,
        None => Params::default(),
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    log::info!("generating {width}x{height} terrain with seed={seed}");

    let (terrain, timings) = biomegen::generate(seed, width, height, &params)?;

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    let cells = terrain.cells().len() as f64;
    eprintln!("\nClimate:");
    for (c, n) in terrain.climate_histogram() {
        eprintln!("  {:28} {:6.2}%", c.name(), 100.0 * n as f64 / cells);
    }
    eprintln!("\nGeology:");
    for (g, n) in terrain.geology_histogram() {
        eprintln!("  {:28} {:6.2}%", g.name(), 100.0 * n as f64 / cells);
    }

    let (w, h) = (terrain.width() as u32, terrain.height() as u32);
    let save = |name: &str, rgba: &[u8]| -> anyhow::Result<()> {
        let path = out_dir.join(name);
        image::save_buffer(&path, rgba, w, h, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save {}", path.display()))?;
        log::info!("saved {}", path.display());
        Ok(())
    };

    save("climate.png", &render::render_climate(&terrain))?;
    save("geology.png", &render::render_geology(&terrain))?;
    for field in Field::ALL {
        save(&format!("{}.png", field.name()), &render::render_field(&terrain, field))?;
    }

    eprintln!("\nDone.");
    Ok(())
}
