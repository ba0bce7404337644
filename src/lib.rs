pub mod climate;
pub mod config;
pub mod error;
pub mod field;
pub mod geology;
pub mod grid;
pub mod noise;
pub mod render;
pub mod rng;
pub mod terrain;

use std::time::Instant;

use config::Params;

pub use climate::Climate;
pub use error::TerrainError;
pub use geology::Geology;
pub use terrain::{Cell, Terrain, build_grid, cell_at, climate_of, geology_of};

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Build a terrain and record how long each stage took.
pub fn generate(
    seed: u64,
    w: i32,
    h: i32,
    params: &Params,
) -> Result<(Terrain, Vec<Timing>), TerrainError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let terrain = Terrain::build(seed, w, h, params)?;
    timings.push(Timing {
        name: "fields",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    let climates = terrain.climate_histogram();
    let deposits = terrain.geology_histogram();
    timings.push(Timing {
        name: "classify",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });
    for (c, n) in climates.iter().filter(|(_, n)| *n > 0) {
        log::debug!("{:28} {n}", c.name());
    }
    for (g, n) in deposits.iter().filter(|(_, n)| *n > 0) {
        log::debug!("{:28} {n}", g.name());
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });

    Ok((terrain, timings))
}
