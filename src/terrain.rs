use rayon::prelude::*;
use serde::Serialize;

use crate::climate::Climate;
use crate::config::Params;
use crate::error::TerrainError;
use crate::field::{Field, sample_coords, synthesize};
use crate::geology::Geology;
use crate::grid::Grid;
use crate::noise::GradientNoise;
use crate::rng::Rng;

/// Generated scalars of one grid position, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Cell {
    pub elevation: f32,
    pub moisture: f32,
    pub mineral_density: f32,
}

impl Cell {
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::Elevation => self.elevation,
            Field::Moisture => self.moisture,
            Field::MineralDensity => self.mineral_density,
        }
    }

    pub fn climate(&self) -> Climate {
        Climate::classify(self.elevation, self.moisture)
    }

    pub fn geology(&self) -> Geology {
        Geology::classify(self.mineral_density)
    }
}

/// One noise source per field, seeded from a single master seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSources {
    pub elevation: GradientNoise,
    pub moisture: GradientNoise,
    pub mineral_density: GradientNoise,
}

impl FieldSources {
    /// Draw three seeds, in field order, from a sequence started at `master_seed`.
    pub fn derive(master_seed: u64, params: &Params) -> Self {
        let mut rng = Rng::new(master_seed);
        let mut next = |field: Field| {
            GradientNoise::new(rng.next_u32()).with_frequency(params.field(field).frequency)
        };
        let elevation = next(Field::Elevation);
        let moisture = next(Field::Moisture);
        let mineral_density = next(Field::MineralDensity);
        Self {
            elevation,
            moisture,
            mineral_density,
        }
    }

    /// Synthesize all three fields at grid position `(x, y)` of a `w x h` grid.
    #[inline]
    pub fn cell(&self, params: &Params, x: usize, y: usize, w: usize, h: usize) -> Cell {
        let (nx, ny) = sample_coords(x, y, w, h);
        Cell {
            elevation: synthesize(&self.elevation, &params.elevation, nx, ny),
            moisture: synthesize(&self.moisture, &params.moisture, nx, ny),
            mineral_density: synthesize(&self.mineral_density, &params.mineral_density, nx, ny),
        }
    }
}

/// Fully generated, immutable terrain.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    seed: u64,
    cells: Grid<Cell>,
}

impl Terrain {
    /// Build a terrain with the reference parameters.
    pub fn new(master_seed: u64, width: i32, height: i32) -> Result<Self, TerrainError> {
        Self::build(master_seed, width, height, &Params::default())
    }

    pub fn build(
        master_seed: u64,
        width: i32,
        height: i32,
        params: &Params,
    ) -> Result<Self, TerrainError> {
        let (w, h) = checked_dims(width, height)?;
        params.validate()?;

        let sources = FieldSources::derive(master_seed, params);
        for (field, noise) in [
            (Field::Elevation, &sources.elevation),
            (Field::Moisture, &sources.moisture),
            (Field::MineralDensity, &sources.mineral_density),
        ] {
            log::debug!(
                "{}: seed={} frequency={}",
                field.name(),
                noise.seed(),
                noise.frequency()
            );
        }

        let cells = build_cells(&sources, params, w, h);
        log::info!("built {w}x{h} terrain for seed {master_seed}");

        Ok(Self {
            seed: master_seed,
            cells,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.cells.w
    }

    pub fn height(&self) -> usize {
        self.cells.h
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells.data
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, TerrainError> {
        self.cells
            .checked_get(x, y)
            .ok_or_else(|| TerrainError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    pub fn climate_of(&self, x: i32, y: i32) -> Result<Climate, TerrainError> {
        self.cell_at(x, y).map(|c| c.climate())
    }

    pub fn geology_of(&self, x: i32, y: i32) -> Result<Geology, TerrainError> {
        self.cell_at(x, y).map(|c| c.geology())
    }

    /// Cell counts per climate, in [`Climate::ALL`] order.
    pub fn climate_histogram(&self) -> Vec<(Climate, usize)> {
        let mut counts = [0usize; Climate::ALL.len()];
        for c in self.cells() {
            counts[c.climate().index()] += 1;
        }
        Climate::ALL.iter().copied().zip(counts).collect()
    }

    /// Cell counts per deposit, in [`Geology::ALL`] order.
    pub fn geology_histogram(&self) -> Vec<(Geology, usize)> {
        let mut counts = [0usize; Geology::ALL.len()];
        for c in self.cells() {
            counts[c.geology().index()] += 1;
        }
        Geology::ALL.iter().copied().zip(counts).collect()
    }
}

fn checked_dims(width: i32, height: i32) -> Result<(usize, usize), TerrainError> {
    if width <= 0 || height <= 0 {
        return Err(TerrainError::InvalidArgument { width, height });
    }
    Ok((width as usize, height as usize))
}

/// Row-parallel fill. Every cell depends only on its coordinates and the
/// read-only sources, so the result matches a sequential fill exactly.
fn build_cells(sources: &FieldSources, params: &Params, w: usize, h: usize) -> Grid<Cell> {
    let mut grid = Grid::new(w, h);
    grid.data.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, out) in row.iter_mut().enumerate() {
            *out = sources.cell(params, x, y, w, h);
        }
    });
    grid
}

/// Build a terrain with the reference parameters.
pub fn build_grid(master_seed: u64, width: i32, height: i32) -> Result<Terrain, TerrainError> {
    Terrain::new(master_seed, width, height)
}

pub fn cell_at(terrain: &Terrain, x: i32, y: i32) -> Result<Cell, TerrainError> {
    terrain.cell_at(x, y)
}

pub fn climate_of(terrain: &Terrain, x: i32, y: i32) -> Result<Climate, TerrainError> {
    terrain.climate_of(x, y)
}

pub fn geology_of(terrain: &Terrain, x: i32, y: i32) -> Result<Geology, TerrainError> {
    terrain.geology_of(x, y)
}
