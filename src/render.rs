use rayon::prelude::*;

use crate::climate::Climate;
use crate::field::Field;
use crate::geology::Geology;
use crate::terrain::{Cell, Terrain};

// Named web colors, RGBA8.
const DARK_BLUE: [u8; 4] = [0, 0, 139, 255];
const TAN: [u8; 4] = [210, 180, 140, 255];
const DARK_RED: [u8; 4] = [139, 0, 0, 255];
const GRAY: [u8; 4] = [128, 128, 128, 255];
const LIGHT_GRAY: [u8; 4] = [211, 211, 211, 255];
const WHITE_SMOKE: [u8; 4] = [245, 245, 245, 255];
const LIGHT_GOLDENROD_YELLOW: [u8; 4] = [250, 250, 210, 255];
const LAWN_GREEN: [u8; 4] = [124, 252, 0, 255];
const DARK_KHAKI: [u8; 4] = [189, 183, 107, 255];
const LIGHT_GREEN: [u8; 4] = [144, 238, 144, 255];
const FOREST_GREEN: [u8; 4] = [34, 139, 34, 255];
const LIGHT_SEA_GREEN: [u8; 4] = [32, 178, 170, 255];
const OLIVE_DRAB: [u8; 4] = [107, 142, 35, 255];
const SEA_GREEN: [u8; 4] = [46, 139, 87, 255];
const DARK_GREEN: [u8; 4] = [0, 100, 0, 255];
const DARK_GRAY: [u8; 4] = [169, 169, 169, 255];
const DARK_SEA_GREEN: [u8; 4] = [143, 188, 143, 255];
const SILVER: [u8; 4] = [192, 192, 192, 255];
const GOLD: [u8; 4] = [255, 215, 0, 255];

pub fn climate_color(c: Climate) -> [u8; 4] {
    match c {
        Climate::Ocean => DARK_BLUE,
        Climate::Beach => TAN,
        Climate::Scorched => DARK_RED,
        Climate::Bare => GRAY,
        Climate::Tundra => LIGHT_GRAY,
        Climate::Snow => WHITE_SMOKE,
        Climate::TemperateDesert => LIGHT_GOLDENROD_YELLOW,
        Climate::Shrubland => LAWN_GREEN,
        Climate::Taiga => DARK_KHAKI,
        Climate::Grassland => LIGHT_GREEN,
        Climate::TemperateDeciduousForest => FOREST_GREEN,
        Climate::TemperateRainForest => LIGHT_SEA_GREEN,
        Climate::SubtropicalDesert => OLIVE_DRAB,
        Climate::TropicalSeasonalForest => SEA_GREEN,
        Climate::TropicalRainForest => DARK_GREEN,
    }
}

pub fn geology_color(g: Geology) -> [u8; 4] {
    match g {
        Geology::Sand => TAN,
        Geology::Gravel => DARK_GRAY,
        Geology::Salt => WHITE_SMOKE,
        Geology::Tin => GRAY,
        Geology::Copper => DARK_SEA_GREEN,
        Geology::Iron => DARK_RED,
        Geology::Silver => SILVER,
        Geology::Gold => GOLD,
    }
}

/// Paint every cell with `color`, one rayon task per row.
fn render_cells(terrain: &Terrain, color: impl Fn(&Cell) -> [u8; 4] + Sync) -> Vec<u8> {
    let w = terrain.width();
    let h = terrain.height();
    let mut rgba = vec![0u8; w * h * 4];

    rgba.par_chunks_mut(w * 4)
        .zip(terrain.cells().par_chunks(w))
        .for_each(|(row, cells)| {
            for (out, cell) in row.chunks_exact_mut(4).zip(cells) {
                out.copy_from_slice(&color(cell));
            }
        });

    rgba
}

/// Climate map.
pub fn render_climate(terrain: &Terrain) -> Vec<u8> {
    render_cells(terrain, |c| climate_color(c.climate()))
}

/// Deposit map.
pub fn render_geology(terrain: &Terrain) -> Vec<u8> {
    render_cells(terrain, |c| geology_color(c.geology()))
}

/// Diagnostic: one field as grayscale. Values are already in [0, 1].
pub fn render_field(terrain: &Terrain, field: Field) -> Vec<u8> {
    render_cells(terrain, |c| {
        let v = (c.get(field) * 255.0).round().clamp(0.0, 255.0) as u8;
        [v, v, v, 255]
    })
}
