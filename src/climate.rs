use serde::Serialize;

/// Biome label derived from a cell's elevation and moisture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Ocean,
    Beach,
    Scorched,
    Bare,
    Tundra,
    Snow,
    TemperateDesert,
    Shrubland,
    Taiga,
    Grassland,
    TemperateDeciduousForest,
    TemperateRainForest,
    SubtropicalDesert,
    TropicalSeasonalForest,
    TropicalRainForest,
}

/// Moisture sub-ladder: the first rung with `m < limit` wins, else `wettest`.
struct MoistureLadder {
    rungs: &'static [(f32, Climate)],
    wettest: Climate,
}

impl MoistureLadder {
    fn pick(&self, m: f32) -> Climate {
        self.rungs
            .iter()
            .find(|(limit, _)| m < *limit)
            .map_or(self.wettest, |(_, c)| *c)
    }
}

/// Below these elevations the moisture is ignored.
const OCEAN_BELOW: f32 = 0.10;
const BEACH_BELOW: f32 = 0.12;

/// Elevation bands above the shore, highest first. A band applies when
/// `e > floor`; anything left over uses [`LOWLAND`].
static HIGHLAND_BANDS: [(f32, MoistureLadder); 3] = [
    (
        0.80,
        MoistureLadder {
            rungs: &[(0.1, Climate::Scorched), (0.2, Climate::Bare), (0.5, Climate::Tundra)],
            wettest: Climate::Snow,
        },
    ),
    (
        0.60,
        MoistureLadder {
            rungs: &[(0.33, Climate::TemperateDesert), (0.66, Climate::Shrubland)],
            wettest: Climate::Taiga,
        },
    ),
    (
        0.30,
        MoistureLadder {
            rungs: &[
                (0.16, Climate::TemperateDesert),
                (0.50, Climate::Grassland),
                (0.83, Climate::TemperateDeciduousForest),
            ],
            wettest: Climate::TemperateRainForest,
        },
    ),
];

static LOWLAND: MoistureLadder = MoistureLadder {
    rungs: &[
        (0.16, Climate::SubtropicalDesert),
        (0.33, Climate::Grassland),
        (0.66, Climate::TropicalSeasonalForest),
    ],
    wettest: Climate::TropicalRainForest,
};

impl Climate {
    pub const ALL: [Climate; 15] = [
        Climate::Ocean,
        Climate::Beach,
        Climate::Scorched,
        Climate::Bare,
        Climate::Tundra,
        Climate::Snow,
        Climate::TemperateDesert,
        Climate::Shrubland,
        Climate::Taiga,
        Climate::Grassland,
        Climate::TemperateDeciduousForest,
        Climate::TemperateRainForest,
        Climate::SubtropicalDesert,
        Climate::TropicalSeasonalForest,
        Climate::TropicalRainForest,
    ];

    /// Classify an (elevation, moisture) pair. Total over all inputs.
    pub fn classify(e: f32, m: f32) -> Climate {
        if e < OCEAN_BELOW {
            return Climate::Ocean;
        }
        if e < BEACH_BELOW {
            return Climate::Beach;
        }
        HIGHLAND_BANDS
            .iter()
            .find(|(floor, _)| e > *floor)
            .map_or(&LOWLAND, |(_, ladder)| ladder)
            .pick(m)
    }

    pub fn name(self) -> &'static str {
        match self {
            Climate::Ocean => "ocean",
            Climate::Beach => "beach",
            Climate::Scorched => "scorched",
            Climate::Bare => "bare",
            Climate::Tundra => "tundra",
            Climate::Snow => "snow",
            Climate::TemperateDesert => "temperate_desert",
            Climate::Shrubland => "shrubland",
            Climate::Taiga => "taiga",
            Climate::Grassland => "grassland",
            Climate::TemperateDeciduousForest => "temperate_deciduous_forest",
            Climate::TemperateRainForest => "temperate_rain_forest",
            Climate::SubtropicalDesert => "subtropical_desert",
            Climate::TropicalSeasonalForest => "tropical_seasonal_forest",
            Climate::TropicalRainForest => "tropical_rain_forest",
        }
    }

    /// Position in [`Climate::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}
