use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::field::{Field, OCTAVES};

/// Synthesis parameters for one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Base frequency handed to the field's noise source.
    pub frequency: f32,
    /// Per-octave weights, lowest octave first.
    pub weights: [f32; OCTAVES],
    /// Shaping exponent applied after normalization. 1.0 leaves the value as is.
    pub exponent: f32,
}

impl FieldParams {
    pub const ELEVATION: Self = Self {
        frequency: 1.0,
        weights: [1.00, 0.50, 0.25, 0.13, 0.06, 0.03],
        exponent: 2.75,
    };

    pub const MOISTURE: Self = Self {
        frequency: 3.0,
        weights: [1.00, 0.75, 0.33, 0.33, 0.33, 0.50],
        exponent: 1.0,
    };

    pub const MINERAL_DENSITY: Self = Self {
        frequency: 11.0,
        weights: [0.50; OCTAVES],
        exponent: 1.0,
    };

    pub fn weight_sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    fn validate(&self, name: &str) -> Result<(), TerrainError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(TerrainError::InvalidParams(format!(
                "{name}: frequency must be positive, got {}",
                self.frequency
            )));
        }
        if self.weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(TerrainError::InvalidParams(format!(
                "{name}: octave weights must be finite and non-negative"
            )));
        }
        if self.weight_sum() <= 0.0 {
            return Err(TerrainError::InvalidParams(format!(
                "{name}: octave weights must not all be zero"
            )));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(TerrainError::InvalidParams(format!(
                "{name}: exponent must be positive, got {}",
                self.exponent
            )));
        }
        Ok(())
    }
}

/// All tunable parameters. Defaults reproduce the reference terrain exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub elevation: FieldParams,
    pub moisture: FieldParams,
    pub mineral_density: FieldParams,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            elevation: FieldParams::ELEVATION,
            moisture: FieldParams::MOISTURE,
            mineral_density: FieldParams::MINERAL_DENSITY,
        }
    }
}

impl Params {
    pub fn field(&self, field: Field) -> &FieldParams {
        match field {
            Field::Elevation => &self.elevation,
            Field::Moisture => &self.moisture,
            Field::MineralDensity => &self.mineral_density,
        }
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        self.elevation.validate("elevation")?;
        self.moisture.validate("moisture")?;
        self.mineral_density.validate("mineral_density")
    }

    /// Load parameters from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("no {} found, using default parameters", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let params: Params = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        params.validate()?;
        log::info!("loaded parameters from {}", path.display());
        Ok(params)
    }
}
