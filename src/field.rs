//! Octave combination for the three scalar fields.
//!
//! Every field samples one noise source at six octave multipliers of the
//! same normalized coordinate, maps each sample into `[0, 1]`, takes the
//! weighted mean and finally applies the field's shaping exponent.

use crate::config::FieldParams;
use crate::noise::NoiseSource;

pub const OCTAVES: usize = 6;

/// Coordinate multipliers, one per octave.
pub const OCTAVE_SCALES: [f32; OCTAVES] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Offset added to the normalized grid coordinate. Moves the sampling window
/// off the lattice origin and is part of the generated-world definition.
pub const SAMPLE_OFFSET: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Elevation,
    Moisture,
    MineralDensity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Elevation, Field::Moisture, Field::MineralDensity];

    pub fn name(self) -> &'static str {
        match self {
            Field::Elevation => "elevation",
            Field::Moisture => "moisture",
            Field::MineralDensity => "mineral_density",
        }
    }
}

/// Map a noise sample from `[-1, 1]` to `[0, 1]`.
#[inline]
pub fn normalize(v: f32) -> f32 {
    v / 2.0 + 0.5
}

/// Grid index scaled to unit range, shifted by [`SAMPLE_OFFSET`].
#[inline]
pub fn sample_coords(x: usize, y: usize, w: usize, h: usize) -> (f32, f32) {
    (
        x as f32 / w as f32 + SAMPLE_OFFSET,
        y as f32 / h as f32 + SAMPLE_OFFSET,
    )
}

/// Weighted octave sum at `(nx, ny)`, normalized by the weight sum and shaped.
#[inline]
pub fn synthesize<N: NoiseSource + ?Sized>(noise: &N, params: &FieldParams, nx: f32, ny: f32) -> f32 {
    let mut sum = 0.0;
    for (scale, weight) in OCTAVE_SCALES.iter().zip(params.weights.iter()) {
        sum += weight * normalize(noise.sample(scale * nx, scale * ny));
    }
    let mut v = sum / params.weight_sum();
    if params.exponent != 1.0 {
        v = v.powf(params.exponent);
    }
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::GradientNoise;

    struct Constant(f32);

    impl NoiseSource for Constant {
        fn sample(&self, _x: f32, _y: f32) -> f32 {
            self.0
        }
    }

    /// Returns +1 for the first octave's coordinates and -1 everywhere else.
    struct FirstOctaveOnly {
        nx: f32,
    }

    impl NoiseSource for FirstOctaveOnly {
        fn sample(&self, x: f32, _y: f32) -> f32 {
            if x == self.nx { 1.0 } else { -1.0 }
        }
    }

    #[test]
    fn normalize_maps_endpoints() {
        assert_eq!(normalize(-1.0), 0.0);
        assert_eq!(normalize(0.0), 0.5);
        assert_eq!(normalize(1.0), 1.0);
    }

    #[test]
    fn sample_coords_carry_half_offset() {
        assert_eq!(sample_coords(0, 0, 8, 4), (0.5, 0.5));
        assert_eq!(sample_coords(4, 2, 8, 4), (1.0, 1.0));
    }

    #[test]
    fn flat_noise_gives_midpoint_then_shaping() {
        let flat = Constant(0.0);
        let m = synthesize(&flat, &FieldParams::MOISTURE, 0.7, 0.9);
        assert!((m - 0.5).abs() < 1e-6);
        let g = synthesize(&flat, &FieldParams::MINERAL_DENSITY, 0.7, 0.9);
        assert!((g - 0.5).abs() < 1e-6);
        let e = synthesize(&flat, &FieldParams::ELEVATION, 0.7, 0.9);
        assert!((e - 0.5f32.powf(2.75)).abs() < 1e-6);
    }

    #[test]
    fn extremes_hit_the_unit_bounds() {
        for params in [FieldParams::ELEVATION, FieldParams::MOISTURE, FieldParams::MINERAL_DENSITY] {
            assert_eq!(synthesize(&Constant(-1.0), &params, 0.5, 0.5), 0.0);
            assert_eq!(synthesize(&Constant(1.0), &params, 0.5, 0.5), 1.0);
        }
    }

    #[test]
    fn first_octave_carries_its_weight_share() {
        let noise = FirstOctaveOnly { nx: 0.75 };
        let p = FieldParams::MOISTURE;
        let v = synthesize(&noise, &p, 0.75, 0.6);
        assert!((v - 1.00 / p.weight_sum()).abs() < 1e-6);

        let p = FieldParams::MINERAL_DENSITY;
        let v = synthesize(&noise, &p, 0.75, 0.6);
        assert!((v - 1.0 / 6.0).abs() < 1e-6);
    }

    /// Gives octave `k` (recognized by its x multiplier) the raw value `values[k]`.
    struct PerOctave {
        nx: f32,
        values: [f32; OCTAVES],
    }

    impl NoiseSource for PerOctave {
        fn sample(&self, x: f32, _y: f32) -> f32 {
            let k = OCTAVE_SCALES
                .iter()
                .position(|s| s * self.nx == x)
                .unwrap();
            self.values[k]
        }
    }

    fn weighted_mean(values: [f32; OCTAVES], weights: [f64; OCTAVES]) -> f64 {
        let sum: f64 = values
            .iter()
            .zip(weights)
            .map(|(v, w)| w * (*v as f64 / 2.0 + 0.5))
            .sum();
        sum / weights.iter().sum::<f64>()
    }

    #[test]
    fn octaves_use_reference_weights() {
        let values = [0.9, -0.6, 0.3, -0.8, 0.7, -0.2];
        let noise = PerOctave { nx: 0.75, values };

        let e = synthesize(&noise, &FieldParams::ELEVATION, 0.75, 0.6) as f64;
        let want = weighted_mean(values, [1.00, 0.50, 0.25, 0.13, 0.06, 0.03]).powf(2.75);
        assert!((e - want).abs() < 1e-5, "elevation {e} vs {want}");

        let m = synthesize(&noise, &FieldParams::MOISTURE, 0.75, 0.6) as f64;
        let want = weighted_mean(values, [1.00, 0.75, 0.33, 0.33, 0.33, 0.50]);
        assert!((m - want).abs() < 1e-5, "moisture {m} vs {want}");

        let g = synthesize(&noise, &FieldParams::MINERAL_DENSITY, 0.75, 0.6) as f64;
        let want = weighted_mean(values, [0.50; OCTAVES]);
        assert!((g - want).abs() < 1e-5, "mineral density {g} vs {want}");
    }

    #[test]
    fn elevation_is_biased_low() {
        let noise = GradientNoise::new(4242).with_frequency(FieldParams::ELEVATION.frequency);
        let unshaped_params = FieldParams { exponent: 1.0, ..FieldParams::ELEVATION };
        let mut below = 0;
        let mut total = 0;
        for j in 0..32 {
            for i in 0..32 {
                let (nx, ny) = sample_coords(i, j, 32, 32);
                let e = synthesize(&noise, &FieldParams::ELEVATION, nx, ny);
                let unshaped = synthesize(&noise, &unshaped_params, nx, ny);
                assert!(e <= unshaped + 1e-6);
                if e < 0.5 {
                    below += 1;
                }
                total += 1;
            }
        }
        assert!(below * 2 > total);
    }
}
