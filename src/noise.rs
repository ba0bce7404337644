use crate::rng::hash2;

/// A seeded 2D noise field. Implementations must be pure: the same
/// coordinates always give the same value, in `[-1, 1]`.
pub trait NoiseSource: Sync {
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Gradient noise with a fixed seed and a frequency applied to every
/// coordinate before lattice lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientNoise {
    seed: u32,
    frequency: f32,
}

impl GradientNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            frequency: 1.0,
        }
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.set_frequency(frequency);
        self
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl NoiseSource for GradientNoise {
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        gradient_noise(x * self.frequency, y * self.frequency, self.seed).clamp(-1.0, 1.0)
    }
}

#[inline]
fn smootherstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// 2D gradient noise (Perlin-style). Better isotropy than value noise --
/// no grid-aligned diagonal artifacts.
#[inline]
pub fn gradient_noise(x: f32, y: f32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = x - ix as f32;
    let fy = y - iy as f32;
    let sx = smootherstep(fx);
    let sy = smootherstep(fy);

    #[inline]
    fn grad(hash: u32, dx: f32, dy: f32) -> f32 {
        // 16 evenly-spaced unit gradients (every 22.5°).
        match hash & 15 {
            0  =>  dx,
            1  =>  0.924 * dx + 0.383 * dy,
            2  =>  0.707 * (dx + dy),
            3  =>  0.383 * dx + 0.924 * dy,
            4  =>  dy,
            5  => -0.383 * dx + 0.924 * dy,
            6  =>  0.707 * (-dx + dy),
            7  => -0.924 * dx + 0.383 * dy,
            8  => -dx,
            9  => -0.924 * dx - 0.383 * dy,
            10 =>  0.707 * (-dx - dy),
            11 => -0.383 * dx - 0.924 * dy,
            12 => -dy,
            13 =>  0.383 * dx - 0.924 * dy,
            14 =>  0.707 * (dx - dy),
            _  =>  0.924 * dx - 0.383 * dy,
        }
    }

    let v00 = grad(hash2(ix, iy, seed), fx, fy);
    let v10 = grad(hash2(ix + 1, iy, seed), fx - 1.0, fy);
    let v01 = grad(hash2(ix, iy + 1, seed), fx, fy - 1.0);
    let v11 = grad(hash2(ix + 1, iy + 1, seed), fx - 1.0, fy - 1.0);

    let a = lerp(v00, v10, sx);
    let b = lerp(v01, v11, sx);
    // Raw range is ~[-0.7, 0.7]
    lerp(a, b, sy) * 1.414
}
