//! # Plasma
//!
//! Wavy colorful noise built from near-periodic sine waves.
//!
//! ## Formula
//!
//! ```text
//! r = 127 * (sin(x       * f) + 1)
//! g = 127 * (sin(y       * f) + 1)
//! b = 127 * (sin((x + y) * f) + 1)
//! ```
//!
//! where `f` is drawn fresh from Uniform[0.079, 0.081] for every channel of
//! every pixel. The per-sample jitter is the point: hoisting it to a single
//! global frequency collapses the shimmer into clean bands and changes the
//! pixel distribution.

use image::{Rgb, RgbImage};
use rand::Rng;

use crate::error::NebulaError;
use crate::params::ParamMap;

const FREQ_LO: f64 = 0.079;
const FREQ_HI: f64 = 0.081;

/// Plasma generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plasma;

fn channel(coordinate: u32, rng: &mut impl Rng) -> u8 {
    let freq = rng.random_range(FREQ_LO..FREQ_HI);
    (127.0 * ((f64::from(coordinate) * freq).sin() + 1.0)) as u8
}

fn render(width: u32, height: u32, rng: &mut impl Rng) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            channel(x, rng),
            channel(y, rng),
            channel(x + y, rng),
        ]);
    }
    img
}

impl super::Generator for Plasma {
    fn name(&self) -> &'static str {
        "plasma"
    }

    fn description(&self) -> &'static str {
        "Wavy colorful noise using jittered sine waves"
    }

    fn generate(&self, width: u32, height: u32, _params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(render(width, height, &mut rand::rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_values_stay_in_sine_range() {
        let img = render(64, 64, &mut StdRng::seed_from_u64(1));
        for Rgb(channels) in img.pixels() {
            for &v in channels {
                assert!(v <= 254, "127 * (sin + 1) never reaches 255, got {v}");
            }
        }
    }

    #[test]
    fn test_zero_coordinate_is_exactly_midtone() {
        // sin(0) == 0 regardless of the jittered frequency, so the red
        // channel of column x=0 and the green channel of row y=0 are fixed.
        let img = render(32, 32, &mut StdRng::seed_from_u64(2));
        for y in 0..32 {
            assert_eq!(img.get_pixel(0, y).0[0], 127);
        }
        for x in 0..32 {
            assert_eq!(img.get_pixel(x, 0).0[1], 127);
        }
    }

    #[test]
    fn test_jitter_varies_within_a_column() {
        // At x far from 0, the per-pixel frequency jitter makes the red
        // channel differ across rows even though x is constant.
        let img = render(256, 64, &mut StdRng::seed_from_u64(3));
        let column: Vec<u8> = (0..64).map(|y| img.get_pixel(200, y).0[0]).collect();
        assert!(column.iter().any(|&v| v != column[0]));
    }
}
