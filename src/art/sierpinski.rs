//! # Sierpinski Triangle
//!
//! Chaos-game construction: walk a point halfway toward a randomly chosen
//! triangle vertex, plotting every landing, and the Sierpinski attractor
//! emerges. Each step depends on the previous point, so the walk is a
//! sequential fold over the RNG. `iterations` is not capped; one plot per
//! step, so cost is linear in whatever the caller asks for.

use image::{Rgb, RgbImage};
use rand::Rng;

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

const DEFAULT_ITERATIONS: u32 = 10_000;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "iterations",
    default: "10000",
    help: "Number of chaos-game steps to plot",
}];

/// Sierpinski triangle generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SierpinskiTriangle;

/// Triangle inscribed in the canvas: apex top-center, base corners
/// bottom-left and bottom-right.
fn vertices(width: u32, height: u32) -> [(u32, u32); 3] {
    [
        (width / 2, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ]
}

fn render(width: u32, height: u32, iterations: u32, rng: &mut impl Rng) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let vertices = vertices(width, height);

    let mut x = rng.random_range(0..width);
    let mut y = rng.random_range(0..height);

    for _ in 0..iterations {
        let (tx, ty) = vertices[rng.random_range(0..3)];
        x = (x + tx) / 2;
        y = (y + ty) / 2;
        img.put_pixel(x, y, WHITE);
    }

    img
}

impl super::Generator for SierpinskiTriangle {
    fn name(&self) -> &'static str {
        "sierpinski_triangle"
    }

    fn description(&self) -> &'static str {
        "Triangle recursively hollowed into smaller triangles, via the chaos game"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn generate(&self, width: u32, height: u32, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let iterations = params
            .get_u32("iterations")
            .map_err(super::param_err)?
            .unwrap_or(DEFAULT_ITERATIONS);
        Ok(render(width, height, iterations, &mut rand::rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seeded_walk_is_deterministic() {
        let a = render(128, 128, 5_000, &mut StdRng::seed_from_u64(42));
        let b = render(128, 128, 5_000, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_black_and_white_only() {
        let img = render(96, 96, 2_000, &mut StdRng::seed_from_u64(1));
        for p in img.pixels() {
            assert!(p.0 == [0, 0, 0] || p.0 == [255, 255, 255]);
        }
    }

    #[test]
    fn test_plots_some_but_not_all_pixels() {
        let img = render(128, 128, 10_000, &mut StdRng::seed_from_u64(5));
        let white = img.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        assert!(white > 100, "expected a visible attractor, got {white} points");
        assert!(white < 128 * 128, "attractor must not fill the canvas");
    }

    #[test]
    fn test_midpoint_walk_stays_in_bounds() {
        // put_pixel panics on out-of-bounds coordinates, so surviving a long
        // walk on a tiny canvas is the assertion.
        let _ = render(3, 3, 50_000, &mut StdRng::seed_from_u64(9));
    }

    #[test]
    fn test_zero_iterations_is_blank() {
        let img = render(64, 64, 0, &mut StdRng::seed_from_u64(2));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
