//! # Koch Snowflake
//!
//! An equilateral triangle whose every segment is recursively replaced by
//! four sub-segments forming an outward spike. Depth 0 is a plain triangle;
//! each extra level quadruples the segment count, so depth is sanity-capped.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

const DEFAULT_ITERATIONS: u32 = 4;

/// Segment count is 3 * 4^depth; beyond this depth the canvas gains nothing
/// and the recursion only burns time.
const MAX_DEPTH: u32 = 10;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "iterations",
    default: "4",
    help: "Recursion depth (0 draws the plain triangle, capped at 10)",
}];

type Point = (f64, f64);

/// Koch snowflake generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct KochSnowflake;

/// Corners of the base triangle: side length 80% of the smaller canvas
/// dimension, centered, apex up.
fn base_triangle(width: u32, height: u32) -> [Point; 3] {
    let w = f64::from(width);
    let h = f64::from(height);
    let size = f64::from(width.min(height)) * 0.8;
    let tri_height = size * 3.0_f64.sqrt() / 2.0;

    [
        ((w - size) / 2.0, h / 2.0 + tri_height / 3.0),
        ((w + size) / 2.0, h / 2.0 + tri_height / 3.0),
        (w / 2.0, h / 2.0 - 2.0 * tri_height / 3.0),
    ]
}

fn draw_segment(img: &mut RgbImage, a: Point, e: Point) {
    draw_line_segment_mut(img, (a.0 as f32, a.1 as f32), (e.0 as f32, e.1 as f32), WHITE);
}

fn koch_curve(img: &mut RgbImage, a: Point, e: Point, depth: u32) {
    if depth == 0 {
        draw_segment(img, a, e);
        return;
    }

    let dx = (e.0 - a.0) / 3.0;
    let dy = (e.1 - a.1) / 3.0;
    let b = (a.0 + dx, a.1 + dy);
    let d = (a.0 + 2.0 * dx, a.1 + 2.0 * dy);

    // Spike apex: the middle third rotated 60 degrees about b,
    // in screen coordinates (y grows downward).
    let (sin, cos) = std::f64::consts::FRAC_PI_3.sin_cos();
    let rx = d.0 - b.0;
    let ry = d.1 - b.1;
    let c = (b.0 + cos * rx - sin * ry, b.1 + sin * rx + cos * ry);

    koch_curve(img, a, b, depth - 1);
    koch_curve(img, b, c, depth - 1);
    koch_curve(img, c, d, depth - 1);
    koch_curve(img, d, e, depth - 1);
}

fn render(width: u32, height: u32, depth: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let [p1, p2, p3] = base_triangle(width, height);
    koch_curve(&mut img, p1, p2, depth);
    koch_curve(&mut img, p2, p3, depth);
    koch_curve(&mut img, p3, p1, depth);
    img
}

impl super::Generator for KochSnowflake {
    fn name(&self) -> &'static str {
        "koch_snowflake"
    }

    fn description(&self) -> &'static str {
        "Spiky snowflake outline made of smaller and smaller triangle bumps"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn generate(&self, width: u32, height: u32, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let depth = params
            .get_u32("iterations")
            .map_err(super::param_err)?
            .unwrap_or(DEFAULT_ITERATIONS);
        if depth > MAX_DEPTH {
            return Err(NebulaError::Generation(format!(
                "iterations must be at most {MAX_DEPTH} (got {depth})"
            )));
        }
        Ok(render(width, height, depth))
    }
}
