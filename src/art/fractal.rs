//! # Escape-Time Fractals
//!
//! Mandelbrot and Burning Ship over a shared fixed viewport, colored by
//! escape iteration count.
//!
//! ## Shade
//!
//! ```text
//! shade = 255 - floor(i * 255 / max_iter)
//! ```
//!
//! so interior points (i == max_iter) are black and instant escapes are
//! near-white. Rows are independent, so they render in parallel.
//!
//! Work scales with width * height * max_iter; `max_iter` is not capped, so
//! unreasonably large values are the caller's time to burn.

use image::RgbImage;
use rayon::prelude::*;

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

const X_MIN: f64 = -2.5;
const X_MAX: f64 = 1.0;
const Y_MIN: f64 = -1.25;
const Y_MAX: f64 = 1.25;

const DEFAULT_MAX_ITER: u32 = 100;

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "max_iter",
    default: "100",
    help: "Escape iteration cap per pixel",
}];

/// The Mandelbrot set: z <- z^2 + c.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mandelbrot;

/// The Burning Ship: z folded to (|Re z|, |Im z|) before each squaring.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurningShip;

/// Iterations until |z| exceeds 2, capped at `max_iter`.
fn escape_count(cx: f64, cy: f64, max_iter: u32, fold_abs: bool) -> u32 {
    let mut zx = 0.0f64;
    let mut zy = 0.0f64;
    let mut i = 0;
    while zx * zx + zy * zy <= 4.0 && i < max_iter {
        if fold_abs {
            zx = zx.abs();
            zy = zy.abs();
        }
        let next_zx = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = next_zx;
        i += 1;
    }
    i
}

fn render(width: u32, height: u32, max_iter: u32, fold_abs: bool) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let row_len = width as usize * 3;
    let buf: &mut [u8] = &mut img;

    buf.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let cy = y as f64 / f64::from(height) * (Y_MAX - Y_MIN) + Y_MIN;
            for x in 0..width as usize {
                let cx = x as f64 / f64::from(width) * (X_MAX - X_MIN) + X_MIN;
                let i = escape_count(cx, cy, max_iter, fold_abs);
                let shade = (255 - u64::from(i) * 255 / u64::from(max_iter)) as u8;
                row[x * 3] = shade;
                row[x * 3 + 1] = shade;
                row[x * 3 + 2] = shade;
            }
        });

    img
}

fn max_iter_param(params: &ParamMap) -> Result<u32, NebulaError> {
    let max_iter = params
        .get_u32("max_iter")
        .map_err(super::param_err)?
        .unwrap_or(DEFAULT_MAX_ITER);
    if max_iter == 0 {
        return Err(NebulaError::Generation(
            "max_iter must be at least 1".to_string(),
        ));
    }
    Ok(max_iter)
}

impl super::Generator for Mandelbrot {
    fn name(&self) -> &'static str {
        "mandelbrot"
    }

    fn description(&self) -> &'static str {
        "Endlessly detailed escape-time fractal of bulbs and filaments"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn generate(&self, width: u32, height: u32, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(render(width, height, max_iter_param(params)?, false))
    }
}

impl super::Generator for BurningShip {
    fn name(&self) -> &'static str {
        "burning_ship"
    }

    fn description(&self) -> &'static str {
        "Jagged, flame-like cousin of the Mandelbrot set"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn generate(&self, width: u32, height: u32, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(render(width, height, max_iter_param(params)?, true))
    }
}
