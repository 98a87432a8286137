//! # Noise Generators
//!
//! TV-static style noise, in grayscale and full color. Every sample is an
//! independent uniform draw in [0, 255].

use image::{Rgb, RgbImage};
use rand::Rng;

use crate::error::NebulaError;
use crate::params::ParamMap;

/// Grayscale static: one luminance sample per pixel, replicated to RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteNoise;

/// Per-channel static: three independent samples per pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorNoise;

fn white(width: u32, height: u32, rng: &mut impl Rng) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        let v = rng.random_range(0..=255u8);
        *pixel = Rgb([v, v, v]);
    }
    img
}

fn color(width: u32, height: u32, rng: &mut impl Rng) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = Rgb([
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
        ]);
    }
    img
}

impl super::Generator for WhiteNoise {
    fn name(&self) -> &'static str {
        "white_noise"
    }

    fn description(&self) -> &'static str {
        "Grayscale static, like TV static"
    }

    fn generate(&self, width: u32, height: u32, _params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(white(width, height, &mut rand::rng()))
    }
}

impl super::Generator for ColorNoise {
    fn name(&self) -> &'static str {
        "color_noise"
    }

    fn description(&self) -> &'static str {
        "Random color noise"
    }

    fn generate(&self, width: u32, height: u32, _params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(color(width, height, &mut rand::rng()))
    }
}
