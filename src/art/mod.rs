//! # Image Generators
//!
//! Synthesis algorithms that produce an image from dimensions and parameters
//! alone. Each generator lives in its own module with a struct implementing
//! the [`Generator`] trait.
//!
//! ## Adding a New Generator
//!
//! 1. Create `src/art/mymode.rs` with a struct implementing [`Generator`]
//! 2. Add `pub mod mymode;` below
//! 3. Add the name to [`GENERATORS`] and a match arm to [`by_name`]

use image::RgbImage;

use crate::error::NebulaError;
use crate::params::{ModeInfo, ParamDoc, ParamMap};

pub mod fractal;
pub mod koch;
pub mod noise;
pub mod plasma;
pub mod sierpinski;

/// All available generator modes, in display order.
pub const GENERATORS: &[&str] = &[
    "white_noise",
    "color_noise",
    "plasma",
    "mandelbrot",
    "burning_ship",
    "sierpinski_triangle",
    "koch_snowflake",
];

/// Trait for image generators.
///
/// Implementations must return a buffer of exactly `width` x `height`; the
/// caller has already validated both against the canvas cap.
pub trait Generator: Send + Sync {
    /// Mode name (lowercase, e.g., "plasma"). Matched case-sensitively.
    fn name(&self) -> &'static str;

    /// One-line description for the mode catalog.
    fn description(&self) -> &'static str;

    /// Accepted parameters with defaults, for the mode catalog.
    fn param_docs(&self) -> &'static [ParamDoc] {
        &[]
    }

    /// Produce the image.
    fn generate(
        &self,
        width: u32,
        height: u32,
        params: &ParamMap,
    ) -> Result<RgbImage, NebulaError>;
}

/// Get a generator by name. Names are exact; there is no aliasing.
pub fn by_name(name: &str) -> Option<Box<dyn Generator>> {
    match name {
        "white_noise" => Some(Box::new(noise::WhiteNoise)),
        "color_noise" => Some(Box::new(noise::ColorNoise)),
        "plasma" => Some(Box::new(plasma::Plasma)),
        "mandelbrot" => Some(Box::new(fractal::Mandelbrot)),
        "burning_ship" => Some(Box::new(fractal::BurningShip)),
        "sierpinski_triangle" => Some(Box::new(sierpinski::SierpinskiTriangle)),
        "koch_snowflake" => Some(Box::new(koch::KochSnowflake)),
        _ => None,
    }
}

/// Catalog records for every registered generator.
pub fn infos() -> Vec<ModeInfo> {
    GENERATORS
        .iter()
        .filter_map(|name| by_name(name))
        .map(|g| ModeInfo {
            name: g.name(),
            description: g.description(),
            params: g.param_docs(),
        })
        .collect()
}

/// Map a parameter type mismatch into a generation failure.
pub(crate) fn param_err(e: crate::params::ParamTypeError) -> NebulaError {
    NebulaError::Generation(e.to_string())
}
