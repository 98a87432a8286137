//! # Enhancement Effects
//!
//! Linear brightness and contrast adjustment. Factor 1.0 is the identity,
//! 0 is the degenerate image (black, or uniform gray at the mean), values
//! above 1 amplify.

use image::RgbImage;

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

use super::point::luminance;

/// Scale channel values toward or away from black.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brightness;

/// Scale channel values toward or away from the image's mean luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contrast;

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "factor",
    default: "1.0",
    help: "Enhancement factor; 1.0 leaves the image unchanged",
}];

fn factor_param(params: &ParamMap) -> Result<f64, NebulaError> {
    let factor = params
        .get_f64("factor")
        .map_err(super::param_err)?
        .unwrap_or(1.0);
    if factor < 0.0 {
        return Err(NebulaError::Effect(format!(
            "factor must be non-negative (got {factor})"
        )));
    }
    Ok(factor)
}

fn clamp_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Mean luminance of the whole image, rounded to the nearest integer.
fn mean_luminance(img: &RgbImage) -> f64 {
    let count = img.pixels().len() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = img.pixels().map(|p| u64::from(luminance(*p))).sum();
    (sum as f64 / count as f64).round()
}

impl super::Effect for Brightness {
    fn name(&self) -> &'static str {
        "brightness"
    }

    fn description(&self) -> &'static str {
        "Scales the brightness of the image by a factor"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn apply(&self, mut img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let factor = factor_param(params)?;
        for pixel in img.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = clamp_u8(f64::from(*channel) * factor);
            }
        }
        Ok(img)
    }
}

impl super::Effect for Contrast {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn description(&self) -> &'static str {
        "Scales the contrast of the image by a factor"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn apply(&self, mut img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let factor = factor_param(params)?;
        let mean = mean_luminance(&img);
        for pixel in img.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = clamp_u8(mean + factor * (f64::from(*channel) - mean));
            }
        }
        Ok(img)
    }
}
