//! # Blur
//!
//! Gaussian blur, delegated to `image::imageops`. The `radius` parameter is
//! used as the Gaussian sigma; radius 0 is the identity.

use image::RgbImage;
use image::imageops;

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

const DEFAULT_RADIUS: f64 = 3.0;

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "radius",
    default: "3",
    help: "Blur radius; larger is blurrier",
}];

/// Gaussian blur effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blur;

impl super::Effect for Blur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn description(&self) -> &'static str {
        "Blurs the image by a radius"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let radius = params
            .get_f64("radius")
            .map_err(super::param_err)?
            .unwrap_or(DEFAULT_RADIUS);
        if radius < 0.0 {
            return Err(NebulaError::Effect(format!(
                "radius must be non-negative (got {radius})"
            )));
        }
        if radius == 0.0 {
            return Ok(img);
        }
        Ok(imageops::blur(&img, radius as f32))
    }
}
