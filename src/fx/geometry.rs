//! # Geometric Effects
//!
//! Resampling effects: pixelate (down-and-up round trip) and resize. Both
//! use nearest-neighbor sampling, which is what gives pixelate its blocks
//! and resize its hard edges.

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

/// Blocky artifacts from a nearest-neighbor shrink/grow round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pixelate;

/// Nearest-neighbor resize with aspect-ratio completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resize;

const PIXELATE_PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "scale",
    default: "8",
    help: "Block edge length in pixels",
}];

const RESIZE_PARAMS: &[ParamDoc] = &[
    ParamDoc {
        name: "width",
        default: "(derived)",
        help: "Target width; derived from height when omitted",
    },
    ParamDoc {
        name: "height",
        default: "(derived)",
        help: "Target height; derived from width when omitted",
    },
];

impl super::Effect for Pixelate {
    fn name(&self) -> &'static str {
        "pixelate"
    }

    fn description(&self) -> &'static str {
        "Enlarges the pixels of the image by a scale"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PIXELATE_PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let scale = params
            .get_u32("scale")
            .map_err(super::param_err)?
            .unwrap_or(8);
        if scale == 0 {
            return Err(NebulaError::Effect("scale must be at least 1".to_string()));
        }

        let (width, height) = img.dimensions();
        let down_w = width / scale;
        let down_h = height / scale;
        if down_w == 0 || down_h == 0 {
            return Err(NebulaError::Effect(format!(
                "scale {scale} is too large for a {width}x{height} image"
            )));
        }

        let down = imageops::resize(&img, down_w, down_h, FilterType::Nearest);
        Ok(imageops::resize(&down, width, height, FilterType::Nearest))
    }
}

impl super::Effect for Resize {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn description(&self) -> &'static str {
        "Resizes the image; one dimension alone keeps the aspect ratio"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        RESIZE_PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let width = params.get_u32("width").map_err(super::param_err)?;
        let height = params.get_u32("height").map_err(super::param_err)?;
        let (orig_w, orig_h) = img.dimensions();

        let (target_w, target_h) = match (width, height) {
            (None, None) => return Ok(img),
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (f64::from(orig_h) * f64::from(w) / f64::from(orig_w)).round() as u32;
                (w, h)
            }
            (None, Some(h)) => {
                let w = (f64::from(orig_w) * f64::from(h) / f64::from(orig_h)).round() as u32;
                (w, h)
            }
        };

        if target_w == 0 || target_h == 0 {
            return Err(NebulaError::Effect(format!(
                "target size {target_w}x{target_h} must be at least 1x1"
            )));
        }

        Ok(imageops::resize(&img, target_w, target_h, FilterType::Nearest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::Effect;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn test_pixelate_preserves_dimensions() {
        let params = ParamMap::parse(&["scale=8"]);
        let out = Pixelate.apply(gradient(100, 60), &params).unwrap();
        assert_eq!(out.dimensions(), (100, 60));
    }

    #[test]
    fn test_pixelate_reduces_distinct_colors() {
        let params = ParamMap::parse(&["scale=10"]);
        let out = Pixelate.apply(gradient(100, 100), &params).unwrap();
        let distinct: std::collections::HashSet<_> = out.pixels().map(|p| p.0).collect();
        // Only the 10x10 surviving source samples can appear
        assert!(distinct.len() <= 100, "got {} distinct colors", distinct.len());
    }

    #[test]
    fn test_pixelate_scale_too_large_is_an_error() {
        let params = ParamMap::parse(&["scale=64"]);
        assert!(matches!(
            Pixelate.apply(gradient(32, 32), &params),
            Err(NebulaError::Effect(_))
        ));
    }

    #[test]
    fn test_pixelate_zero_scale_is_an_error() {
        let params = ParamMap::parse(&["scale=0"]);
        assert!(matches!(
            Pixelate.apply(gradient(32, 32), &params),
            Err(NebulaError::Effect(_))
        ));
    }

    #[test]
    fn test_resize_exact() {
        let params = ParamMap::parse(&["width=40", "height=30"]);
        let out = Resize.apply(gradient(100, 50), &params).unwrap();
        assert_eq!(out.dimensions(), (40, 30));
    }

    #[test]
    fn test_resize_derives_height_rounded() {
        let params = ParamMap::parse(&["width=40"]);
        let out = Resize.apply(gradient(100, 50), &params).unwrap();
        assert_eq!(out.dimensions(), (40, 20));

        // 75 * 40/100 = 30 exactly; 75 * 33/100 = 24.75 rounds up
        let params = ParamMap::parse(&["width=33"]);
        let out = Resize.apply(gradient(100, 75), &params).unwrap();
        assert_eq!(out.dimensions(), (33, 25));
    }

    #[test]
    fn test_resize_derives_width_rounded() {
        let params = ParamMap::parse(&["height=25"]);
        let out = Resize.apply(gradient(100, 50), &params).unwrap();
        assert_eq!(out.dimensions(), (50, 25));
    }

    #[test]
    fn test_resize_without_params_is_identity() {
        let img = gradient(30, 20);
        let params = ParamMap::parse::<&str>(&[]);
        let out = Resize.apply(img.clone(), &params).unwrap();
        assert_eq!(img, out);
    }

    #[test]
    fn test_resize_to_zero_is_an_error() {
        let params = ParamMap::parse(&["width=0"]);
        assert!(matches!(
            Resize.apply(gradient(30, 20), &params),
            Err(NebulaError::Effect(_))
        ));
    }
}
