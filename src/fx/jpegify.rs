//! # Jpegify
//!
//! Push the image through JPEG at a caller-chosen quality and decode it
//! back, so the compression artifacts survive into the PNG the caller
//! receives. Low quality means heavy artifacts.

use image::RgbImage;

use crate::codec;
use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

const DEFAULT_QUALITY: u32 = 10;

const PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "quality",
    default: "10",
    help: "JPEG quality (1-100); lower means more artifacts",
}];

/// Deliberate JPEG degradation effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jpegify;

impl super::Effect for Jpegify {
    fn name(&self) -> &'static str {
        "jpegify"
    }

    fn description(&self) -> &'static str {
        "Round-trips the image through low-quality JPEG (output stays PNG)"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let quality = params
            .get_u32("quality")
            .map_err(super::param_err)?
            .unwrap_or(DEFAULT_QUALITY);
        if !(1..=100).contains(&quality) {
            return Err(NebulaError::Effect(format!(
                "quality must be between 1 and 100 (got {quality})"
            )));
        }
        codec::jpeg_roundtrip(&img, quality as u8)
            .map_err(|e| NebulaError::Effect(format!("JPEG round-trip failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::Effect;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 3) as u8, (y * 5) as u8, 80]))
    }

    #[test]
    fn test_jpegify_preserves_dimensions() {
        let params = ParamMap::parse::<&str>(&[]);
        let out = Jpegify.apply(gradient(50, 30), &params).unwrap();
        assert_eq!(out.dimensions(), (50, 30));
    }

    #[test]
    fn test_low_quality_mangles_the_image() {
        let params = ParamMap::parse(&["quality=1"]);
        let img = gradient(64, 64);
        let out = Jpegify.apply(img.clone(), &params).unwrap();
        assert_ne!(img, out);
    }

    #[test]
    fn test_quality_out_of_range_is_an_error() {
        for bad in ["quality=0", "quality=101"] {
            let params = ParamMap::parse(&[bad]);
            assert!(matches!(
                Jpegify.apply(gradient(8, 8), &params),
                Err(NebulaError::Effect(_))
            ));
        }
    }
}
