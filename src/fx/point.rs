//! # Point Effects
//!
//! Per-channel lookups with no neighborhood or global state: mono, invert,
//! posterize, solarize.

use image::{Rgb, RgbImage};

use crate::error::NebulaError;
use crate::params::{ParamDoc, ParamMap};

/// Grayscale conversion, luminance replicated across channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mono;

/// Per-channel negation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

/// Keep only the top `bits` bits of each channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posterize;

/// Invert only channel values strictly above a threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solarize;

const POSTERIZE_PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "bits",
    default: "4",
    help: "Bits to keep per channel (1-8)",
}];

const SOLARIZE_PARAMS: &[ParamDoc] = &[ParamDoc {
    name: "threshold",
    default: "128",
    help: "Channel values above this are inverted (0-255)",
}];

/// Rec.601 integer luminance, rounded.
pub(crate) fn luminance(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

fn map_channels(mut img: RgbImage, f: impl Fn(u8) -> u8) -> RgbImage {
    for pixel in img.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = f(*channel);
        }
    }
    img
}

impl super::Effect for Mono {
    fn name(&self) -> &'static str {
        "mono"
    }

    fn description(&self) -> &'static str {
        "Converts the image to grayscale"
    }

    fn apply(&self, mut img: RgbImage, _params: &ParamMap) -> Result<RgbImage, NebulaError> {
        for pixel in img.pixels_mut() {
            let l = luminance(*pixel);
            *pixel = Rgb([l, l, l]);
        }
        Ok(img)
    }
}

impl super::Effect for Invert {
    fn name(&self) -> &'static str {
        "invert"
    }

    fn description(&self) -> &'static str {
        "Inverts the color values of the image"
    }

    fn apply(&self, img: RgbImage, _params: &ParamMap) -> Result<RgbImage, NebulaError> {
        Ok(map_channels(img, |v| 255 - v))
    }
}

impl super::Effect for Posterize {
    fn name(&self) -> &'static str {
        "posterize"
    }

    fn description(&self) -> &'static str {
        "Reduces the number of bits per color channel"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        POSTERIZE_PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let bits = params
            .get_u32("bits")
            .map_err(super::param_err)?
            .unwrap_or(4);
        if !(1..=8).contains(&bits) {
            return Err(NebulaError::Effect(format!(
                "bits must be between 1 and 8 (got {bits})"
            )));
        }
        let mask = 0xFFu8 << (8 - bits);
        Ok(map_channels(img, move |v| v & mask))
    }
}

impl super::Effect for Solarize {
    fn name(&self) -> &'static str {
        "solarize"
    }

    fn description(&self) -> &'static str {
        "Inverts all pixels brighter than a threshold"
    }

    fn param_docs(&self) -> &'static [ParamDoc] {
        SOLARIZE_PARAMS
    }

    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError> {
        let threshold = params
            .get_u32("threshold")
            .map_err(super::param_err)?
            .unwrap_or(128);
        if threshold > 255 {
            return Err(NebulaError::Effect(format!(
                "threshold must be between 0 and 255 (got {threshold})"
            )));
        }
        Ok(map_channels(img, move |v| {
            if u32::from(v) > threshold { 255 - v } else { v }
        }))
    }
}
