//! # Image Effects
//!
//! Transformations applied to an existing image. Each family of effects
//! lives in its own module with structs implementing the [`Effect`] trait.
//!
//! ## Adding a New Effect
//!
//! 1. Implement [`Effect`] in the matching family module (or a new one)
//! 2. Add the name to [`EFFECTS`] and a match arm to [`by_name`]

use image::RgbImage;

use crate::error::NebulaError;
use crate::params::{ModeInfo, ParamDoc, ParamMap};

pub mod blur;
pub mod enhance;
pub mod geometry;
pub mod jpegify;
pub mod point;

/// All available effect modes, in display order.
pub const EFFECTS: &[&str] = &[
    "mono",
    "invert",
    "blur",
    "brightness",
    "contrast",
    "pixelate",
    "posterize",
    "solarize",
    "jpegify",
    "resize",
];

/// Trait for image effects.
///
/// Implementations consume the source buffer and return a transformed one of
/// the same dimensions, except `resize`, which returns the requested size.
pub trait Effect: Send + Sync {
    /// Mode name (lowercase, e.g., "blur"). Matched case-sensitively.
    fn name(&self) -> &'static str;

    /// One-line description for the mode catalog.
    fn description(&self) -> &'static str;

    /// Accepted parameters with defaults, for the mode catalog.
    fn param_docs(&self) -> &'static [ParamDoc] {
        &[]
    }

    /// Apply the effect.
    fn apply(&self, img: RgbImage, params: &ParamMap) -> Result<RgbImage, NebulaError>;
}

/// Get an effect by name. Names are exact; there is no aliasing.
pub fn by_name(name: &str) -> Option<Box<dyn Effect>> {
    match name {
        "mono" => Some(Box::new(point::Mono)),
        "invert" => Some(Box::new(point::Invert)),
        "blur" => Some(Box::new(blur::Blur)),
        "brightness" => Some(Box::new(enhance::Brightness)),
        "contrast" => Some(Box::new(enhance::Contrast)),
        "pixelate" => Some(Box::new(geometry::Pixelate)),
        "posterize" => Some(Box::new(point::Posterize)),
        "solarize" => Some(Box::new(point::Solarize)),
        "jpegify" => Some(Box::new(jpegify::Jpegify)),
        "resize" => Some(Box::new(geometry::Resize)),
        _ => None,
    }
}

/// Catalog records for every registered effect.
pub fn infos() -> Vec<ModeInfo> {
    EFFECTS
        .iter()
        .filter_map(|name| by_name(name))
        .map(|e| ModeInfo {
            name: e.name(),
            description: e.description(),
            params: e.param_docs(),
        })
        .collect()
}

/// Map a parameter type mismatch into an effect failure.
pub(crate) fn param_err(e: crate::params::ParamTypeError) -> NebulaError {
    NebulaError::Effect(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_effects_accessible() {
        for name in EFFECTS {
            let effect = by_name(name);
            assert!(
                effect.is_some(),
                "Effect '{name}' listed but not accessible via by_name()"
            );
            assert_eq!(effect.unwrap().name(), *name);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(by_name("Mono").is_none());
        assert!(by_name("mono").is_some());
    }

    #[test]
    fn test_infos_cover_every_mode() {
        let infos = infos();
        assert_eq!(infos.len(), EFFECTS.len());
        for (info, name) in infos.iter().zip(EFFECTS) {
            assert_eq!(info.name, *name);
            assert!(!info.description.is_empty());
        }
    }
}
