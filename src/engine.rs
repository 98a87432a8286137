//! # Engine
//!
//! The two entry points external callers consume: generate an image from a
//! mode name, and apply an effect to a supplied image. Both return encoded
//! PNG bytes ready for transport, named via [`output_filename`].
//!
//! ## Concurrency
//!
//! Every invocation is a pure function of its arguments (plus an RNG for the
//! stochastic generators): no shared state, nothing to lock. Both entry
//! points run synchronously on the calling thread and are CPU-bound, so a
//! dispatcher serving interactive traffic should run them on a worker pool
//! (`std::thread` or `spawn_blocking`) and enforce its own timeout. The
//! algorithms have no internal suspension points; an abandoned invocation
//! just gets dropped with its buffer. The escape-time fractals parallelize
//! across rows internally via rayon.

use crate::art;
use crate::codec;
use crate::error::{ModeKind, NebulaError};
use crate::fx;
use crate::params::ParamMap;
use image::RgbImage;

/// Maximum canvas width or height, enforced before any generation work.
pub const MAX_DIMENSION: u32 = 1024;

/// Generate an image and encode it as PNG bytes.
///
/// `tokens` are raw `key=value` strings; see [`ParamMap::parse`] for the
/// literal grammar. Fails fast on oversized canvases and unknown modes.
pub fn generate<S: AsRef<str>>(
    mode: &str,
    width: u32,
    height: u32,
    tokens: &[S],
) -> Result<Vec<u8>, NebulaError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(NebulaError::SizeExceeded { width, height });
    }
    if width == 0 || height == 0 {
        return Err(NebulaError::Generation(
            "width and height must be at least 1".to_string(),
        ));
    }

    let generator = art::by_name(mode)
        .ok_or_else(|| NebulaError::unknown_mode(ModeKind::Generator, mode, art::GENERATORS))?;

    let params = ParamMap::parse(tokens);
    let img = generator.generate(width, height, &params)?;
    Ok(codec::encode_png(&img)?)
}

/// Apply an effect to encoded source bytes and return PNG bytes.
///
/// The source may be in any format the codec understands; it is normalized
/// to RGB before the effect runs. Empty input is [`NebulaError::MissingInput`].
pub fn apply_effect<S: AsRef<str>>(
    mode: &str,
    source: &[u8],
    tokens: &[S],
) -> Result<Vec<u8>, NebulaError> {
    if source.is_empty() {
        return Err(NebulaError::MissingInput);
    }
    let img = codec::decode(source)
        .map_err(|e| NebulaError::Effect(format!("could not decode source image: {e}")))?;
    let out = apply_effect_image(mode, img, tokens)?;
    Ok(codec::encode_png(&out)?)
}

/// Apply an effect to an already-decoded buffer.
///
/// For callers that hold an [`RgbImage`] and want to skip the byte-level
/// round trip (or chain several effects before encoding once).
pub fn apply_effect_image<S: AsRef<str>>(
    mode: &str,
    img: RgbImage,
    tokens: &[S],
) -> Result<RgbImage, NebulaError> {
    let effect = fx::by_name(mode)
        .ok_or_else(|| NebulaError::unknown_mode(ModeKind::Effect, mode, fx::EFFECTS))?;
    let params = ParamMap::parse(tokens);
    effect.apply(img, &params)
}

/// Transport file name for a result produced by `mode`.
pub fn output_filename(mode: &str) -> String {
    format!("{mode}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PARAMS: &[&str] = &[];

    #[test]
    fn test_generate_returns_png() {
        let bytes = generate("white_noise", 16, 16, NO_PARAMS).unwrap();
        let img = codec::decode(&bytes).unwrap();
        assert_eq!(img.dimensions(), (16, 16));
    }

    #[test]
    fn test_generate_rejects_oversized_canvas() {
        let err = generate("white_noise", 2000, 16, NO_PARAMS).unwrap_err();
        assert!(matches!(
            err,
            NebulaError::SizeExceeded {
                width: 2000,
                height: 16
            }
        ));

        let err = generate("white_noise", 16, 1025, NO_PARAMS).unwrap_err();
        assert!(matches!(err, NebulaError::SizeExceeded { .. }));
    }

    #[test]
    fn test_generate_accepts_the_cap_exactly() {
        let bytes = generate("white_noise", 1024, 1, NO_PARAMS).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_generate_rejects_zero_dimension() {
        assert!(matches!(
            generate("white_noise", 0, 16, NO_PARAMS),
            Err(NebulaError::Generation(_))
        ));
    }

    #[test]
    fn test_generate_unknown_mode() {
        let err = generate("not_a_real_mode", 16, 16, NO_PARAMS).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, NebulaError::UnknownMode { .. }));
        for name in art::GENERATORS {
            assert!(msg.contains(name), "error must list '{name}'");
        }
    }

    #[test]
    fn test_effect_unknown_mode_lists_effect_names() {
        let png = generate("white_noise", 8, 8, NO_PARAMS).unwrap();
        let err = apply_effect("not_a_real_mode", &png, NO_PARAMS).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("effect mode"));
        for name in fx::EFFECTS {
            assert!(msg.contains(name), "error must list '{name}'");
        }
    }

    #[test]
    fn test_effect_missing_input() {
        assert!(matches!(
            apply_effect("mono", &[], NO_PARAMS),
            Err(NebulaError::MissingInput)
        ));
    }

    #[test]
    fn test_effect_undecodable_input() {
        let err = apply_effect("mono", &[1, 2, 3, 4], NO_PARAMS).unwrap_err();
        assert!(matches!(err, NebulaError::Effect(_)));
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("blur"), "blur.png");
        assert_eq!(output_filename("koch_snowflake"), "koch_snowflake.png");
    }
}
