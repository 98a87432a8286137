//! # Nebula - Procedural Image Synthesis and Effects
//!
//! Nebula is a Rust library for generating raster images from named
//! algorithms and transforming existing images with named effects. It
//! provides:
//!
//! - **Generators**: noise, plasma, escape-time fractals, chaos-game and
//!   recursive-curve constructions
//! - **Effects**: grayscale, inversion, blur, enhancement, resampling,
//!   posterize/solarize, deliberate JPEG degradation
//! - **Dispatch**: a uniform `key=value` parameter interface over fixed
//!   name registries, returning encoded PNG bytes
//!
//! ## Quick Start
//!
//! ```
//! use nebula::engine;
//!
//! // Render a 256x256 Mandelbrot set as PNG bytes
//! let png = engine::generate("mandelbrot", 256, 256, &["max_iter=100"])?;
//!
//! // Posterize it down to 8 levels per channel
//! let out = engine::apply_effect("posterize", &png, &["bits=3"])?;
//!
//! # assert!(!out.is_empty());
//! # Ok::<(), nebula::NebulaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`engine`] | Entry points: generate / apply_effect |
//! | [`art`] | Generator implementations and registry |
//! | [`fx`] | Effect implementations and registry |
//! | [`params`] | `key=value` token parsing |
//! | [`codec`] | PNG/JPEG encode and decode |
//! | [`error`] | Error types |
//!
//! Parameter values are parsed as closed-form literals only (bool, integer,
//! float, string); there is no expression evaluation path anywhere.

pub mod art;
pub mod codec;
pub mod engine;
pub mod error;
pub mod fx;
pub mod params;
pub mod suggest;

// Re-exports for convenience
pub use error::{ModeKind, NebulaError};
pub use params::{ParamMap, ParamValue};
