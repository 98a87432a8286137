//! # Error Types
//!
//! This module defines error types used throughout the nebula library.

use thiserror::Error;

use crate::suggest;

/// Which registry a mode name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Generator,
    Effect,
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeKind::Generator => write!(f, "generator"),
            ModeKind::Effect => write!(f, "effect"),
        }
    }
}

/// Main error type for nebula operations
#[derive(Debug, Error)]
pub enum NebulaError {
    /// Mode name not present in the relevant registry
    #[error("Unknown {kind} mode '{mode}'. {detail}")]
    UnknownMode {
        kind: ModeKind,
        mode: String,
        detail: String,
    },

    /// Requested canvas larger than the fixed cap
    #[error("Max size is {max} to prevent overload (requested {width}x{height})", max = crate::engine::MAX_DIMENSION)]
    SizeExceeded { width: u32, height: u32 },

    /// An effect was requested but no source image could be obtained
    #[error("No source image provided")]
    MissingInput,

    /// A generator failed mid-computation
    #[error("Generation failed: {0}")]
    Generation(String),

    /// An effect failed mid-computation
    #[error("Effect failed: {0}")]
    Effect(String),

    /// Image encode/decode error
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NebulaError {
    /// Build an [`UnknownMode`](NebulaError::UnknownMode) error that lists the
    /// valid names and, when a close match exists, a "did you mean" hint.
    pub fn unknown_mode(kind: ModeKind, mode: &str, available: &[&str]) -> Self {
        let mut detail = format!("Available modes: {}", available.join(", "));
        if let Some(closest) = suggest::closest(mode, available) {
            detail.push_str(&format!(". Did you mean '{closest}'?"));
        }
        NebulaError::UnknownMode {
            kind,
            mode: mode.to_string(),
            detail,
        }
    }
}
