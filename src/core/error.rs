//! Centralised error types used across the crate.

use thiserror::Error;

/// Faults building or looking up a glyph ramp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("a ramp needs exactly 9 glyphs, got {0}")]
    WrongLength(usize),
    #[error("unknown ramp `{0}` (expected block, nice, braille or dots)")]
    UnknownName(String),
}

/// Faults turning text into a value sequence.
///
/// `position` is the 1-based index of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValuesError {
    #[error("field {position}: invalid number '{text}'")]
    BadFloat { position: usize, text: String },
    #[error("field {position}: '{text}' is not a finite number")]
    NonFinite { position: usize, text: String },
}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_width must be at least 1")]
    ZeroWidth,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SparkError {
    #[error("value {value} at index {index} is not finite")]
    NonFinite { index: usize, value: f64 },
    #[error(transparent)]
    Ramp(#[from] RampError),
    #[error(transparent)]
    Parse(#[from] ParseValuesError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for the crate's fallible operations.
pub type Result<T> = std::result::Result<T, SparkError>;
