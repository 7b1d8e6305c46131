//! Error types for multiscalar multiplication.

use thiserror::Error;

/// Errors returned by the multiscalar multiplication engines and their
/// configuration.
#[derive(Debug, Error)]
pub enum MsmError {
    /// The scalar and point inputs have different lengths.
    #[error("got {scalars} scalars for {points} points")]
    LengthMismatch { scalars: usize, points: usize },

    /// An optional point was `None`, typically because it failed to decode.
    #[error("point at position {index} is missing")]
    MissingPoint { index: usize },

    /// A subset multiplication named a static point that was never precomputed.
    #[error("static point index {index} is out of range for {len} precomputed points")]
    IndexOutOfRange { index: usize, len: usize },

    /// A NAF width outside the supported range.
    #[error("{name} must be between 2 and 8, got {width}")]
    InvalidWindow { name: &'static str, width: usize },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}
