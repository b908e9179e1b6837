//! Error types for the harmonic synthesis core.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while building or rendering a waveform.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate { rate: u32 },

    /// Non-positive or non-finite duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration { duration: f64 },

    /// Non-positive or non-finite fundamental.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency { freq: f64 },

    /// The active mask does not line up with the harmonic table.
    #[error("active mask has {found} entries, expected {expected}")]
    MaskLength { expected: usize, found: usize },

    /// A request parameter falls outside its allowed range.
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Malformed request JSON.
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// WAV encoding failure.
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),
}
