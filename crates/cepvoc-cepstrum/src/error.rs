//! Error types for cepstral transforms.

use thiserror::Error;

/// Result type for cepstral transform operations.
pub type CepstrumResult<T> = Result<T, CepstrumError>;

/// Errors that can occur during cepstral parameter conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CepstrumError {
    /// Input cepstrum has no coefficients.
    #[error("input cepstrum is empty")]
    EmptyInput,

    /// All-pass constant outside the stable range.
    #[error("all-pass constant out of range (-1, 1): {alpha}")]
    InvalidAlpha {
        /// The offending all-pass constant.
        alpha: f64,
    },

    /// Generalized-log constant outside the supported range.
    #[error("generalized-log constant out of range [-1, 0]: {gamma}")]
    InvalidGamma {
        /// The offending gamma value.
        gamma: f64,
    },

    /// Requested output length is zero.
    #[error("requested impulse response length must be positive")]
    InvalidLength,
}
