//! Error types for the synthesis engine.

use cepvoc_cepstrum::CepstrumError;
use thiserror::Error;

/// Result type for vocoder operations.
pub type VocoderResult<T> = Result<T, VocoderError>;

/// Errors that can occur during waveform synthesis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VocoderError {
    /// Excitation length does not match the frame sequence.
    #[error("excitation length {actual} does not match frame count times frame shift ({expected})")]
    LengthMismatch {
        /// Expected excitation length (`frames * frame_shift`).
        expected: usize,
        /// Actual excitation length.
        actual: usize,
    },

    /// Pade approximation order other than 4 or 5.
    #[error("unsupported Pade order {order}: only 4 and 5 are supported")]
    UnsupportedPadeOrder {
        /// The requested Pade order.
        order: usize,
    },

    /// Gamma does not correspond to an integral number of filter stages.
    #[error("gamma {gamma} is not -1/k for a positive integer stage count")]
    InvalidStageCount {
        /// The offending gamma value.
        gamma: f64,
    },

    /// Frame shift of zero samples.
    #[error("frame shift must be positive")]
    InvalidFrameShift,

    /// Cepstral order of zero; both filter families require tap 1.
    #[error("cepstral order must be at least 1")]
    InvalidOrder,

    /// Frame with the wrong number of taps for the configured order.
    #[error("frame has {actual} taps, expected {expected}")]
    FrameLengthMismatch {
        /// Expected tap count (`order + 1`).
        expected: usize,
        /// Actual tap count of the offending frame.
        actual: usize,
    },

    /// Invalid cepstral parameter.
    #[error(transparent)]
    Cepstrum(#[from] CepstrumError),
}
