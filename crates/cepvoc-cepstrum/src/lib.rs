//! Mel-generalized cepstrum transforms.
//!
//! This crate implements the parameter-conversion half of a parametric
//! speech vocoder: exact bidirectional transforms between cepstral
//! parameterizations controlled by two continuous constants,
//!
//! - `alpha` - the all-pass (frequency-warping) constant; `alpha = 0` is the
//!   linear frequency axis, `alpha > 0` approximates the mel scale,
//! - `gamma` - the generalized-log constant; `gamma = 0` is ordinary
//!   log-spectral analysis, `gamma = -1` is linear prediction.
//!
//! # Overview
//!
//! - [`frequency_warp`] - re-expresses a cepstrum under a different warping
//! - [`gnorm`] / [`ignorm`] - gamma (gain) normalization and its inverse
//! - [`gc2gc`] - generalized cepstrum transform between gamma values
//! - [`mgc2mgc`] - combined warping + gamma conversion
//! - [`impulse_response`] - minimum-phase impulse response reconstruction
//!
//! All functions are pure: they allocate a fresh output vector and never
//! mutate their input. A cepstrum is a `&[f64]` of `order + 1` taps; the
//! parameterization it lives in is stated explicitly by each function's
//! arguments rather than carried on the vector itself.
//!
//! # Validation
//!
//! Public operations validate their parameters (`alpha` strictly inside
//! `(-1, 1)`, `gamma` within `[-1, 0]`, non-empty input) and return a
//! [`CepstrumError`] on violation. Out-of-range parameters are rejected,
//! never clamped.

pub mod error;
pub mod gain;
pub mod impulse;
pub mod transform;
pub mod warp;

pub use error::{CepstrumError, CepstrumResult};
pub use gain::{gnorm, ignorm};
pub use impulse::impulse_response;
pub use transform::{gc2gc, mgc2mgc};
pub use warp::frequency_warp;

/// Checks that an all-pass constant is strictly inside the unit interval.
pub(crate) fn check_alpha(alpha: f64) -> CepstrumResult<()> {
    if !alpha.is_finite() || alpha <= -1.0 || alpha >= 1.0 {
        return Err(CepstrumError::InvalidAlpha { alpha });
    }
    Ok(())
}

/// Checks that a generalized-log constant lies in `[-1, 0]`.
pub(crate) fn check_gamma(gamma: f64) -> CepstrumResult<()> {
    if !gamma.is_finite() || !(-1.0..=0.0).contains(&gamma) {
        return Err(CepstrumError::InvalidGamma { gamma });
    }
    Ok(())
}

/// Checks that a cepstrum carries at least one tap.
pub(crate) fn check_input(ceps: &[f64]) -> CepstrumResult<()> {
    if ceps.is_empty() {
        return Err(CepstrumError::EmptyInput);
    }
    Ok(())
}
