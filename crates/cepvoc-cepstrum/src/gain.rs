//! Gamma (gain) normalization of generalized cepstra.
//!
//! Normalization factors the gain out of a generalized cepstrum so that
//! tap 0 carries the gain term explicitly; [`ignorm`] is its exact inverse.
//! `gamma == 0` is an exact branch (plain log/exp on tap 0), never an
//! epsilon fallback.

use crate::{check_gamma, check_input, CepstrumResult};

/// Performs gamma normalization of a generalized cepstrum.
///
/// For `gamma == 0` the higher taps pass through and tap 0 becomes
/// `exp(c[0])`. Otherwise the gain is `1 + gamma * c[0]`: taps 1.. are
/// divided by it and tap 0 becomes `gain^(1/gamma)`.
pub fn gnorm(ceps: &[f64], gamma: f64) -> CepstrumResult<Vec<f64>> {
    check_input(ceps)?;
    check_gamma(gamma)?;

    let mut normalized = ceps.to_vec();
    if gamma == 0.0 {
        normalized[0] = ceps[0].exp();
        return Ok(normalized);
    }

    let gain = 1.0 + gamma * ceps[0];
    for tap in normalized.iter_mut().skip(1) {
        *tap /= gain;
    }
    normalized[0] = gain.powf(1.0 / gamma);
    Ok(normalized)
}

/// Performs inverse gamma normalization, undoing [`gnorm`].
///
/// For `gamma == 0` tap 0 becomes `ln(c[0])`. Otherwise the gain is
/// `c[0]^gamma`: every tap is multiplied by it and tap 0 becomes
/// `(gain - 1) / gamma`.
pub fn ignorm(normalized: &[f64], gamma: f64) -> CepstrumResult<Vec<f64>> {
    check_input(normalized)?;
    check_gamma(gamma)?;

    let mut ceps = normalized.to_vec();
    if gamma == 0.0 {
        ceps[0] = normalized[0].ln();
        return Ok(ceps);
    }

    let gain = normalized[0].powf(gamma);
    for tap in ceps.iter_mut() {
        *tap *= gain;
    }
    ceps[0] = (gain - 1.0) / gamma;
    Ok(ceps)
}
