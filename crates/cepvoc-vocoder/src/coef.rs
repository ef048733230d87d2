//! Conversion between cepstra and recursive filter coefficients.
//!
//! Filter coefficients share the shape of a cepstrum (`order + 1` taps,
//! tap 0 carrying log gain) but live in a different domain: they are the
//! taps of the MLSA/MGLSA recursion, not a spectral envelope. The
//! synthesizer interpolates in this domain only, never on raw cepstra.

use cepvoc_cepstrum::{gnorm, CepstrumError, CepstrumResult};

/// Converts a mel-cepstrum to MLSA filter coefficients.
///
/// Single backward recursion: `b[last] = c[last]`,
/// `b[i] = c[i] - alpha * b[i+1]`.
pub fn mcep_to_filter_coef(mcep: &[f64], alpha: f64) -> Vec<f64> {
    let mut coef = vec![0.0; mcep.len()];
    if mcep.is_empty() {
        return coef;
    }

    let last = mcep.len() - 1;
    coef[last] = mcep[last];
    for i in (0..last).rev() {
        coef[i] = mcep[i] - alpha * coef[i + 1];
    }

    coef
}

/// Converts MLSA filter coefficients back to a mel-cepstrum.
///
/// Exact inverse of [`mcep_to_filter_coef`], run as the equivalent forward
/// recursion.
pub fn filter_coef_to_mcep(coef: &[f64], alpha: f64) -> Vec<f64> {
    let mut mcep = vec![0.0; coef.len()];
    if coef.is_empty() {
        return mcep;
    }

    let last = coef.len() - 1;
    mcep[last] = coef[last];
    let mut carry = coef[last];
    for i in (0..last).rev() {
        mcep[i] = coef[i] + alpha * carry;
        carry = coef[i];
    }

    mcep
}

/// Converts a mel-generalized cepstrum to MGLSA filter coefficients.
///
/// Chains the MLSA recursion with gamma normalization, then folds the gain
/// into tap 0 as a log and scales the remaining taps by gamma. Requires a
/// nonzero gamma; the MLSA path handles `gamma == 0`.
pub fn mgcep_to_filter_coef(mgcep: &[f64], alpha: f64, gamma: f64) -> CepstrumResult<Vec<f64>> {
    if gamma == 0.0 {
        return Err(CepstrumError::InvalidGamma { gamma });
    }

    let mut coef = gnorm(&mcep_to_filter_coef(mgcep, alpha), gamma)?;
    coef[0] = coef[0].ln();
    for tap in coef.iter_mut().skip(1) {
        *tap *= gamma;
    }

    Ok(coef)
}
