//! Generalized cepstrum parameter conversion.
//!
//! [`gc2gc`] moves a cepstrum between generalized-log constants, and
//! [`mgc2mgc`] composes frequency warping with the gamma chain to convert
//! between arbitrary `(alpha, gamma)` parameterizations.

use crate::gain::{gnorm, ignorm};
use crate::warp::frequency_warp;
use crate::{check_alpha, check_gamma, check_input, CepstrumResult};

/// Converts a generalized cepstrum from one gamma to another.
///
/// The conversion is a convolution recursion computed in strictly
/// increasing output index `m`, since each step consumes the already
/// computed prefix of the output:
///
/// `c2[m] = c1[m] + (gamma2*ss2 - gamma1*ss1) / m`
///
/// where `ss1`/`ss2` are convolution sums of `c1` against the prefix of
/// `c2`, weighted by `m - k` and `k` respectively, and the `c1[m]` term is
/// dropped beyond the source order.
///
/// # Arguments
/// * `c1` - Source generalized cepstrum
/// * `gamma1` - Source generalized-log constant
/// * `target_order` - Desired order of the output (`target_order + 1` taps)
/// * `gamma2` - Destination generalized-log constant
pub fn gc2gc(
    c1: &[f64],
    gamma1: f64,
    target_order: usize,
    gamma2: f64,
) -> CepstrumResult<Vec<f64>> {
    check_input(c1)?;
    check_gamma(gamma1)?;
    check_gamma(gamma2)?;

    let source_order = c1.len() - 1;
    let mut c2 = vec![0.0; target_order + 1];
    c2[0] = c1[0];

    for m in 1..=target_order {
        let mut ss1 = 0.0;
        let mut ss2 = 0.0;
        for k in 1..=(m - 1).min(source_order) {
            let cc = c1[k] * c2[m - k];
            ss2 += k as f64 * cc;
            ss1 += (m - k) as f64 * cc;
        }

        c2[m] = (gamma2 * ss2 - gamma1 * ss1) / m as f64;
        if m <= source_order {
            c2[m] += c1[m];
        }
    }

    Ok(c2)
}

/// Converts a mel-generalized cepstrum between `(alpha, gamma)` pairs.
///
/// Composes the elementary transforms: a bilinear warp by the relative
/// all-pass constant `(alpha2 - alpha1) / (1 - alpha1*alpha2)` (skipped
/// when the relative constant is zero), then gamma normalization at
/// `gamma1`, the [`gc2gc`] recursion to `gamma2`, and inverse
/// normalization at `gamma2`.
///
/// # Arguments
/// * `c1` - Source mel-generalized cepstrum
/// * `alpha1`, `gamma1` - Source parameterization
/// * `target_order` - Desired order of the output
/// * `alpha2`, `gamma2` - Destination parameterization
pub fn mgc2mgc(
    c1: &[f64],
    alpha1: f64,
    gamma1: f64,
    target_order: usize,
    alpha2: f64,
    gamma2: f64,
) -> CepstrumResult<Vec<f64>> {
    check_input(c1)?;
    check_alpha(alpha1)?;
    check_alpha(alpha2)?;

    let alpha = (alpha2 - alpha1) / (1.0 - alpha1 * alpha2);

    let normalized = if alpha == 0.0 {
        gnorm(c1, gamma1)?
    } else {
        let warped = frequency_warp(c1, target_order, alpha)?;
        gnorm(&warped, gamma1)?
    };
    let converted = gc2gc(&normalized, gamma1, target_order, gamma2)?;
    ignorm(&converted, gamma2)
}
