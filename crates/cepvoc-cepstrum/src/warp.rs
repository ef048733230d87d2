//! Bilinear frequency warping of cepstral coefficients.

use crate::{check_alpha, check_input, CepstrumResult};

/// Re-expresses a cepstrum under a different frequency warping.
///
/// Runs the all-pass recursion that converts a cepstrum defined at one
/// warping constant into a cepstrum at another, given the *relative*
/// warping `alpha = (alpha2 - alpha1) / (1 - alpha1 * alpha2)`. The
/// recursion is exact; there is no iterative convergence involved.
///
/// # Arguments
/// * `ceps` - Input cepstrum, any order
/// * `order` - Desired order of the warped cepstrum (output has `order + 1` taps)
/// * `alpha` - Relative all-pass constant, strictly inside `(-1, 1)`
///
/// # Returns
/// The warped cepstrum with `order + 1` coefficients.
pub fn frequency_warp(ceps: &[f64], order: usize, alpha: f64) -> CepstrumResult<Vec<f64>> {
    check_input(ceps)?;
    check_alpha(alpha)?;

    let mut warped = vec![0.0; order + 1];
    let mut prev = vec![0.0; order + 1];

    // Feed input taps from the highest index down to 0.
    for tap in ceps.iter().rev() {
        prev.copy_from_slice(&warped);
        warped[0] = tap + alpha * prev[0];
        if order >= 1 {
            warped[1] = (1.0 - alpha * alpha) * prev[0] + alpha * prev[1];
        }
        for m in 2..=order {
            warped[m] = prev[m - 1] + alpha * (prev[m] - warped[m - 1]);
        }
    }

    Ok(warped)
}
