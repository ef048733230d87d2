//! Minimum-phase impulse response reconstruction.

use crate::{check_input, CepstrumError, CepstrumResult};

/// Reconstructs the minimum-phase impulse response of a cepstrum.
///
/// Uses the standard recursion `h[0] = exp(c[0])` and
/// `h[n] = (1/n) * sum_{k=1}^{min(n, order)} k * c[k] * h[n-k]`.
///
/// # Arguments
/// * `ceps` - Cepstral coefficients (`order + 1` taps)
/// * `length` - Number of impulse response samples to produce, must be positive
pub fn impulse_response(ceps: &[f64], length: usize) -> CepstrumResult<Vec<f64>> {
    check_input(ceps)?;
    if length == 0 {
        return Err(CepstrumError::InvalidLength);
    }

    let order = ceps.len() - 1;
    let mut h = vec![0.0; length];

    h[0] = ceps[0].exp();
    for n in 1..length {
        let mut acc = 0.0;
        for k in 1..=n.min(order) {
            acc += k as f64 * ceps[k] * h[n - k];
        }
        h[n] = acc / n as f64;
    }

    Ok(h)
}
