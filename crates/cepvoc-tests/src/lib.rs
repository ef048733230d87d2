//! End-to-end test infrastructure for the cepvoc synthesis pipeline.
//!
//! Integration tests drive the full chain (F0 track -> excitation ->
//! coefficient conversion -> digital filter -> waveform) and verify the
//! output in the frequency domain. This crate holds the shared analysis
//! helpers:
//!
//! - [`spectral_peak_hz`] - dominant non-DC frequency of a waveform
//! - [`power_spectrum`] - magnitude-squared FFT of a real signal
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cepvoc-tests
//! ```

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Computes the power spectrum (magnitude squared, first half) of a real
/// signal.
pub fn power_spectrum(signal: &[f64]) -> Vec<f64> {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(signal.len());

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    buffer
        .iter()
        .take(signal.len() / 2)
        .map(|c| c.norm_sqr())
        .collect()
}

/// Returns the frequency in Hz of the strongest non-DC bin.
///
/// Bin 0 is excluded: a one-sided pulse train carries a large DC line that
/// is not part of the pitch structure.
pub fn spectral_peak_hz(signal: &[f64], sample_rate: u32) -> f64 {
    let spectrum = power_spectrum(signal);
    let peak_bin = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);

    peak_bin as f64 * f64::from(sample_rate) / signal.len() as f64
}
