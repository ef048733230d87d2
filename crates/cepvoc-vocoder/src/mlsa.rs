//! Mel Log Spectral Approximation (MLSA) digital filter.
//!
//! The MLSA filter realizes the exponential transfer function of a
//! mel-cepstral envelope as a recursive filter, using a Pade approximation
//! of `exp(x)` over a cascade of all-pass base filters. It is the synthesis
//! filter for ordinary mel-cepstra (`gamma == 0`).
//!
//! The filter is split into two cascade stages: the first handles the
//! coefficient at tap 1 alone, the second the remaining taps. Every call to
//! [`MlsaFilter::filter`] advances the internal delay lines by exactly one
//! sample; the caller owns exactly one instance per synthesis run.

use crate::error::{VocoderError, VocoderResult};

/// Pade coefficients for approximation order 4.
const PADE_4: [f64; 5] = [1.0, 4.999273e-1, 1.067005e-1, 1.170221e-2, 5.656279e-4];

/// Pade coefficients for approximation order 5.
const PADE_5: [f64; 6] = [
    1.0,
    4.999391e-1,
    1.107098e-1,
    1.369984e-2,
    9.564853e-4,
    3.041721e-5,
];

/// Elementary all-pass base filter of the MLSA cascade.
#[derive(Debug, Clone)]
pub struct MlsaBaseFilter {
    alpha: f64,
    delay: Vec<f64>,
}

impl MlsaBaseFilter {
    /// Creates a base filter for the given cepstral order and all-pass
    /// constant, with an all-zero delay line.
    pub fn new(order: usize, alpha: f64) -> Self {
        Self {
            alpha,
            delay: vec![0.0; order + 1],
        }
    }

    /// Filters one sample against the supplied coefficients.
    ///
    /// `coef.len()` must not exceed the delay line length; the caller
    /// guarantees the match between configured order and coefficients.
    pub fn filter(&mut self, sample: f64, coef: &[f64]) -> f64 {
        debug_assert!(coef.len() < self.delay.len());
        let alpha = self.alpha;

        self.delay[0] = sample;
        self.delay[1] = (1.0 - alpha * alpha) * self.delay[0] + alpha * self.delay[1];

        let mut result = 0.0;
        for i in 2..coef.len() {
            self.delay[i] += alpha * (self.delay[i + 1] - self.delay[i - 1]);
            result += self.delay[i] * coef[i];
        }

        // Degenerate two-tap configuration feeds tap 1 directly.
        if coef.len() == 2 {
            result += self.delay[1] * coef[1];
        }

        // t <- t + 1
        for i in (2..self.delay.len()).rev() {
            self.delay[i] = self.delay[i - 1];
        }

        result
    }
}

/// Cascade of base filters combined through Pade coefficients.
#[derive(Debug, Clone)]
pub struct MlsaCascadeFilter {
    stages: Vec<MlsaBaseFilter>,
    pade: &'static [f64],
    delay: Vec<f64>,
}

impl MlsaCascadeFilter {
    /// Creates a cascade of `pade_order + 1` base filters.
    ///
    /// Only Pade orders 4 and 5 are supported; anything else is an error.
    pub fn new(order: usize, alpha: f64, pade_order: usize) -> VocoderResult<Self> {
        let pade: &'static [f64] = match pade_order {
            4 => &PADE_4,
            5 => &PADE_5,
            _ => return Err(VocoderError::UnsupportedPadeOrder { order: pade_order }),
        };

        Ok(Self {
            stages: (0..=pade_order)
                .map(|_| MlsaBaseFilter::new(order, alpha))
                .collect(),
            pade,
            delay: vec![0.0; pade_order + 1],
        })
    }

    /// Filters one sample through the cascade.
    ///
    /// Stage outputs are weighted by the Pade coefficients with alternating
    /// sign into a feedback term that is added back onto the input.
    pub fn filter(&mut self, sample: f64, coef: &[f64]) -> f64 {
        let mut result = 0.0;
        let mut feedback = 0.0;

        for i in (1..self.pade.len()).rev() {
            self.delay[i] = self.stages[i].filter(self.delay[i - 1], coef);
            let val = self.delay[i] * self.pade[i];
            if i % 2 == 1 {
                feedback += val;
            } else {
                feedback -= val;
            }
            result += val;
        }

        self.delay[0] = feedback + sample;
        result + self.delay[0]
    }
}

/// Two-stage MLSA synthesis filter.
///
/// The first stage realizes the tap-1 coefficient, the second the remaining
/// taps; their product approximates the full exponential transfer function.
#[derive(Debug, Clone)]
pub struct MlsaFilter {
    stage1: MlsaCascadeFilter,
    stage2: MlsaCascadeFilter,
}

impl MlsaFilter {
    /// Creates an MLSA filter for the given cepstral order, all-pass
    /// constant and Pade order (4 or 5).
    pub fn new(order: usize, alpha: f64, pade_order: usize) -> VocoderResult<Self> {
        Ok(Self {
            stage1: MlsaCascadeFilter::new(2, alpha, pade_order)?,
            stage2: MlsaCascadeFilter::new(order + 1, alpha, pade_order)?,
        })
    }

    /// Filters one sample given MLSA filter coefficients of the configured
    /// order (`order + 1` taps, tap 0 carrying log gain and ignored here).
    pub fn filter(&mut self, sample: f64, coef: &[f64]) -> f64 {
        let first_stage_coef = [0.0, coef[1]];
        let mid = self.stage1.filter(sample, &first_stage_coef);
        self.stage2.filter(mid, coef)
    }
}
