//! Mel Generalized Log Spectral Approximation (MGLSA) digital filter.
//!
//! The MGLSA filter generalizes the MLSA filter to nonzero gamma: instead
//! of a Pade approximation of the exponential, it cascades
//! `num_stage = -1/gamma` identical base filters, each realizing one factor
//! of the generalized-log transfer function. It is the synthesis filter for
//! mel-generalized cepstra (`gamma < 0`).

/// Base filter of the MGLSA cascade.
#[derive(Debug, Clone)]
pub struct MglsaBaseFilter {
    alpha: f64,
    delay: Vec<f64>,
}

impl MglsaBaseFilter {
    /// Creates a base filter for the given cepstral order and all-pass
    /// constant, with an all-zero delay line.
    pub fn new(order: usize, alpha: f64) -> Self {
        Self {
            alpha,
            delay: vec![0.0; order + 1],
        }
    }

    /// Filters one sample against the supplied coefficients.
    pub fn filter(&mut self, sample: f64, coef: &[f64]) -> f64 {
        debug_assert!(coef.len() <= self.delay.len());
        let alpha = self.alpha;

        let mut y = self.delay[0] * coef[1];
        for i in 1..coef.len() - 1 {
            self.delay[i] += alpha * (self.delay[i + 1] - self.delay[i - 1]);
            y += self.delay[i] * coef[i + 1];
        }

        let result = sample - y;

        // t <- t + 1
        for i in (1..self.delay.len()).rev() {
            self.delay[i] = self.delay[i - 1];
        }
        self.delay[0] = alpha * self.delay[0] + (1.0 - alpha * alpha) * result;

        result
    }
}

/// MGLSA synthesis filter: a cascade of identical base filters.
#[derive(Debug, Clone)]
pub struct MglsaFilter {
    stages: Vec<MglsaBaseFilter>,
}

impl MglsaFilter {
    /// Creates an MGLSA filter with `num_stage` cascaded base filters.
    ///
    /// `num_stage` is `-1/gamma` for the gamma the coefficients were
    /// prepared with.
    pub fn new(order: usize, alpha: f64, num_stage: usize) -> Self {
        Self {
            stages: (0..num_stage)
                .map(|_| MglsaBaseFilter::new(order, alpha))
                .collect(),
        }
    }

    /// Filters one sample given MGLSA filter coefficients of the configured
    /// order (`order + 1` taps, tap 0 carrying log gain and ignored here).
    pub fn filter(&mut self, sample: f64, coef: &[f64]) -> f64 {
        let mut filtered = sample;
        for stage in self.stages.iter_mut() {
            filtered = stage.filter(filtered, coef);
        }
        filtered
    }
}
