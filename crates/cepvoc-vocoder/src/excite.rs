//! Pulse/noise excitation generation from an F0 track.
//!
//! Voiced frames (nonzero F0) produce a train of energy-normalized glottal
//! pulses whose period is linearly interpolated between the frame's two F0
//! endpoints. Unvoiced frames (zero F0) produce random samples, uniform by
//! default or standard-normal in Gaussian mode.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{VocoderError, VocoderResult};
use crate::rng::create_rng;

/// Excitation generator driven by a frame-rate F0 track.
///
/// One instance owns one utterance's excitation state: reusing it across
/// concurrent utterances is not supported, and [`generate`](Self::generate)
/// resets the pulse timing at its start.
#[derive(Debug, Clone)]
pub struct PulseExcite {
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Samples per frame.
    pub frame_shift: usize,
    /// Draw standard-normal instead of uniform samples for unvoiced frames.
    pub use_gauss: bool,

    rng: Pcg32,
    // Samples elapsed since the last pulse; drives pulse placement across
    // frame boundaries.
    samples_since_pulse: usize,
}

impl PulseExcite {
    /// Creates a pulse excitation generator.
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `frame_shift` - Samples per frame, must be positive
    /// * `seed` - Seed for the unvoiced-noise RNG
    pub fn new(sample_rate: u32, frame_shift: usize, seed: u32) -> VocoderResult<Self> {
        if frame_shift == 0 {
            return Err(VocoderError::InvalidFrameShift);
        }
        Ok(Self {
            sample_rate,
            frame_shift,
            use_gauss: false,
            rng: create_rng(seed),
            samples_since_pulse: 0,
        })
    }

    /// Generates a full excitation signal from an F0 sequence.
    ///
    /// Frame `i` interpolates from F0 value `i - 1` to value `i`; the first
    /// frame pairs with itself. The pulse timing counter is reset at the
    /// start, so each call describes an independent utterance.
    ///
    /// # Returns
    /// `f0_sequence.len() * frame_shift` excitation samples.
    pub fn generate(&mut self, f0_sequence: &[f64]) -> Vec<f64> {
        let mut excite = Vec::with_capacity(f0_sequence.len() * self.frame_shift);

        self.samples_since_pulse = 0;
        for (i, &curr_f0) in f0_sequence.iter().enumerate() {
            let prev_f0 = if i > 0 { f0_sequence[i - 1] } else { curr_f0 };
            excite.extend(self.generate_one_frame(prev_f0, curr_f0));
        }

        excite
    }

    /// Generates one frame of excitation from two successive F0 values.
    ///
    /// If either endpoint is zero the frame is unvoiced: the pulse counter
    /// resets and the frame fills with random samples. Otherwise the pitch
    /// *period* (`sample_rate / f0`) is interpolated linearly across the
    /// frame and a pulse of height `sqrt(period)` fires whenever the
    /// running counter exceeds the local period.
    pub fn generate_one_frame(&mut self, prev_f0: f64, curr_f0: f64) -> Vec<f64> {
        let mut excite = vec![0.0; self.frame_shift];

        if prev_f0 == 0.0 || curr_f0 == 0.0 {
            self.samples_since_pulse = 0;
            for sample in excite.iter_mut() {
                *sample = if self.use_gauss {
                    self.next_gaussian()
                } else {
                    self.rng.gen::<f64>()
                };
            }
            return excite;
        }

        let prev_period = f64::from(self.sample_rate) / prev_f0;
        let curr_period = f64::from(self.sample_rate) / curr_f0;
        let slope = (curr_period - prev_period) / self.frame_shift as f64;

        for (i, sample) in excite.iter_mut().enumerate() {
            let period = prev_period + slope * i as f64;
            if self.samples_since_pulse > period as usize {
                // Pulse height preserves energy across varying periods.
                *sample = period.sqrt();
                self.samples_since_pulse -= period as usize;
            }
            self.samples_since_pulse += 1;
        }

        excite
    }

    /// Draws a standard-normal sample via the Box-Muller transform.
    fn next_gaussian(&mut self) -> f64 {
        // 1 - u maps [0, 1) to (0, 1], keeping the log finite.
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_output_length() {
        let mut excite = PulseExcite::new(44100, 441, 42).unwrap();
        let f0 = vec![
            100.0, 100.0, 99.0, 98.0, 97.0, 0.0, 0.0, 0.0, 0.0, 70.0, 71.0, 72.0,
        ];
        let signal = excite.generate(&f0);
        assert_eq!(signal.len(), f0.len() * 441);
    }

    #[test]
    fn test_constant_f0_pulse_spacing() {
        let sample_rate = 16000;
        let f0_value = 100.0;
        let period = sample_rate as f64 / f0_value; // 160 samples
        let expected_height = period.sqrt();

        let mut excite = PulseExcite::new(sample_rate, 80, 42).unwrap();
        let f0 = vec![f0_value; 10];
        let signal = excite.generate(&f0);

        let pulse_positions: Vec<usize> = signal
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, _)| i)
            .collect();
        assert!(pulse_positions.len() >= 2);

        for &pos in &pulse_positions {
            assert!((signal[pos] - expected_height).abs() < 1e-12);
        }
        for pair in pulse_positions.windows(2) {
            assert_eq!(pair[1] - pair[0], period as usize);
        }
    }

    #[test]
    fn test_unvoiced_frames_are_noise() {
        let mut excite = PulseExcite::new(16000, 80, 42).unwrap();
        let frame = excite.generate_one_frame(0.0, 100.0);

        assert_eq!(frame.len(), 80);
        // Uniform noise lies in [0, 1) and is essentially never all equal.
        assert!(frame.iter().all(|&v| (0.0..1.0).contains(&v)));
        assert!(frame.iter().any(|&v| v != frame[0]));
    }

    #[test]
    fn test_gaussian_mode_changes_distribution() {
        let mut uniform = PulseExcite::new(16000, 4000, 42).unwrap();
        let mut gauss = PulseExcite::new(16000, 4000, 42).unwrap();
        gauss.use_gauss = true;

        let u = uniform.generate_one_frame(0.0, 0.0);
        let g = gauss.generate_one_frame(0.0, 0.0);

        assert!(u.iter().all(|&v| (0.0..1.0).contains(&v)));
        // Standard-normal samples fall outside [0, 1) about two thirds of
        // the time; 4000 samples make a false pass implausible.
        assert!(g.iter().any(|&v| !(0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_generate_resets_pulse_timing() {
        let mut excite = PulseExcite::new(16000, 80, 42).unwrap();
        let f0 = vec![100.0; 8];

        // Voiced-only generation is deterministic, and the counter reset
        // makes consecutive runs identical.
        let first = excite.generate(&f0);
        let second = excite.generate(&f0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let f0 = vec![0.0; 4];

        let mut a = PulseExcite::new(16000, 80, 7).unwrap();
        let mut b = PulseExcite::new(16000, 80, 7).unwrap();
        assert_eq!(a.generate(&f0), b.generate(&f0));

        let mut c = PulseExcite::new(16000, 80, 8).unwrap();
        assert_ne!(a.generate(&f0), c.generate(&f0));
    }

    #[test]
    fn test_rejects_zero_frame_shift() {
        assert!(matches!(
            PulseExcite::new(16000, 0, 42),
            Err(VocoderError::InvalidFrameShift)
        ));
    }
}
