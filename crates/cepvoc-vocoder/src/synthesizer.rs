//! Frame-to-sample speech synthesis.
//!
//! A synthesizer walks a frame sequence once, converts each cepstral frame
//! to filter coefficients, linearly interpolates the coefficients across
//! the frame shift, and drives the excitation through the digital filter
//! one sample at a time. The filter's delay line is never reset between
//! frames: continuity across frame boundaries is part of the contract.

use cepvoc_cepstrum::CepstrumError;

use crate::coef::{mcep_to_filter_coef, mgcep_to_filter_coef};
use crate::error::{VocoderError, VocoderResult};
use crate::mglsa::MglsaFilter;
use crate::mlsa::MlsaFilter;

/// Parameters selecting a synthesis filter family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    /// Cepstral order (frames carry `order + 1` taps).
    pub order: usize,
    /// All-pass (frequency-warping) constant, strictly inside `(-1, 1)`.
    pub alpha: f64,
    /// Generalized-log constant in `[-1, 0]`; `0` selects the MLSA filter,
    /// a negative value the MGLSA filter with `-1/gamma` stages.
    pub gamma: f64,
    /// Samples per frame, positive.
    pub frame_shift: usize,
    /// Pade approximation order for the MLSA filter (4 or 5).
    pub pade_order: usize,
}

fn check_alpha(alpha: f64) -> VocoderResult<()> {
    if !alpha.is_finite() || alpha <= -1.0 || alpha >= 1.0 {
        return Err(CepstrumError::InvalidAlpha { alpha }.into());
    }
    Ok(())
}

/// Scales, filters and interpolates one frame of excitation.
///
/// Coefficients move from `prev_coef` to `curr_coef` along a per-tap linear
/// slope; each excitation sample is scaled by the interpolated log gain
/// (tap 0) before filtering.
fn filter_one_frame<F>(
    excite: &[f64],
    prev_coef: &[f64],
    curr_coef: &[f64],
    mut filter: F,
) -> Vec<f64>
where
    F: FnMut(f64, &[f64]) -> f64,
{
    let slope: Vec<f64> = prev_coef
        .iter()
        .zip(curr_coef.iter())
        .map(|(p, c)| (c - p) / excite.len() as f64)
        .collect();

    let mut interpolated = prev_coef.to_vec();
    let mut output = Vec::with_capacity(excite.len());
    for &sample in excite {
        let scaled = sample * interpolated[0].exp();
        output.push(filter(scaled, &interpolated));
        for (tap, step) in interpolated.iter_mut().zip(slope.iter()) {
            *tap += step;
        }
    }

    output
}

fn check_frame(frame: &[f64], order: usize) -> VocoderResult<()> {
    if frame.len() != order + 1 {
        return Err(VocoderError::FrameLengthMismatch {
            expected: order + 1,
            actual: frame.len(),
        });
    }
    Ok(())
}

fn check_lengths(excite_len: usize, num_frames: usize, frame_shift: usize) -> VocoderResult<()> {
    let expected = num_frames * frame_shift;
    if excite_len != expected {
        return Err(VocoderError::LengthMismatch {
            expected,
            actual: excite_len,
        });
    }
    Ok(())
}

/// Speech synthesizer for ordinary mel-cepstra (`gamma == 0`), backed by
/// the MLSA filter.
#[derive(Debug, Clone)]
pub struct MlsaSynthesizer {
    filter: MlsaFilter,
    frame_shift: usize,
    alpha: f64,
    order: usize,
}

impl MlsaSynthesizer {
    /// Creates an MLSA-based synthesizer.
    ///
    /// # Arguments
    /// * `order` - Mel-cepstral order, at least 1
    /// * `alpha` - All-pass constant, strictly inside `(-1, 1)`
    /// * `pade_order` - Pade approximation order, 4 or 5
    /// * `frame_shift` - Samples per frame, positive
    pub fn new(
        order: usize,
        alpha: f64,
        pade_order: usize,
        frame_shift: usize,
    ) -> VocoderResult<Self> {
        check_alpha(alpha)?;
        if order == 0 {
            return Err(VocoderError::InvalidOrder);
        }
        if frame_shift == 0 {
            return Err(VocoderError::InvalidFrameShift);
        }
        Ok(Self {
            filter: MlsaFilter::new(order, alpha, pade_order)?,
            frame_shift,
            alpha,
            order,
        })
    }

    /// Synthesizes a waveform from excitation and a mel-cepstrum sequence.
    ///
    /// Requires `excite.len() == mcep_sequence.len() * frame_shift`. Empty
    /// inputs produce an empty waveform.
    pub fn synthesis(
        &mut self,
        excite: &[f64],
        mcep_sequence: &[Vec<f64>],
    ) -> VocoderResult<Vec<f64>> {
        check_lengths(excite.len(), mcep_sequence.len(), self.frame_shift)?;

        let mut speech = Vec::with_capacity(excite.len());
        for (i, current) in mcep_sequence.iter().enumerate() {
            let previous = if i > 0 { &mcep_sequence[i - 1] } else { current };
            let start = i * self.frame_shift;
            let part = self.synthesis_one_frame(
                &excite[start..start + self.frame_shift],
                previous,
                current,
            )?;
            speech.extend(part);
        }

        Ok(speech)
    }

    /// Synthesizes one frame from two successive mel-cepstra, interpolating
    /// filter coefficients linearly between them. Both frames must carry
    /// `order + 1` taps.
    pub fn synthesis_one_frame(
        &mut self,
        excite: &[f64],
        previous_mcep: &[f64],
        current_mcep: &[f64],
    ) -> VocoderResult<Vec<f64>> {
        check_frame(previous_mcep, self.order)?;
        check_frame(current_mcep, self.order)?;

        let prev_coef = mcep_to_filter_coef(previous_mcep, self.alpha);
        let curr_coef = mcep_to_filter_coef(current_mcep, self.alpha);

        let filter = &mut self.filter;
        Ok(filter_one_frame(
            excite,
            &prev_coef,
            &curr_coef,
            |sample, coef| filter.filter(sample, coef),
        ))
    }
}

/// Speech synthesizer for mel-generalized cepstra (`gamma < 0`), backed by
/// the MGLSA filter.
#[derive(Debug, Clone)]
pub struct MglsaSynthesizer {
    filter: MglsaFilter,
    frame_shift: usize,
    alpha: f64,
    gamma: f64,
    order: usize,
}

impl MglsaSynthesizer {
    /// Creates an MGLSA-based synthesizer with `num_stage` filter stages,
    /// corresponding to `gamma = -1 / num_stage`.
    pub fn new(
        order: usize,
        alpha: f64,
        num_stage: usize,
        frame_shift: usize,
    ) -> VocoderResult<Self> {
        check_alpha(alpha)?;
        if order == 0 {
            return Err(VocoderError::InvalidOrder);
        }
        if num_stage == 0 {
            return Err(VocoderError::InvalidStageCount { gamma: 0.0 });
        }
        if frame_shift == 0 {
            return Err(VocoderError::InvalidFrameShift);
        }
        Ok(Self {
            filter: MglsaFilter::new(order, alpha, num_stage),
            frame_shift,
            alpha,
            gamma: -1.0 / num_stage as f64,
            order,
        })
    }

    /// The generalized-log constant implied by the stage count.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Synthesizes a waveform from excitation and a mel-generalized
    /// cepstrum sequence.
    ///
    /// Requires `excite.len() == mgcep_sequence.len() * frame_shift`. Empty
    /// inputs produce an empty waveform.
    pub fn synthesis(
        &mut self,
        excite: &[f64],
        mgcep_sequence: &[Vec<f64>],
    ) -> VocoderResult<Vec<f64>> {
        check_lengths(excite.len(), mgcep_sequence.len(), self.frame_shift)?;

        let mut speech = Vec::with_capacity(excite.len());
        for (i, current) in mgcep_sequence.iter().enumerate() {
            let previous = if i > 0 { &mgcep_sequence[i - 1] } else { current };
            let start = i * self.frame_shift;
            let part = self.synthesis_one_frame(
                &excite[start..start + self.frame_shift],
                previous,
                current,
            )?;
            speech.extend(part);
        }

        Ok(speech)
    }

    /// Synthesizes one frame from two successive mel-generalized cepstra.
    /// Both frames must carry `order + 1` taps.
    pub fn synthesis_one_frame(
        &mut self,
        excite: &[f64],
        previous_mgcep: &[f64],
        current_mgcep: &[f64],
    ) -> VocoderResult<Vec<f64>> {
        check_frame(previous_mgcep, self.order)?;
        check_frame(current_mgcep, self.order)?;

        let prev_coef = mgcep_to_filter_coef(previous_mgcep, self.alpha, self.gamma)?;
        let curr_coef = mgcep_to_filter_coef(current_mgcep, self.alpha, self.gamma)?;

        let filter = &mut self.filter;
        Ok(filter_one_frame(
            excite,
            &prev_coef,
            &curr_coef,
            |sample, coef| filter.filter(sample, coef),
        ))
    }
}

/// Synthesis front dispatching on the configured gamma.
///
/// The filter families form a closed set, so the choice is an enum keyed by
/// configuration rather than open-ended polymorphism.
#[derive(Debug, Clone)]
pub enum Synthesizer {
    /// MLSA synthesis (`gamma == 0`).
    Mlsa(MlsaSynthesizer),
    /// MGLSA synthesis (`gamma < 0`).
    Mglsa(MglsaSynthesizer),
}

impl Synthesizer {
    /// Builds the synthesizer selected by `config`.
    ///
    /// `gamma == 0` selects MLSA; a negative gamma selects MGLSA and must
    /// equal `-1/k` for a positive integer `k` (the stage count).
    pub fn from_config(config: &SynthesisConfig) -> VocoderResult<Self> {
        if !config.gamma.is_finite() || !(-1.0..=0.0).contains(&config.gamma) {
            return Err(CepstrumError::InvalidGamma {
                gamma: config.gamma,
            }
            .into());
        }

        if config.gamma == 0.0 {
            return Ok(Self::Mlsa(MlsaSynthesizer::new(
                config.order,
                config.alpha,
                config.pade_order,
                config.frame_shift,
            )?));
        }

        let stages = -1.0 / config.gamma;
        let num_stage = stages.round();
        if (stages - num_stage).abs() > 1e-9 || num_stage < 1.0 {
            return Err(VocoderError::InvalidStageCount {
                gamma: config.gamma,
            });
        }

        Ok(Self::Mglsa(MglsaSynthesizer::new(
            config.order,
            config.alpha,
            num_stage as usize,
            config.frame_shift,
        )?))
    }

    /// Synthesizes a waveform from excitation and a cepstral frame
    /// sequence in the parameterization the synthesizer was built for.
    pub fn synthesis(
        &mut self,
        excite: &[f64],
        frame_sequence: &[Vec<f64>],
    ) -> VocoderResult<Vec<f64>> {
        match self {
            Self::Mlsa(s) => s.synthesis(excite, frame_sequence),
            Self::Mglsa(s) => s.synthesis(excite, frame_sequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse_train(len: usize, period: usize) -> Vec<f64> {
        let mut x = vec![0.0; len];
        let mut i = 0;
        while i < len {
            x[i] = 1.0;
            i += period;
        }
        x
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let mut synth = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let frames = vec![vec![0.0; 5]; 3];
        let excite = vec![0.0; 100];

        let err = synth.synthesis(&excite, &frames).unwrap_err();
        assert_eq!(
            err,
            VocoderError::LengthMismatch {
                expected: 240,
                actual: 100
            }
        );
    }

    #[test]
    fn test_output_length_matches_input() {
        let mut synth = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let frames = vec![vec![0.1; 5]; 6];
        let excite = impulse_train(480, 100);

        let speech = synth.synthesis(&excite, &frames).unwrap();
        assert_eq!(speech.len(), 480);
    }

    #[test]
    fn test_empty_inputs_yield_empty_waveform() {
        let mut synth = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let speech = synth.synthesis(&[], &[]).unwrap();
        assert!(speech.is_empty());

        let mut synth = MglsaSynthesizer::new(4, 0.41, 12, 80).unwrap();
        let speech = synth.synthesis(&[], &[]).unwrap();
        assert!(speech.is_empty());
    }

    #[test]
    fn test_zero_envelope_passes_excitation_through() {
        // An all-zero cepstrum means unit gain and a flat envelope: the
        // synthesized waveform equals the excitation exactly.
        let frames = vec![vec![0.0; 5]; 4];
        let excite = impulse_train(320, 60);

        let mut mlsa = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let speech = mlsa.synthesis(&excite, &frames).unwrap();
        for (x, y) in excite.iter().zip(speech.iter()) {
            assert!((x - y).abs() < 1e-12);
        }

        let mut mglsa = MglsaSynthesizer::new(4, 0.41, 12, 80).unwrap();
        let speech = mglsa.synthesis(&excite, &frames).unwrap();
        for (x, y) in excite.iter().zip(speech.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gain_tap_scales_output() {
        // With only tap 0 set, the filter itself stays flat and the output
        // is the excitation scaled by exp(c0).
        let c0 = 0.7;
        let mut frame = vec![0.0; 5];
        frame[0] = c0;
        let frames = vec![frame; 2];
        let excite = impulse_train(160, 40);

        let mut synth = MlsaSynthesizer::new(4, 0.0, 5, 80).unwrap();
        let speech = synth.synthesis(&excite, &frames).unwrap();
        for (x, y) in excite.iter().zip(speech.iter()) {
            assert!((x * c0.exp() - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_filter_state_persists_across_frames() {
        let frames: Vec<Vec<f64>> = vec![vec![0.0, 0.3, -0.1, 0.05, 0.0]; 2];
        let excite = impulse_train(160, 70);

        // One synthesizer over both frames.
        let mut joined = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let all = joined.synthesis(&excite, &frames).unwrap();

        // A fresh synthesizer fed only the second frame starts from a cold
        // delay line and must disagree with the continued run.
        let mut cold = MlsaSynthesizer::new(4, 0.41, 5, 80).unwrap();
        let second = cold
            .synthesis(&excite[80..], &frames[1..].to_vec())
            .unwrap();

        let tail = &all[80..];
        assert!(tail
            .iter()
            .zip(second.iter())
            .any(|(a, b)| (a - b).abs() > 1e-9));
    }

    #[test]
    fn test_coefficients_interpolate_between_frames() {
        // Two different envelopes with a DC excitation: the output must
        // drift sample by sample inside the second frame as coefficients
        // move along the slope.
        let frames = vec![vec![0.0; 3], vec![0.0, 0.5, 0.2]];
        let excite = vec![1.0; 40];

        let mut synth = MlsaSynthesizer::new(2, 0.0, 5, 20).unwrap();
        let speech = synth.synthesis(&excite, &frames).unwrap();

        let second_frame = &speech[20..];
        let mut changing = 0;
        for pair in second_frame.windows(2) {
            if (pair[1] - pair[0]).abs() > 1e-9 {
                changing += 1;
            }
        }
        assert!(changing > 10);
    }

    #[test]
    fn test_rejects_zero_order() {
        // Order 0 leaves the filters without tap 1 to realize.
        assert!(matches!(
            MlsaSynthesizer::new(0, 0.0, 5, 4),
            Err(VocoderError::InvalidOrder)
        ));
        assert!(matches!(
            MglsaSynthesizer::new(0, 0.0, 12, 4),
            Err(VocoderError::InvalidOrder)
        ));
    }

    #[test]
    fn test_rejects_malformed_frames() {
        let excite = vec![1.0, 0.0, 0.0, 0.0];

        let mut mlsa = MlsaSynthesizer::new(2, 0.0, 5, 4).unwrap();
        assert!(matches!(
            mlsa.synthesis(&excite, &[vec![]]),
            Err(VocoderError::FrameLengthMismatch {
                expected: 3,
                actual: 0
            })
        ));
        assert!(matches!(
            mlsa.synthesis(&excite, &[vec![0.0; 5]]),
            Err(VocoderError::FrameLengthMismatch {
                expected: 3,
                actual: 5
            })
        ));

        let mut mglsa = MglsaSynthesizer::new(2, 0.0, 4, 4).unwrap();
        assert!(matches!(
            mglsa.synthesis(&excite, &[vec![]]),
            Err(VocoderError::FrameLengthMismatch {
                expected: 3,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_config_dispatch() {
        let base = SynthesisConfig {
            order: 10,
            alpha: 0.41,
            gamma: 0.0,
            frame_shift: 80,
            pade_order: 5,
        };

        assert!(matches!(
            Synthesizer::from_config(&base),
            Ok(Synthesizer::Mlsa(_))
        ));

        let mglsa = SynthesisConfig {
            gamma: -0.25,
            ..base
        };
        match Synthesizer::from_config(&mglsa) {
            Ok(Synthesizer::Mglsa(s)) => assert!((s.gamma() + 0.25).abs() < 1e-12),
            other => panic!("expected MGLSA synthesizer, got {other:?}"),
        }

        let bad_stage = SynthesisConfig {
            gamma: -0.3,
            ..base
        };
        assert!(matches!(
            Synthesizer::from_config(&bad_stage),
            Err(VocoderError::InvalidStageCount { .. })
        ));

        let bad_gamma = SynthesisConfig { gamma: 0.1, ..base };
        assert!(Synthesizer::from_config(&bad_gamma).is_err());

        let bad_alpha = SynthesisConfig { alpha: 1.5, ..base };
        assert!(Synthesizer::from_config(&bad_alpha).is_err());
    }
}
