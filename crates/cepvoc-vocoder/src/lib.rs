//! Parametric speech synthesis engine.
//!
//! This crate reconstructs a waveform from an excitation signal plus a
//! time-varying spectral envelope, using recursive digital filters whose
//! coefficients are derived per frame from mel-generalized cepstra (see
//! the `cepvoc-cepstrum` crate).
//!
//! # Overview
//!
//! - [`excite`] - pulse/noise excitation generation from an F0 track
//! - [`coef`] - cepstrum to filter-coefficient conversion and back
//! - [`mlsa`] - MLSA digital filter (Pade-approximated cascade, `gamma == 0`)
//! - [`mglsa`] - MGLSA digital filter (stage cascade, `gamma < 0`)
//! - [`synthesizer`] - frame interpolation and sample-by-sample synthesis
//! - [`rng`] - deterministic RNG for unvoiced noise
//!
//! # Ownership
//!
//! Filters and excitation generators are single-owner mutable state: one
//! instance serves one utterance, its delay line advancing exactly once per
//! sample. Batch synthesis parallelizes at utterance granularity with one
//! filter/excitation pair each; nothing in this crate is shared or global.
//!
//! # Determinism
//!
//! Synthesis is a pure computation over its inputs. Unvoiced excitation
//! noise comes from an explicitly seeded PCG32 stream, so a full run is
//! reproducible from `(inputs, seed)`.

pub mod coef;
pub mod error;
pub mod excite;
pub mod mglsa;
pub mod mlsa;
pub mod rng;
pub mod synthesizer;

pub use coef::{filter_coef_to_mcep, mcep_to_filter_coef, mgcep_to_filter_coef};
pub use error::{VocoderError, VocoderResult};
pub use excite::PulseExcite;
pub use mglsa::MglsaFilter;
pub use mlsa::MlsaFilter;
pub use synthesizer::{MglsaSynthesizer, MlsaSynthesizer, SynthesisConfig, Synthesizer};
