//! Low-level DSP primitives used by the voice layer.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They intentionally stay focused on the
//! signal-processing math so the synth layer can handle orchestration.

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Four-pole resonant ladder low-pass filter.
pub mod filter;
/// Band-limited sawtooth and white-noise sources.
pub mod oscillator;

pub use envelope::EnvelopeState;
