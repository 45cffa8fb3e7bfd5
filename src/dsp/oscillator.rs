//! Band-limited sawtooth and seeded white-noise sources.
//!
//! The sawtooth uses a polyBLEP correction: a polynomial band-limited step
//! mixed in around the phase-wrap discontinuity, which suppresses aliasing
//! without oversampling. Away from the wrap the waveform is the plain
//! `2·phase − 1` ramp.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Equal-tempered MIDI note to frequency, A4 (note 69) = 440 Hz.
///
/// Takes a float so fractional semitone offsets (detune) compose directly.
#[inline]
pub fn mtof(note: f32) -> f32 {
    440.0 * 2.0_f32.powf((note - 69.0) / 12.0)
}

/// One sample of a band-limited sawtooth at `phase` ∈ [0,1) with phase
/// increment `dt` (cycles per sample). The caller owns the phase advance.
#[inline]
pub fn saw(phase: f32, dt: f32) -> f32 {
    2.0 * phase - 1.0 - poly_blep(phase, dt)
}

/// PolyBLEP residual for a unit falling step at the phase wrap.
///
/// Rising branch covers the first `dt` of the cycle, falling branch the
/// last `dt`; zero elsewhere.
#[inline]
fn poly_blep(t: f32, dt: f32) -> f32 {
    if t < dt {
        let t = t / dt;
        t + t - t * t - 1.0
    } else if t > 1.0 - dt {
        let t = (t - 1.0) / dt;
        t * t + t + t + 1.0
    } else {
        0.0
    }
}

/// Uniform white noise in [-1, 1), independently seeded per voice so
/// unison voices do not correlate.
#[derive(Debug, Clone)]
pub struct Noise {
    rng: SmallRng,
}

impl Noise {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        2.0 * self.rng.random::<f32>() - 1.0
    }
}
