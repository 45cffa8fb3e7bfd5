//! Control-rate parameter snapshots.
//!
//! A `GlobalParams` value is produced by the control surface, clamped once at
//! ingestion, and then treated as immutable by the audio thread: the engine
//! replaces its copy wholesale on every `Params` message, so the render loop
//! never observes a partially-updated set.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_VOICES;

/// One ADSR envelope's worth of normalized controls.
///
/// The time fields are 0-1 knob positions, not seconds; see
/// [`crate::dsp::envelope::control_to_seconds`] for the mapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

impl AdsrParams {
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    fn clamped(self) -> Self {
        Self {
            attack: self.attack.clamp(0.0, 1.0),
            decay: self.decay.clamp(0.0, 1.0),
            sustain: self.sustain.clamp(0.0, 1.0),
            release: self.release.clamp(0.0, 1.0),
        }
    }
}

/// Full parameter snapshot shared by every voice.
///
/// Pitch offsets are in semitones, detune in cents, everything else a
/// normalized 0-1 control.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalParams {
    /// Polyphony limit. Lowering it evicts the oldest voices immediately.
    pub voices: usize,
    pub osc_a_pitch: f32,
    pub osc_b_pitch: f32,
    /// Cents, applied to oscillator B as `detune / 200` semitones.
    pub detune: f32,
    pub osc_a_level: f32,
    pub osc_b_level: f32,
    pub noise_level: f32,
    pub filter_cutoff: f32,
    pub filter_resonance: f32,
    pub filter_env_amount: f32,
    pub amp_env: AdsrParams,
    pub filter_env: AdsrParams,
    pub pan_spread: f32,
}

impl GlobalParams {
    /// Defensive copy with every field forced into its valid range.
    ///
    /// Applied once when a snapshot crosses the control channel so the
    /// audio-rate path never has to guard against division by zero or
    /// filter-coefficient singularities.
    pub fn clamped(self) -> Self {
        Self {
            voices: self.voices.clamp(1, MAX_VOICES),
            osc_a_pitch: self.osc_a_pitch.clamp(-48.0, 48.0),
            osc_b_pitch: self.osc_b_pitch.clamp(-48.0, 48.0),
            detune: self.detune.clamp(-100.0, 100.0),
            osc_a_level: self.osc_a_level.clamp(0.0, 1.0),
            osc_b_level: self.osc_b_level.clamp(0.0, 1.0),
            noise_level: self.noise_level.clamp(0.0, 1.0),
            filter_cutoff: self.filter_cutoff.clamp(0.0, 1.0),
            // Resonance of 1.0 is self-oscillation; keep just below.
            filter_resonance: self.filter_resonance.clamp(0.0, 0.995),
            filter_env_amount: self.filter_env_amount.clamp(0.0, 1.0),
            amp_env: self.amp_env.clamped(),
            filter_env: self.filter_env.clamped(),
            pan_spread: self.pan_spread.clamp(0.0, 1.0),
        }
    }
}

impl Default for GlobalParams {
    /// A plausible starting patch: both saws at unison, mild detune,
    /// half-open filter with a little envelope sweep.
    fn default() -> Self {
        Self {
            voices: 8,
            osc_a_pitch: 0.0,
            osc_b_pitch: 0.0,
            detune: 10.0,
            osc_a_level: 0.8,
            osc_b_level: 0.8,
            noise_level: 0.0,
            filter_cutoff: 0.5,
            filter_resonance: 0.2,
            filter_env_amount: 0.3,
            amp_env: AdsrParams::new(0.1, 0.3, 0.7, 0.3),
            filter_env: AdsrParams::new(0.1, 0.3, 0.5, 0.3),
            pan_spread: 0.5,
        }
    }
}
