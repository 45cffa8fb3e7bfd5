use std::f32::consts::E;

use crate::EPS;

/*
ADSR Envelope
=============

A hybrid-shape ADSR generator: the attack segment is a linear ramp, while
decay and release are exponential, which matches how acoustic amplitudes
die away.

  level       The envelope's current output value (0.0 to 1.0).

  stage       Idle, Attack, Decay, Sustain, Release, or Finished. A state
              machine governs transitions. Finished is terminal: it is the
              signal that the owning voice can be disposed of.

  rate        Per-sample change. Additive for the linear attack, a
              multiplicative factor for the exponential segments. Rates are
              precomputed by set_adsr (and at note_off for release), never
              per sample.

The exponential rate for a segment from `start` to `end` over `n` samples is

    r = exp((ln(max(EPS, end)) - ln(max(EPS, start))) / n)

The EPS floor keeps ln() finite for zero targets, and guarantees the
segment reaches its (floored) target within exactly `n` samples whatever
the magnitudes involved.

Timing conventions, kept verbatim from the patch this engine was tuned
against: knob positions map to seconds through a cubic curve
(`max(0.001, 13·x³)`), and the decay/release sample counts are scaled by
Euler's number relative to attack. Both constants were tuned by ear; do
not "clean them up".
*/

/// Maps a normalized 0-1 time control onto seconds.
///
/// Cubic response: fine resolution at short times, about 13 s at full turn.
pub fn control_to_seconds(x: f32) -> f32 {
    (13.0 * x * x * x).max(0.001)
}

fn exp_rate(start: f32, end: f32, samples: f32) -> f32 {
    ((end.max(EPS).ln() - start.max(EPS).ln()) / samples).exp()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,     // Never triggered, level = 0
    Attack,   // Linear ramp up to 1.0
    Decay,    // Exponential fall to the sustain level
    Sustain,  // Holding until note_off
    Release,  // Exponential fall to 0
    Finished, // Terminal; the voice may be disposed
}

#[derive(Debug, Clone)]
pub struct Envelope {
    value: f32,
    stage: EnvelopeState,
    // Samples elapsed within the current stage.
    samples: u32,

    // Segment lengths in samples, floored to 1 so no rate divides by zero.
    attack_samples: f32,
    decay_samples: f32,
    release_samples: f32,
    sustain_level: f32,

    attack_rate: f32,
    decay_rate: f32,
    release_rate: f32,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            stage: EnvelopeState::Idle,
            samples: 0,
            attack_samples: 1.0,
            decay_samples: 1.0,
            release_samples: 1.0,
            sustain_level: 1.0,
            attack_rate: 1.0,
            decay_rate: 1.0,
            release_rate: 1.0,
        }
    }

    /// Recompute the rate table from ADSR times in seconds.
    ///
    /// Called on parameter changes, not per sample. Decay and release are
    /// scaled by E (see the module notes). The release rate itself is
    /// derived at note_off, since it depends on the level at that moment.
    pub fn set_adsr(&mut self, attack: f32, decay: f32, sustain: f32, release: f32, sample_rate: f32) {
        self.attack_samples = (attack * sample_rate).max(1.0);
        self.decay_samples = (E * decay * sample_rate).max(1.0);
        self.sustain_level = sustain;
        self.release_samples = (E * release * sample_rate).max(1.0);

        self.attack_rate = 1.0 / self.attack_samples.max(EPS);
        self.decay_rate = exp_rate(1.0, self.sustain_level, self.decay_samples);
    }

    /// Restart the attack ramp from zero. Valid from any stage.
    pub fn note_on(&mut self) {
        self.stage = EnvelopeState::Attack;
        self.value = 0.0;
        self.samples = 0;
    }

    /// Begin the release segment from the current level.
    ///
    /// No-op once releasing or finished.
    pub fn note_off(&mut self) {
        match self.stage {
            EnvelopeState::Idle
            | EnvelopeState::Attack
            | EnvelopeState::Decay
            | EnvelopeState::Sustain => {
                self.stage = EnvelopeState::Release;
                self.release_rate = exp_rate(self.value, 0.0, self.release_samples);
                self.samples = 0;
            }
            EnvelopeState::Release | EnvelopeState::Finished => {}
        }
    }

    /// Advance one sample and return the new level.
    pub fn process(&mut self) -> f32 {
        match self.stage {
            EnvelopeState::Attack => {
                self.value += self.attack_rate;
                if self.samples as f32 >= self.attack_samples {
                    self.value = 1.0;
                    // Nothing to decay into when sustain sits at the peak.
                    self.stage = if self.sustain_level == 1.0 {
                        EnvelopeState::Sustain
                    } else {
                        EnvelopeState::Decay
                    };
                    self.samples = 0;
                } else {
                    self.samples += 1;
                }
            }
            EnvelopeState::Decay => {
                self.value *= self.decay_rate;
                if self.samples as f32 >= self.decay_samples {
                    self.value = self.sustain_level;
                    self.stage = EnvelopeState::Sustain;
                    self.samples = 0;
                } else {
                    self.samples += 1;
                }
            }
            EnvelopeState::Release => {
                self.value *= self.release_rate;
                if self.samples as f32 >= self.release_samples {
                    self.value = 0.0;
                    self.stage = EnvelopeState::Finished;
                } else {
                    self.samples += 1;
                }
            }
            EnvelopeState::Idle | EnvelopeState::Sustain | EnvelopeState::Finished => {}
        }

        debug_assert!(self.value.is_finite());
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }

    /// False only once the release has run out.
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeState::Finished
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
