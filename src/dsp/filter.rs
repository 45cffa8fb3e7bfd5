/*
Ladder Filter
=============

A four-pole resonant low-pass modeled on the classic transistor-ladder
topology: a resonance feedback tap subtracts a fraction of the last
stage's previous output from the input, then four cascaded one-pole
smoothing stages run in series, each blending a small cross-feed (0.3)
from the previous stage's history.

This is a tuned approximation, not an exact analog model. The 1.16
frequency warp, the 0.35013 input gain, the 0.15·f² feedback
compensation and the 0.3 cross-feed are empirical constants; downstream
code depends on this exact recursion, so they stay as they are.

Cutoff is a normalized 0-1 control (1.0 ≈ Nyquist at the 44.1 kHz
reference rate), floored at 0.1 to keep the coefficients well away from
their singular corner. Resonance is 0-1, self-oscillating near the top.
*/

/// Reference rate the coefficient tuning assumes.
const REFERENCE_RATE: f32 = 44_100.0;

const MIN_CUTOFF: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct LadderFilter {
    pub cutoff: f32,
    pub resonance: f32,
    // 44.1k reference compensation, fixed per engine sample rate.
    rate_comp: f32,
    // One input and one output history value per pole.
    stage_in: [f32; 4],
    stage_out: [f32; 4],
}

impl LadderFilter {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            cutoff: 1.0,
            resonance: 0.0,
            rate_comp: REFERENCE_RATE / sample_rate,
            stage_in: [0.0; 4],
            stage_out: [0.0; 4],
        }
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff = cutoff;
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance;
    }

    /// Filter one sample. Coefficients are derived from the cutoff and
    /// resonance set for this tick and held for the single computation.
    pub fn process(&mut self, mut x: f32) -> f32 {
        let f = self.cutoff.max(MIN_CUTOFF) * self.rate_comp * 1.16;
        let fb = 4.0 * self.resonance * (1.0 - 0.15 * f * f);

        x -= self.stage_out[3] * fb;
        x *= 0.35013 * (f * f) * (f * f);

        let mut input = x;
        for stage in 0..4 {
            self.stage_out[stage] =
                input + 0.3 * self.stage_in[stage] + (1.0 - f) * self.stage_out[stage];
            self.stage_in[stage] = input;
            input = self.stage_out[stage];
        }

        self.stage_out[3]
    }

    pub fn value(&self) -> f32 {
        self.stage_out[3]
    }

    /// Zero all stage histories.
    pub fn reset(&mut self) {
        self.stage_in = [0.0; 4];
        self.stage_out = [0.0; 4];
    }
}
