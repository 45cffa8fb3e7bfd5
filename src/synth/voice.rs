use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dsp::envelope::{control_to_seconds, Envelope};
use crate::dsp::filter::LadderFilter;
use crate::dsp::oscillator::{mtof, saw, Noise};
use crate::params::GlobalParams;

/// A single sounding note: two detunable polyBLEP saws plus noise, one
/// ladder filter, an amplitude and a filter envelope, and a fixed
/// constant-power pan pair assigned at creation.
///
/// Voices are owned exclusively by the pool. Several voices may share a
/// note number; retriggers are purely additive.
pub struct Voice {
    note: u8,
    /// Key still held. Cleared on note-off even while the sustain pedal
    /// defers the actual release.
    down: bool,

    phase_a: f32,
    phase_b: f32,
    delta_a: f32,
    delta_b: f32,

    pan_right: bool,
    gain_l: f32,
    gain_r: f32,

    amp_env: Envelope,
    filter_env: Envelope,
    filter: LadderFilter,
    noise: Noise,

    sample_rate: f32,
}

impl Voice {
    /// Create and immediately trigger a voice.
    ///
    /// `pan_right` alternates per allocation to spread unison voices
    /// across the stereo field; `seed` decorrelates the noise source and
    /// the initial oscillator phases between voices.
    pub fn new(
        note: u8,
        pan_right: bool,
        seed: u64,
        params: &GlobalParams,
        sample_rate: f32,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let phase_a = rng.random::<f32>();
        let phase_b = rng.random::<f32>();

        let mut voice = Self {
            note,
            down: true,
            phase_a,
            phase_b,
            delta_a: 0.0,
            delta_b: 0.0,
            pan_right,
            gain_l: 0.0,
            gain_r: 0.0,
            amp_env: Envelope::new(),
            filter_env: Envelope::new(),
            filter: LadderFilter::new(sample_rate),
            noise: Noise::from_rng(rng),
            sample_rate,
        };

        voice.update_params(params);
        voice.amp_env.note_on();
        voice.filter_env.note_on();
        voice
    }

    /// Recompute everything derived from the parameter snapshot: pan
    /// gains, envelope rate tables, oscillator phase increments. Called
    /// on creation and whenever the snapshot is replaced, never per
    /// sample.
    pub fn update_params(&mut self, params: &GlobalParams) {
        // Constant-power pan: map the signed position onto a quarter
        // circle so gain_l² + gain_r² stays 1.
        let pan = if self.pan_right { 1.0 } else { -1.0 } * params.pan_spread;
        let x = ((pan + 1.0) / 2.0) * std::f32::consts::FRAC_PI_2;
        self.gain_l = x.cos();
        self.gain_r = x.sin();

        self.amp_env.set_adsr(
            control_to_seconds(params.amp_env.attack),
            control_to_seconds(params.amp_env.decay),
            params.amp_env.sustain,
            control_to_seconds(params.amp_env.release),
            self.sample_rate,
        );
        self.filter_env.set_adsr(
            control_to_seconds(params.filter_env.attack),
            control_to_seconds(params.filter_env.decay),
            params.filter_env.sustain,
            control_to_seconds(params.filter_env.release),
            self.sample_rate,
        );

        self.delta_a = mtof(self.note as f32 + params.osc_a_pitch) / self.sample_rate;
        // The /200 cents scaling was tuned by ear; keep it as is.
        self.delta_b =
            mtof(self.note as f32 + params.osc_b_pitch + params.detune / 200.0) / self.sample_rate;
    }

    /// Begin the release of both envelopes.
    pub fn note_off(&mut self) {
        self.amp_env.note_off();
        self.filter_env.note_off();
    }

    /// One stereo sample. Reads source levels and filter settings from
    /// the current snapshot; everything else was precomputed by
    /// `update_params`.
    pub fn render(&mut self, params: &GlobalParams) -> (f32, f32) {
        let osc_a = saw(self.phase_a, self.delta_a) * params.osc_a_level;
        self.phase_a += self.delta_a;
        if self.phase_a >= 1.0 {
            self.phase_a -= 1.0;
        }

        let osc_b = saw(self.phase_b, self.delta_b) * params.osc_b_level;
        self.phase_b += self.delta_b;
        if self.phase_b >= 1.0 {
            self.phase_b -= 1.0;
        }

        let noise = self.noise.next_sample() * params.noise_level;

        let cutoff = params.filter_cutoff + params.filter_env_amount * self.filter_env.process();
        self.filter.set_cutoff(cutoff.min(1.0));
        self.filter.set_resonance(params.filter_resonance);

        let y = self
            .filter
            .process(self.amp_env.process() * ((osc_a + osc_b + noise) / 3.0));

        // A blown-up filter mutes this voice only; the mix is unaffected.
        if !y.is_finite() {
            self.filter.reset();
            return (0.0, 0.0);
        }

        (self.gain_l * y, self.gain_r * y)
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Mark the key released without starting the envelope release.
    pub fn mark_up(&mut self) {
        self.down = false;
    }

    /// True until the amplitude envelope finishes; the pool disposes of
    /// inactive voices after each block.
    pub fn is_active(&self) -> bool {
        self.amp_env.is_active()
    }

    #[cfg(test)]
    pub(crate) fn amp_level(&self) -> f32 {
        self.amp_env.value()
    }
}
