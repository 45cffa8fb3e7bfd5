use std::collections::VecDeque;

use crate::params::GlobalParams;
use crate::synth::message::{MessageReceiver, SynthMessage};
use crate::synth::voice::Voice;
use crate::{MAX_BLOCK_SIZE, MAX_VOICES};

/// Polyphonic voice pool and stereo mix-down.
///
/// Voices live in a bounded deque ordered oldest-first, so hitting the
/// polyphony limit evicts from the front in O(1). Eviction is
/// unconditional: an over-limit voice is dropped even while it is still
/// sounding.
///
/// All pending control messages are drained before a block renders, in
/// delivery order; the parameter snapshot is replaced wholesale so the
/// per-sample loop never sees a half-applied update. The render path
/// itself takes no locks and allocates only on note-on, bounded by the
/// voice limit.
pub struct PolySynth<R: MessageReceiver> {
    voices: VecDeque<Voice>,
    rx: R,
    params: GlobalParams,
    sustain: bool,
    // Alternates per note-on so unison stacks spread left/right.
    pan_right: bool,
    next_seed: u64,
    sample_rate: f32,
}

impl<R: MessageReceiver> PolySynth<R> {
    pub fn new(sample_rate: f32, params: GlobalParams, rx: R) -> Self {
        let params = params.clamped();
        Self {
            voices: VecDeque::with_capacity(MAX_VOICES),
            rx,
            params,
            sustain: false,
            pan_right: false,
            next_seed: 0,
            sample_rate,
        }
    }

    /// Fill one planar stereo block. Both channel slices must be the
    /// same length.
    pub fn render_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(left.len(), right.len());
        debug_assert!(left.len() <= MAX_BLOCK_SIZE);

        while let Some(msg) = self.rx.pop() {
            self.handle_message(msg);
        }

        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let mut sum_l = 0.0;
            let mut sum_r = 0.0;
            for voice in &mut self.voices {
                let (vl, vr) = voice.render(&self.params);
                sum_l += vl;
                sum_r += vr;
            }
            *l = sum_l;
            *r = sum_r;
        }

        // Dispose of finished voices only between blocks.
        self.voices.retain(Voice::is_active);
    }

    fn handle_message(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::Params(params) => {
                self.params = params.clamped();
                self.evict_over_limit();
                for voice in &mut self.voices {
                    voice.update_params(&self.params);
                }
            }
            SynthMessage::NoteOn { note } => {
                let note = note.min(127);
                let voice = Voice::new(
                    note,
                    self.pan_right,
                    self.next_seed,
                    &self.params,
                    self.sample_rate,
                );
                self.next_seed = self.next_seed.wrapping_add(1);
                self.pan_right = !self.pan_right;
                // Additive allocation: a retriggered note gets a fresh
                // voice alongside any still sounding on the same key.
                self.voices.push_back(voice);
                self.evict_over_limit();
            }
            SynthMessage::NoteOff { note } => {
                for voice in &mut self.voices {
                    if voice.note() == note && voice.is_down() {
                        voice.mark_up();
                        if !self.sustain {
                            voice.note_off();
                        }
                    }
                }
            }
            SynthMessage::Sustain { down } => {
                self.sustain = down;
                if !down {
                    // Pedal up: flush the releases deferred while held.
                    for voice in &mut self.voices {
                        if !voice.is_down() {
                            voice.note_off();
                        }
                    }
                }
            }
        }
    }

    fn evict_over_limit(&mut self) {
        while self.voices.len() > self.params.voices {
            self.voices.pop_front();
        }
    }

    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// Live voices' note numbers, oldest first.
    pub fn notes(&self) -> impl Iterator<Item = u8> + '_ {
        self.voices.iter().map(Voice::note)
    }

    pub fn params(&self) -> &GlobalParams {
        &self.params
    }

    #[cfg(test)]
    pub(crate) fn amp_levels(&self) -> Vec<f32> {
        self.voices.iter().map(Voice::amp_level).collect()
    }
}
