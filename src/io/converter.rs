use crate::io::midi::{MidiEvent, SUSTAIN_PEDAL};
use crate::synth::message::SynthMessage;

/// Map a MIDI event to an engine message, filtering by channel.
///
/// Running-status quirks the engine cares about: note-on with velocity 0
/// is a note-off, and only damper-pedal control changes are forwarded
/// (value >= 64 means pedal down).
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    match midi {
        MidiEvent::NoteOn { channel, key, velocity } if channel == channel_filter => {
            if velocity > 0 {
                Some(SynthMessage::NoteOn { note: key })
            } else {
                Some(SynthMessage::NoteOff { note: key })
            }
        }
        MidiEvent::NoteOff { channel, key, .. } if channel == channel_filter => {
            Some(SynthMessage::NoteOff { note: key })
        }
        MidiEvent::ControlChange {
            channel,
            controller: SUSTAIN_PEDAL,
            value,
        } if channel == channel_filter => Some(SynthMessage::Sustain { down: value >= 64 }),
        _ => None,
    }
}
