// Purpose - external interfaces and event conversions.
// The engine itself only speaks SynthMessage; these adapters sit at the
// boundary with whatever produces raw MIDI bytes or events.

pub mod converter;
pub mod midi;
