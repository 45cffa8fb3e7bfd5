#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::params::GlobalParams;

/// Control-rate messages crossing into the audio thread.
///
/// Drained in full, in delivery order, before each block is rendered;
/// a message never takes effect mid-block.
#[derive(Debug, Copy, Clone)]
pub enum SynthMessage {
    /// Wholesale replacement of the shared parameter snapshot.
    Params(GlobalParams),
    NoteOn { note: u8 },
    NoteOff { note: u8 },
    Sustain { down: bool },
}

/// Non-blocking message source the engine drains before each block.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}
