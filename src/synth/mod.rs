// Purpose: voice management and polyphony.
// This layer sits above the dsp primitives and owns the voice pool.

pub mod message;
pub mod poly;
pub mod voice;
