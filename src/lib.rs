pub mod dsp;
pub mod io;
pub mod params; // Control-rate parameter snapshots
pub mod synth; // Voice management and polyphony

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Hard ceiling on the polyphony limit a parameter snapshot may request.
pub const MAX_VOICES: usize = 64;

/// Floor for logarithms and segment lengths in the envelope math.
pub(crate) const EPS: f32 = 1e-4;
