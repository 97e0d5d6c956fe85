//! Post-processing of the engine's WAV output.
//!
//! Both processors patch the container in place: gain rewrites the PCM
//! payload, pitch rewrites two header fields.

mod gain;
mod pitch;
mod wav;

pub use gain::apply_gain;
pub use pitch::{apply_pitch, BYTE_RATE_OFFSET, SAMPLE_RATE_OFFSET};
pub use wav::{WavBuffer, WavLayout};

/// Nominal output rate of the AquesTalk engines.
pub const STANDARD_SAMPLE_RATE: u32 = 8000;

/// Convert a percentage (100 = unity) into a multiplicative factor.
pub fn percent_to_factor(percent: i32) -> f64 {
    percent as f64 / 100.0
}
