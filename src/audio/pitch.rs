use super::wav::read_u16;
use super::WavBuffer;

/// Offset of the little-endian sample-rate field in a canonical WAV header.
pub const SAMPLE_RATE_OFFSET: usize = 24;
/// Offset of the little-endian byte-rate field.
pub const BYTE_RATE_OFFSET: usize = 28;

const CHANNELS_OFFSET: usize = 22;
const BITS_PER_SAMPLE_OFFSET: usize = 34;

/// Change the nominal pitch by rewriting the declared playback rate.
///
/// Only the sample-rate and byte-rate header fields change: the new rate is
/// `round(base_rate * pitch)` and the payload is untouched, so a higher pitch
/// also plays back proportionally faster. `pitch == 1.0` is a no-op.
/// Returns true when the header was rewritten.
pub fn apply_pitch(buffer: &mut WavBuffer, pitch: f64, base_rate: u32) -> bool {
    if pitch == 1.0 {
        return false;
    }
    if !pitch.is_finite() || pitch <= 0.0 {
        log::warn!("Pitch adjustment skipped: factor must be positive, got {pitch}");
        return false;
    }

    let bytes = buffer.bytes_mut();
    if bytes.len() < BITS_PER_SAMPLE_OFFSET + 2 {
        log::warn!(
            "Pitch adjustment skipped: header too short ({} bytes)",
            bytes.len()
        );
        return false;
    }

    let channels = read_u16(bytes, CHANNELS_OFFSET) as u32;
    let bytes_per_sample = read_u16(bytes, BITS_PER_SAMPLE_OFFSET) as u32 / 8;
    let sample_rate = (base_rate as f64 * pitch).round() as u32;
    let byte_rate = sample_rate
        .saturating_mul(channels)
        .saturating_mul(bytes_per_sample);

    bytes[SAMPLE_RATE_OFFSET..SAMPLE_RATE_OFFSET + 4].copy_from_slice(&sample_rate.to_le_bytes());
    bytes[BYTE_RATE_OFFSET..BYTE_RATE_OFFSET + 4].copy_from_slice(&byte_rate.to_le_bytes());

    log::debug!("Pitch {pitch:.2}: declared rate {base_rate} -> {sample_rate} Hz");
    true
}
