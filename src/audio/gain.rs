use super::WavBuffer;
use crate::{Result, YukkuriError};

/// Scale every sample by `gain`, saturating at the 16-bit bounds.
///
/// `gain == 1.0` leaves the buffer untouched. A container that is not mono
/// 16-bit PCM is left as-is and a warning is logged; the request carries on.
/// Returns true when the payload was rewritten.
pub fn apply_gain(buffer: &mut WavBuffer, gain: f64) -> bool {
    if gain == 1.0 {
        return false;
    }
    match scale_samples(buffer, gain) {
        Ok(clipped) => {
            if clipped > 0 {
                log::debug!("Gain {gain:.2} clipped {clipped} sample(s)");
            }
            true
        }
        Err(e) => {
            log::warn!("Volume adjustment skipped, returning original audio: {e}");
            false
        }
    }
}

/// Returns the number of samples that hit a bound.
fn scale_samples(buffer: &mut WavBuffer, gain: f64) -> Result<usize> {
    if !gain.is_finite() || gain < 0.0 {
        return Err(YukkuriError::MalformedWav(format!(
            "gain must be a non-negative number, got {gain}"
        )));
    }

    let layout = buffer.layout()?;
    if !layout.is_mono_pcm16() {
        return Err(YukkuriError::MalformedWav(format!(
            "expected mono 16-bit PCM, got format {} with {} channel(s) at {} bits",
            layout.format_tag, layout.channels, layout.bits_per_sample
        )));
    }
    if layout.data.len() % 2 != 0 {
        return Err(YukkuriError::MalformedWav(format!(
            "payload length {} is not a whole number of samples",
            layout.data.len()
        )));
    }

    let mut clipped = 0;
    for chunk in buffer.bytes_mut()[layout.data].chunks_exact_mut(2) {
        let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
        let scaled = (sample as f64 * gain).floor();
        let bounded = scaled.clamp(i16::MIN as f64, i16::MAX as f64);
        if bounded != scaled {
            clipped += 1;
        }
        chunk.copy_from_slice(&(bounded as i16).to_le_bytes());
    }

    Ok(clipped)
}

#[cfg(test)]
mod tests {
    use super::apply_gain;
    use crate::audio::WavBuffer;

    #[test]
    fn unity_gain_is_byte_identical() {
        let original = WavBuffer::from_samples(&[0, 100, -100, 32767, -32768], 8000).unwrap();
        let mut buffer = original.clone();
        assert!(!apply_gain(&mut buffer, 1.0));
        assert_eq!(buffer, original);
    }

    #[test]
    fn scales_samples() {
        let mut buffer = WavBuffer::from_samples(&[100, -100, 0, 2000], 8000).unwrap();
        assert!(apply_gain(&mut buffer, 1.5));
        assert_eq!(buffer.decode_samples().unwrap(), vec![150, -150, 0, 3000]);
    }

    #[test]
    fn loud_peaks_saturate_instead_of_wrapping() {
        let mut buffer = WavBuffer::from_samples(&[25000, -25000, 20000], 8000).unwrap();
        apply_gain(&mut buffer, 1.5);
        assert_eq!(
            buffer.decode_samples().unwrap(),
            vec![32767, -32768, 30000]
        );
    }

    #[test]
    fn zero_gain_silences() {
        let mut buffer = WavBuffer::from_samples(&[1234, -4321], 8000).unwrap();
        apply_gain(&mut buffer, 0.0);
        assert_eq!(buffer.decode_samples().unwrap(), vec![0, 0]);
    }

    #[test]
    fn fractional_results_round_down() {
        let mut buffer = WavBuffer::from_samples(&[3, -3], 8000).unwrap();
        apply_gain(&mut buffer, 0.5);
        assert_eq!(buffer.decode_samples().unwrap(), vec![1, -2]);
    }

    #[test]
    fn header_is_preserved() {
        let original = WavBuffer::from_samples(&[10, 20, 30], 8000).unwrap();
        let mut buffer = original.clone();
        apply_gain(&mut buffer, 2.0);
        assert_eq!(buffer.as_bytes()[..44], original.as_bytes()[..44]);
        assert_eq!(buffer.layout().unwrap().frame_count(), 3);
    }

    #[test]
    fn malformed_container_is_returned_unchanged() {
        let original = WavBuffer::from_bytes(b"RIFF\0\0\0\0WAVEjunk".to_vec());
        let mut buffer = original.clone();
        assert!(!apply_gain(&mut buffer, 2.0));
        assert_eq!(buffer, original);
    }

    #[test]
    fn stereo_container_is_returned_unchanged() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        let mut writer =
            hound::WavWriter::new(std::io::Cursor::new(&mut bytes), spec).unwrap();
        for s in [1i16, 2, 3, 4] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let original = WavBuffer::from_bytes(bytes);
        let mut buffer = original.clone();
        assert!(!apply_gain(&mut buffer, 2.0));
        assert_eq!(buffer, original);
    }
}
