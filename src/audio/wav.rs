use std::io::Cursor;
use std::ops::Range;
use std::path::Path;

use crate::{Result, YukkuriError};

/// `WAVE_FORMAT_PCM`
const FORMAT_PCM: u16 = 1;

/// An uncompressed RIFF/WAVE container exactly as the engine produced it.
///
/// The bytes are kept verbatim; processors patch them in place so that every
/// header byte they do not own survives unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBuffer {
    bytes: Vec<u8>,
}

/// Header fields and payload location of a parsed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavLayout {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Byte range of the `data` chunk payload.
    pub data: Range<usize>,
}

impl WavLayout {
    /// Number of frames in the payload.
    pub fn frame_count(&self) -> usize {
        let frame_bytes = self.channels as usize * (self.bits_per_sample as usize / 8);
        if frame_bytes == 0 {
            return 0;
        }
        self.data.len() / frame_bytes
    }

    /// True for mono 16-bit linear PCM, the engine's output format.
    pub fn is_mono_pcm16(&self) -> bool {
        self.format_tag == FORMAT_PCM && self.channels == 1 && self.bits_per_sample == 16
    }
}

impl WavBuffer {
    /// Wrap raw container bytes. Parsing is deferred until a field is read.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encode mono 16-bit samples into a new container.
    pub fn from_samples(samples: &[i16], sample_rate: u32) -> Result<Self> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).map_err(hound_err)?;
        for &sample in samples {
            writer.write_sample(sample).map_err(hound_err)?;
        }
        writer.finalize().map_err(hound_err)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Walk the RIFF chunks and locate the `fmt ` fields and `data` payload.
    pub fn layout(&self) -> Result<WavLayout> {
        let data = &self.bytes;
        if data.len() < 12 {
            return Err(YukkuriError::MalformedWav(format!(
                "container too short ({} bytes)",
                data.len()
            )));
        }
        if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
            return Err(YukkuriError::MalformedWav(
                "missing RIFF/WAVE magic".to_string(),
            ));
        }

        let mut fmt: Option<&[u8]> = None;
        let mut payload: Option<Range<usize>> = None;
        let mut pos = 12;

        while pos + 8 <= data.len() {
            let id = &data[pos..pos + 4];
            let size = read_u32(data, pos + 4) as usize;
            let body = pos + 8;
            let end = body.checked_add(size).filter(|&end| end <= data.len());

            match (id, end) {
                (b"fmt ", Some(end)) => fmt = Some(&data[body..end]),
                (b"data", Some(end)) => {
                    payload = Some(body..end);
                    break;
                }
                (_, None) => {
                    return Err(YukkuriError::MalformedWav(format!(
                        "chunk {:?} overruns container ({size} bytes at offset {body})",
                        String::from_utf8_lossy(id)
                    )));
                }
                _ => {}
            }
            // Chunks are word aligned.
            pos = body + size + (size & 1);
        }

        let fmt = fmt
            .filter(|f| f.len() >= 16)
            .ok_or_else(|| YukkuriError::MalformedWav("missing fmt chunk".to_string()))?;
        let data_range =
            payload.ok_or_else(|| YukkuriError::MalformedWav("missing data chunk".to_string()))?;

        Ok(WavLayout {
            format_tag: read_u16(fmt, 0),
            channels: read_u16(fmt, 2),
            sample_rate: read_u32(fmt, 4),
            byte_rate: read_u32(fmt, 8),
            block_align: read_u16(fmt, 12),
            bits_per_sample: read_u16(fmt, 14),
            data: data_range,
        })
    }

    /// Decode the payload as 16-bit samples.
    pub fn decode_samples(&self) -> Result<Vec<i16>> {
        let reader = hound::WavReader::new(Cursor::new(&self.bytes)).map_err(hound_err)?;
        reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(hound_err)
    }

    /// Duration at the declared sample rate.
    ///
    /// After a pitch change this reflects the new playback rate.
    pub fn duration_secs(&self) -> Result<f64> {
        let layout = self.layout()?;
        if layout.sample_rate == 0 {
            return Ok(0.0);
        }
        Ok(layout.frame_count() as f64 / layout.sample_rate as f64)
    }

    /// Write the container to `path` unchanged.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

pub(crate) fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn hound_err(e: hound::Error) -> YukkuriError {
    YukkuriError::MalformedWav(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::WavBuffer;

    #[test]
    fn layout_of_encoded_samples() {
        let wav = WavBuffer::from_samples(&[0, 1, -1, 1000], 8000).unwrap();
        let layout = wav.layout().unwrap();
        assert!(layout.is_mono_pcm16());
        assert_eq!(layout.sample_rate, 8000);
        assert_eq!(layout.byte_rate, 16000);
        assert_eq!(layout.block_align, 2);
        assert_eq!(layout.data, 44..52);
        assert_eq!(layout.frame_count(), 4);
    }

    #[test]
    fn samples_round_trip_through_hound() {
        let samples = [0i16, 32767, -32768, 12345];
        let wav = WavBuffer::from_samples(&samples, 8000).unwrap();
        assert_eq!(wav.decode_samples().unwrap(), samples);
    }

    #[test]
    fn duration_uses_declared_rate() {
        let wav = WavBuffer::from_samples(&[0; 8000], 8000).unwrap();
        assert!((wav.duration_secs().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_riff_bytes() {
        assert!(WavBuffer::from_bytes(b"not a wav file".to_vec())
            .layout()
            .is_err());
        assert!(WavBuffer::from_bytes(Vec::new()).layout().is_err());
    }

    #[test]
    fn rejects_truncated_payload() {
        let wav = WavBuffer::from_samples(&[1, 2, 3, 4], 8000).unwrap();
        let mut bytes = wav.into_bytes();
        bytes.truncate(bytes.len() - 3);
        assert!(WavBuffer::from_bytes(bytes).layout().is_err());
    }

    #[test]
    fn skips_unknown_chunks() {
        let wav = WavBuffer::from_samples(&[7, 8], 8000).unwrap();
        let bytes = wav.into_bytes();
        // Splice a LIST chunk with an odd-sized body between fmt and data.
        let mut spliced = bytes[..36].to_vec();
        spliced.extend_from_slice(b"LIST");
        spliced.extend_from_slice(&3u32.to_le_bytes());
        spliced.extend_from_slice(&[1, 2, 3, 0]);
        spliced.extend_from_slice(&bytes[36..]);

        let layout = WavBuffer::from_bytes(spliced).layout().unwrap();
        assert_eq!(layout.data, 56..60);
        assert_eq!(layout.frame_count(), 2);
    }

    #[test]
    fn writes_container_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let wav = WavBuffer::from_samples(&[5, -5], 8000).unwrap();
        wav.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), wav.as_bytes());
    }
}
