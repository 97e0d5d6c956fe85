//! # yukkuri-rs
//!
//! Prepares mixed Chinese/English/Japanese text for the AquesTalk speech
//! engines and post-processes the WAV they return.
//!
//! ## Features
//!
//! - **Transliteration**: Han ideographs through pinyin to kana, Latin letters
//!   and words, kana passthrough, and punctuation normalization, folded into a
//!   single hiragana transcript
//! - **Volume**: saturating 16-bit gain applied to the PCM payload
//! - **Pitch**: the declared playback rate is rewritten, payload untouched
//! - **AquesTalk glue**: voice discovery and a process-based engine adapter
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use yukkuri_rs::{engines::aquestalk::AquesTalkEngine, Pipeline, SynthesisEngine, SynthesisRequest};
//!
//! let mut engine = AquesTalkEngine::new();
//! engine.load_model(Path::new("."))?;
//!
//! let mut pipeline = Pipeline::new(engine);
//! let request = SynthesisRequest::builder()
//!     .text("你好，世界！")
//!     .voice("aq_yukkuri.phont")
//!     .pitch(120)
//!     .build()?;
//! let result = pipeline.process(&request)?;
//! result.write_wav(Path::new("output.wav"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod engines;
pub mod error;
pub mod pipeline;
pub mod text;

use std::path::Path;

pub use audio::WavBuffer;
pub use error::{Result, YukkuriError};
pub use pipeline::{
    batch_file_name, file_prefix, split_batch, Pipeline, SynthesisRequest,
    SynthesisRequestBuilder, FILE_PREFIX_CHARS,
};
pub use text::{Transcript, Transliterator};

/// The result of a pipeline run: the transcript sent to the engine and the
/// post-processed audio it produced.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub transcript: Transcript,
    pub audio: WavBuffer,
}

impl SynthesisResult {
    /// Write the audio container to a WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<()> {
        self.audio.write_to(path)
    }

    /// Duration of the audio in seconds at its declared rate.
    pub fn duration_secs(&self) -> Result<f64> {
        self.audio.duration_secs()
    }
}

/// Per-call engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineParams {
    /// Voice selector (a voice directory name or a `.phont` file name).
    pub voice: String,
    /// Speech speed in percent, 50–300.
    pub speed: i32,
}

/// Common interface for the native speech engines.
///
/// An engine takes a phonetic transcript and returns a mono 16-bit PCM WAV
/// container at its nominal rate. One engine value serves one request at a
/// time; concurrent requests use separate engines.
pub trait SynthesisEngine {
    /// Parameters for configuring engine loading (command paths, etc.)
    type ModelParams: Default;

    /// Load the engine from an install directory using default parameters.
    fn load_model(&mut self, model_path: &Path) -> Result<()> {
        self.load_model_with_params(model_path, Self::ModelParams::default())
    }

    /// Load the engine from an install directory with custom parameters.
    fn load_model_with_params(&mut self, model_path: &Path, params: Self::ModelParams)
        -> Result<()>;

    /// Release the engine and forget discovered voices.
    fn unload_model(&mut self);

    /// Whether `voice` names a voice this engine can speak with.
    fn has_voice(&self, voice: &str) -> bool;

    /// Sample rate the engine declares in its output before any pitch change.
    fn nominal_sample_rate(&self) -> u32 {
        audio::STANDARD_SAMPLE_RATE
    }

    /// Synthesize speech from a phonetic transcript.
    fn synthesize(&mut self, transcript: &str, params: &EngineParams) -> Result<WavBuffer>;

    /// Synthesize speech and write the container to a WAV file.
    ///
    /// Default implementation calls `synthesize()` then `WavBuffer::write_to()`.
    fn synthesize_to_file(
        &mut self,
        transcript: &str,
        wav_path: &Path,
        params: &EngineParams,
    ) -> Result<()> {
        self.synthesize(transcript, params)?.write_to(wav_path)
    }
}
