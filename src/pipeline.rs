//! Request validation and the text-to-audio pipeline.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::audio::{apply_gain, apply_pitch, percent_to_factor};
use crate::text::Transliterator;
use crate::{EngineParams, Result, SynthesisEngine, SynthesisResult, YukkuriError};

pub const SPEED_RANGE: (i32, i32) = (50, 300);
pub const PITCH_RANGE: (i32, i32) = (50, 200);
pub const VOLUME_RANGE: (i32, i32) = (0, 300);

/// Characters of input text kept in output file names.
pub const FILE_PREFIX_CHARS: usize = 20;

/// Separator for batch input.
pub const BATCH_SEPARATOR: char = ';';

/// One synthesis request. Percentages use 100 as unity.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    #[builder(default = "100")]
    #[serde(default = "unity")]
    pub speed: i32,
    #[builder(default = "100")]
    #[serde(default = "unity")]
    pub pitch: i32,
    #[builder(default = "100")]
    #[serde(default = "unity")]
    pub volume: i32,
}

fn unity() -> i32 {
    100
}

impl SynthesisRequest {
    pub fn builder() -> SynthesisRequestBuilder {
        SynthesisRequestBuilder::default()
    }

    /// Check everything that can be checked without an engine.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(YukkuriError::EmptyText);
        }
        if self.voice.is_empty() {
            return Err(YukkuriError::UnknownVoice(String::new()));
        }
        check_range("speed", self.speed, SPEED_RANGE)?;
        check_range("pitch", self.pitch, PITCH_RANGE)?;
        check_range("volume", self.volume, VOLUME_RANGE)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: i32, (min, max): (i32, i32)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(YukkuriError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}

/// Text in, adjusted WAV out.
///
/// Owns one engine; run one pipeline per concurrent request stream.
pub struct Pipeline<E> {
    engine: E,
    transliterator: Transliterator,
}

impl<E: SynthesisEngine> Pipeline<E> {
    pub fn new(engine: E) -> Self {
        Self::with_transliterator(engine, Transliterator::default())
    }

    pub fn with_transliterator(engine: E, transliterator: Transliterator) -> Self {
        Self {
            engine,
            transliterator,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Run one request through transliteration, synthesis, gain and pitch.
    ///
    /// Parameters and voice are rejected before any collaborator runs.
    pub fn process(&mut self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        request.validate()?;
        if !self.engine.has_voice(&request.voice) {
            return Err(YukkuriError::UnknownVoice(request.voice.clone()));
        }

        let transcript = self.transliterator.transliterate(&request.text)?;
        if transcript.text.trim().is_empty() {
            log::warn!("Nothing speakable in {:?}", request.text);
            return Err(YukkuriError::EmptyText);
        }

        let params = EngineParams {
            voice: request.voice.clone(),
            speed: request.speed,
        };
        let mut audio = self.engine.synthesize(&transcript.text, &params)?;

        apply_gain(&mut audio, percent_to_factor(request.volume));
        apply_pitch(
            &mut audio,
            percent_to_factor(request.pitch),
            self.engine.nominal_sample_rate(),
        );

        Ok(SynthesisResult { transcript, audio })
    }

    /// Split the request text on `;` and process each part in order.
    ///
    /// Stops at the first failing part.
    pub fn process_batch(&mut self, request: &SynthesisRequest) -> Result<Vec<SynthesisResult>> {
        let parts = split_batch(&request.text);
        if parts.is_empty() {
            return Err(YukkuriError::EmptyText);
        }
        parts
            .into_iter()
            .map(|text| {
                let part = SynthesisRequest {
                    text: text.to_string(),
                    ..request.clone()
                };
                self.process(&part)
            })
            .collect()
    }
}

/// Split batch input on `;`, trimming parts and skipping empty ones.
pub fn split_batch(text: &str) -> Vec<&str> {
    text.split(BATCH_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// File-name prefix for saved audio: word characters and CJK ideographs are
/// kept, anything else becomes `_`, truncated to `max_chars`.
pub fn file_prefix(text: &str, max_chars: usize) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' || ('\u{4E00}'..='\u{9FFF}').contains(&ch) {
                ch
            } else {
                '_'
            }
        })
        .take(max_chars)
        .collect()
}

/// WAV file name for one part of a batch, numbered from 1 so parts sharing
/// a prefix never collide.
pub fn batch_file_name(text: &str, index: usize) -> String {
    format!("{}_{index}.wav", file_prefix(text, FILE_PREFIX_CHARS))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{batch_file_name, file_prefix, split_batch, Pipeline, SynthesisRequest};
    use crate::audio::WavBuffer;
    use crate::{EngineParams, Result, SynthesisEngine, YukkuriError};

    /// Engine that records its input and returns a fixed 8 kHz buffer.
    #[derive(Default)]
    struct ScriptedEngine {
        calls: usize,
        last: Option<(String, EngineParams)>,
        fail_with: Option<i32>,
    }

    impl SynthesisEngine for ScriptedEngine {
        type ModelParams = ();

        fn load_model_with_params(&mut self, _: &Path, _: ()) -> Result<()> {
            Ok(())
        }

        fn unload_model(&mut self) {}

        fn has_voice(&self, voice: &str) -> bool {
            voice == "f1" || voice == "aq_yukkuri.phont"
        }

        fn synthesize(&mut self, transcript: &str, params: &EngineParams) -> Result<WavBuffer> {
            self.calls += 1;
            self.last = Some((transcript.to_string(), params.clone()));
            if let Some(code) = self.fail_with {
                return Err(YukkuriError::Engine {
                    code,
                    message: "synthesis failed".to_string(),
                });
            }
            WavBuffer::from_samples(&[1000, -1000, 25000, 20000], 8000)
        }
    }

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest::builder()
            .text(text)
            .voice("f1")
            .build()
            .unwrap()
    }

    #[test]
    fn builder_defaults_to_unity() {
        let req = request("你好");
        assert_eq!((req.speed, req.pitch, req.volume), (100, 100, 100));
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let req: SynthesisRequest =
            serde_json::from_str(r#"{"text":"你好，世界！","voice":"f1","pitch":120}"#).unwrap();
        assert_eq!(req.pitch, 120);
        assert_eq!(req.volume, 100);
    }

    #[test]
    fn empty_text_rejected_before_engine() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let err = pipeline.process(&request("  ")).unwrap_err();
        assert!(matches!(err, YukkuriError::EmptyText));
        assert_eq!(pipeline.engine().calls, 0);
    }

    #[test]
    fn out_of_range_parameters_rejected() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        for (speed, pitch, volume, name) in [
            (49, 100, 100, "speed"),
            (301, 100, 100, "speed"),
            (100, 201, 100, "pitch"),
            (100, 100, -1, "volume"),
            (100, 100, 301, "volume"),
        ] {
            let req = SynthesisRequest {
                speed,
                pitch,
                volume,
                ..request("你好")
            };
            match pipeline.process(&req).unwrap_err() {
                YukkuriError::InvalidParameter { name: got, .. } => assert_eq!(got, name),
                other => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(pipeline.engine().calls, 0);
    }

    #[test]
    fn unknown_voice_rejected_before_engine() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let req = SynthesisRequest {
            voice: "nobody".to_string(),
            ..request("你好")
        };
        assert!(matches!(
            pipeline.process(&req).unwrap_err(),
            YukkuriError::UnknownVoice(_)
        ));
        assert_eq!(pipeline.engine().calls, 0);
    }

    #[test]
    fn engine_receives_transcript_and_speed() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let req = SynthesisRequest {
            speed: 150,
            ..request("你好，A！")
        };
        let result = pipeline.process(&req).unwrap();
        assert_eq!(result.transcript.text, "にぃはお、えー！");

        let (transcript, params) = pipeline.engine().last.clone().unwrap();
        assert_eq!(transcript, "にぃはお、えー！");
        assert_eq!(params.speed, 150);
        assert_eq!(params.voice, "f1");
    }

    #[test]
    fn unity_parameters_return_engine_output() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let result = pipeline.process(&request("你好")).unwrap();
        let expected = WavBuffer::from_samples(&[1000, -1000, 25000, 20000], 8000).unwrap();
        assert_eq!(result.audio, expected);
    }

    #[test]
    fn volume_then_pitch_applied() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let req = SynthesisRequest {
            volume: 150,
            pitch: 120,
            ..request("你好")
        };
        let result = pipeline.process(&req).unwrap();
        assert_eq!(
            result.audio.decode_samples().unwrap(),
            vec![1500, -1500, 32767, 30000]
        );
        let layout = result.audio.layout().unwrap();
        assert_eq!(layout.sample_rate, 9600);
        assert_eq!(layout.byte_rate, 19200);
    }

    #[test]
    fn engine_failure_is_fatal() {
        let mut pipeline = Pipeline::new(ScriptedEngine {
            fail_with: Some(105),
            ..Default::default()
        });
        match pipeline.process(&request("你好")).unwrap_err() {
            YukkuriError::Engine { code, .. } => assert_eq!(code, 105),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unspeakable_text_is_rejected() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let err = pipeline.process(&request("123")).unwrap_err();
        assert!(matches!(err, YukkuriError::EmptyText));
        assert_eq!(pipeline.engine().calls, 0);
    }

    #[test]
    fn batch_processes_each_part() {
        let mut pipeline = Pipeline::new(ScriptedEngine::default());
        let results = pipeline.process_batch(&request("你好; A ;;")).unwrap();
        let texts: Vec<&str> = results.iter().map(|r| r.transcript.text.as_str()).collect();
        assert_eq!(texts, vec!["にぃはお", "えー"]);
        assert_eq!(pipeline.engine().calls, 2);
    }

    #[test]
    fn splits_batch_input() {
        assert_eq!(split_batch("a; b ;;c;"), vec!["a", "b", "c"]);
        assert!(split_batch(" ; ").is_empty());
    }

    #[test]
    fn file_prefix_replaces_separators() {
        assert_eq!(file_prefix("你好，世界！", 20), "你好_世界_");
        assert_eq!(file_prefix("hello world.wav", 20), "hello_world_wav");
        assert_eq!(file_prefix("abcdefghijklmnopqrstuvwxyz", 20).chars().count(), 20);
    }

    #[test]
    fn batch_names_are_numbered_from_one() {
        let names: Vec<String> = split_batch("你好;你好")
            .into_iter()
            .enumerate()
            .map(|(idx, part)| batch_file_name(part, idx + 1))
            .collect();
        assert_eq!(names, vec!["你好_1.wav", "你好_2.wav"]);
        assert_eq!(
            batch_file_name("a very long sentence that keeps going", 3),
            "a_very_long_sentence_3.wav"
        );
    }
}
